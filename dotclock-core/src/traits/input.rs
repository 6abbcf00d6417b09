//! Button input trait

use crate::clock::Direction;

/// Button command, with chords and long presses already resolved
///
/// Every single/long/multi-button combination has its own code; the mode
/// controller's dispatch table is keyed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Nothing pressed since the last poll
    #[default]
    None,
    Btn1,
    Btn2,
    Btn3,
    Btn1Long,
    Btn2Long,
    Btn3Long,
    /// Buttons 1 and 2 held together
    Btn12Long,
    /// Buttons 2 and 3 held together
    Btn23Long,
    /// All three buttons held together
    Btn123Long,
}

impl Command {
    /// Check if this is a long press or chord
    pub fn is_long(self) -> bool {
        matches!(
            self,
            Command::Btn1Long
                | Command::Btn2Long
                | Command::Btn3Long
                | Command::Btn12Long
                | Command::Btn23Long
                | Command::Btn123Long
        )
    }

    /// Check if this is a multi-button chord
    pub fn is_chord(self) -> bool {
        matches!(
            self,
            Command::Btn12Long | Command::Btn23Long | Command::Btn123Long
        )
    }

    /// Edit direction selected by a short press
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::Btn1 | Command::Btn2 => Some(Direction::Up),
            Command::Btn3 => Some(Direction::Down),
            _ => None,
        }
    }

    /// Short-press command for a single button bit
    pub fn short_press(buttons: u8) -> Command {
        match buttons {
            0b001 => Command::Btn1,
            0b010 => Command::Btn2,
            0b100 => Command::Btn3,
            _ => Command::None,
        }
    }

    /// Long-press command for a set of held button bits
    ///
    /// Buttons 1 and 3 without 2 have no command.
    pub fn long_press(buttons: u8) -> Command {
        match buttons {
            0b001 => Command::Btn1Long,
            0b010 => Command::Btn2Long,
            0b100 => Command::Btn3Long,
            0b011 => Command::Btn12Long,
            0b110 => Command::Btn23Long,
            0b111 => Command::Btn123Long,
            _ => Command::None,
        }
    }
}

/// Source of button commands
pub trait ButtonInput {
    /// Take the next pending command (`Command::None` when idle)
    fn next_command(&mut self) -> Command;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_and_chord() {
        assert!(!Command::Btn1.is_long());
        assert!(Command::Btn1Long.is_long());
        assert!(Command::Btn123Long.is_long());
        assert!(Command::Btn23Long.is_chord());
        assert!(!Command::Btn2Long.is_chord());
        assert!(!Command::None.is_long());
    }

    #[test]
    fn test_direction() {
        assert_eq!(Command::Btn1.direction(), Some(Direction::Up));
        assert_eq!(Command::Btn2.direction(), Some(Direction::Up));
        assert_eq!(Command::Btn3.direction(), Some(Direction::Down));
        assert_eq!(Command::Btn3Long.direction(), None);
    }

    #[test]
    fn test_button_bits() {
        assert_eq!(Command::short_press(0b010), Command::Btn2);
        assert_eq!(Command::short_press(0b011), Command::None);
        assert_eq!(Command::long_press(0b011), Command::Btn12Long);
        assert_eq!(Command::long_press(0b101), Command::None);
        assert_eq!(Command::long_press(0b111), Command::Btn123Long);
    }
}
