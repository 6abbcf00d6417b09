//! Per-view renderers
//!
//! Each view draws into the matrix back buffer and keeps a small cache of
//! what it drew last time. Comparing against that cache yields the dirty
//! mask; the engine adds forced bits and performs the buffer swap.

pub mod alarm;
pub mod brightness;
pub mod clock;
pub mod ticker;
pub mod time_edit;

pub use alarm::{AlarmEditView, AlarmView};
pub use brightness::BrightnessView;
pub use clock::ClockView;
pub use ticker::Ticker;
pub use time_edit::TimeEditView;

use dotclock_core::clock::Direction;
use dotclock_core::mask::DirtyMask;
use dotclock_core::traits::{Effect, MatrixDisplay};

/// Views the engine can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    Clock,
    TimeEdit,
    Alarm,
    AlarmEdit,
    Brightness,
}

/// Hour/minute separator glyphs, indexed by phase
pub const SEPARATOR_GLYPHS: [u8; 5] = [0x32, 0x26, 0x36, 0x46, 0x62];

/// Alarm bell glyph
pub const GLYPH_ALARM: u8 = 0xA0;
/// Sun glyph after the brightness level
pub const GLYPH_SUN: u8 = 0xA4;
/// Arrow glyph after the brightness hour
pub const GLYPH_ARROW: u8 = 0xBB;

/// Region bits for the tens and units of a two-digit value that changed
pub(crate) fn digit_diff(old: u8, new: u8, tens: DirtyMask, units: DirtyMask) -> DirtyMask {
    tens.when(old / 10 != new / 10) | units.when(old % 10 != new % 10)
}

/// Draw the two-column separator for `phase` at `col`
pub(crate) fn draw_separator<M: MatrixDisplay>(display: &mut M, phase: u8, col: u8) {
    let glyph = SEPARATOR_GLYPHS[usize::from(phase) % SEPARATOR_GLYPHS.len()];
    display.write_column(col, glyph);
    display.write_column(col + 1, glyph);
}

/// Swap effect following an edit direction
pub(crate) fn edit_effect(direction: Direction) -> Effect {
    match direction {
        Direction::Up => Effect::ScrollDown,
        Direction::Down => Effect::ScrollUp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_diff() {
        let tens = DirtyMask::HOUR_TENS;
        let units = DirtyMask::HOUR_UNITS;
        assert!(digit_diff(12, 12, tens, units).is_empty());
        assert_eq!(digit_diff(12, 13, tens, units), units);
        assert_eq!(digit_diff(19, 20, tens, units), tens | units);
        assert_eq!(digit_diff(2, 12, tens, units), tens);
    }

    #[test]
    fn test_edit_effect() {
        assert_eq!(edit_effect(Direction::Up), Effect::ScrollDown);
        assert_eq!(edit_effect(Direction::Down), Effect::ScrollUp);
    }
}
