//! Configuration type definitions
//!
//! Tuning values for the clock. Defaults match the stock board; the
//! display flags are persisted as single bytes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::layout::SettingsLayout;

/// Clock digit font size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BigNumberMode {
    /// Hours and minutes plus small seconds
    #[default]
    Normal,
    /// Taller digits, seconds indicator
    Big,
    /// Full-height digits, no seconds
    Extra,
}

impl BigNumberMode {
    /// Decode the persisted byte (unknown values read as Normal)
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            1 => BigNumberMode::Big,
            2 => BigNumberMode::Extra,
            _ => BigNumberMode::Normal,
        }
    }

    /// Persisted byte value
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    /// Next mode in the Normal → Big → Extra cycle
    pub fn next(self) -> Self {
        match self {
            BigNumberMode::Normal => BigNumberMode::Big,
            BigNumberMode::Big => BigNumberMode::Extra,
            BigNumberMode::Extra => BigNumberMode::Normal,
        }
    }
}

/// Padding of the hour tens digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HourZeroStyle {
    /// "07:30"
    #[default]
    PadZero,
    /// " 7:30"
    PadSpace,
}

impl HourZeroStyle {
    /// Decode the persisted byte (stored as the pad character)
    pub fn from_byte(byte: u8) -> Self {
        if byte == b' ' {
            HourZeroStyle::PadSpace
        } else {
            HourZeroStyle::PadZero
        }
    }

    /// Pad character, which is also the persisted byte
    pub fn pad(self) -> u8 {
        match self {
            HourZeroStyle::PadZero => b'0',
            HourZeroStyle::PadSpace => b' ',
        }
    }

    /// The other style
    pub fn toggled(self) -> Self {
        match self {
            HourZeroStyle::PadZero => HourZeroStyle::PadSpace,
            HourZeroStyle::PadSpace => HourZeroStyle::PadZero,
        }
    }
}

/// Beeper durations in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToneDurations {
    /// Confirmation for a short press
    pub short_press_ms: u16,
    /// Confirmation for a long press or chord
    pub long_press_ms: u16,
    /// Alarm tone
    pub alarm_ms: u16,
    /// Top-of-hour chime
    pub chime_ms: u16,
}

impl Default for ToneDurations {
    fn default() -> Self {
        Self {
            short_press_ms: 80,
            long_press_ms: 160,
            alarm_ms: 60_000,
            chime_ms: 160,
        }
    }
}

/// Button sampling thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonTiming {
    /// A level must be stable this long before it is accepted
    pub debounce_ms: u16,
    /// Hold time after which a press becomes a long press
    pub long_press_ms: u16,
}

impl Default for ButtonTiming {
    fn default() -> Self {
        Self {
            debounce_ms: 20,
            long_press_ms: 600,
        }
    }
}

/// Clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    /// Second at which the main screen scrolls the date
    pub date_scroll_second: u8,
    /// Second at which the main screen scrolls the temperature
    pub temp_scroll_second: u8,
    /// Lowest matrix brightness level
    pub min_brightness: u8,
    /// Highest matrix brightness level
    pub max_brightness: u8,
    /// Beeper durations
    pub tones: ToneDurations,
    /// Button thresholds
    pub buttons: ButtonTiming,
    /// Persisted settings addresses
    pub layout: SettingsLayout,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            date_scroll_second: 10,
            temp_scroll_second: 40,
            min_brightness: 0,
            max_brightness: 15,
            tones: ToneDurations::default(),
            buttons: ButtonTiming::default(),
            layout: SettingsLayout::default(),
        }
    }
}
