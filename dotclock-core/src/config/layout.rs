//! Persisted settings layout
//!
//! The settings EEPROM holds the per-hour brightness table, two display
//! flags and a run of null-terminated text labels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of entries in the brightness schedule
pub const HOURS_PER_DAY: u8 = 24;

/// Byte addresses of the persisted settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SettingsLayout {
    /// First of 24 contiguous brightness bytes (hour 0)
    pub brightness_base: u16,
    /// Big-number mode byte
    pub big_number: u16,
    /// Hour leading-zero style byte
    pub hour_zero: u16,
    /// Start of the label area (runs until the end of storage)
    pub labels_base: u16,
}

impl Default for SettingsLayout {
    fn default() -> Self {
        Self {
            brightness_base: 0x00,
            big_number: 0x18,
            hour_zero: 0x19,
            labels_base: 0x20,
        }
    }
}

impl SettingsLayout {
    /// Address of the brightness level for `hour`
    pub fn brightness_addr(&self, hour: u8) -> u16 {
        self.brightness_base + u16::from(hour % HOURS_PER_DAY)
    }
}
