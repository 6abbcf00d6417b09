//! Per-hour brightness schedule
//!
//! The settings storage holds one brightness level per hour of the day.
//! The schedule keeps a single working level together with the hour it
//! belongs to; the editor changes the working level and persists it when
//! the cursor moves on.

use dotclock_core::clock::{wrap_step, Direction};
use dotclock_core::config::{SettingsLayout, HOURS_PER_DAY};
use dotclock_core::traits::SettingsStorage;

/// Hour the brightness cursor moves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourSelect {
    /// Hour of the current time
    Current,
    /// Hour after the cursor (wraps at midnight)
    Next,
}

/// Working brightness level and the hour it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrightnessSchedule {
    layout: SettingsLayout,
    min: u8,
    max: u8,
    hour: u8,
    level: u8,
}

impl BrightnessSchedule {
    pub fn new(layout: SettingsLayout, min: u8, max: u8) -> Self {
        Self {
            layout,
            min,
            max,
            hour: 0,
            level: max,
        }
    }

    /// Hour under the cursor
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Working level
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Load the stored level for `hour` into the working level
    ///
    /// Stored values outside `min..=max` (erased storage reads 0xFF) are
    /// clamped.
    pub fn load_hour<S: SettingsStorage>(&mut self, storage: &mut S, hour: u8) {
        self.hour = hour % HOURS_PER_DAY;
        let stored = storage.read_byte(self.layout.brightness_addr(self.hour));
        self.level = stored.clamp(self.min, self.max);
    }

    /// Persist the working level at the cursor hour
    pub fn persist<S: SettingsStorage>(&self, storage: &mut S) {
        storage.update_byte(self.layout.brightness_addr(self.hour), self.level);
    }

    /// Persist the working level, move the cursor and load the new hour
    pub fn select<S: SettingsStorage>(
        &mut self,
        storage: &mut S,
        select: HourSelect,
        current_hour: u8,
    ) {
        self.persist(storage);

        let hour = match select {
            HourSelect::Current => current_hour,
            HourSelect::Next => (self.hour + 1) % HOURS_PER_DAY,
        };
        self.load_hour(storage, hour);
    }

    /// Step the working level, wrapping between min and max
    pub fn adjust(&mut self, direction: Direction) {
        let level = self.level.clamp(self.min, self.max);
        self.level = wrap_step(level, direction, self.min, self.max);
    }
}
