//! Date/time and alarm data model
//!
//! Snapshots are plain `Copy` values. The engine refreshes its copies once
//! per loop iteration and never holds a reference into a collaborator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction of a value change or edit step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    /// Signed step for this direction
    pub fn delta(self) -> i8 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

/// Step `value` by `direction`, wrapping inside `min..=max`
pub fn wrap_step(value: u8, direction: Direction, min: u8, max: u8) -> u8 {
    match direction {
        Direction::Up if value >= max => min,
        Direction::Up => value + 1,
        Direction::Down if value <= min => max,
        Direction::Down => value - 1,
    }
}

/// RTC date/time snapshot
///
/// `weekday` runs 1 (Monday) to 7 (Sunday); `year` is the offset from 2000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTime {
    pub second: u8,
    pub minute: u8,
    pub hour: u8,
    pub weekday: u8,
    pub date: u8,
    pub month: u8,
    pub year: u8,
}

impl Default for DateTime {
    fn default() -> Self {
        Self {
            second: 0,
            minute: 0,
            hour: 0,
            weekday: 1,
            date: 1,
            month: 1,
            year: 0,
        }
    }
}

impl DateTime {
    /// Create a snapshot at the given time of day (date fields default)
    pub const fn at(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            second,
            minute,
            hour,
            weekday: 1,
            date: 1,
            month: 1,
            year: 0,
        }
    }

    /// Same time with a different calendar date
    pub const fn on(self, weekday: u8, date: u8, month: u8, year: u8) -> Self {
        Self {
            weekday,
            date,
            month,
            year,
            ..self
        }
    }

    /// Value of a single field
    pub fn field(&self, field: TimeField) -> u8 {
        match field {
            TimeField::Hour => self.hour,
            TimeField::Minute => self.minute,
            TimeField::Second => self.second,
            TimeField::Weekday => self.weekday,
            TimeField::Date => self.date,
            TimeField::Month => self.month,
            TimeField::Year => self.year,
        }
    }

    /// Copy with one field stepped, wrapping inside the field's range
    pub fn adjusted(self, field: TimeField, direction: Direction) -> Self {
        let (min, max) = field.bounds();
        let value = wrap_step(self.field(field).clamp(min, max), direction, min, max);
        let mut next = self;
        match field {
            TimeField::Hour => next.hour = value,
            TimeField::Minute => next.minute = value,
            TimeField::Second => next.second = value,
            TimeField::Weekday => next.weekday = value,
            TimeField::Date => next.date = value,
            TimeField::Month => next.month = value,
            TimeField::Year => next.year = value,
        }
        next
    }

    /// Four-digit calendar year
    pub fn full_year(&self) -> i16 {
        2000 + i16::from(self.year)
    }
}

/// Editable time field, in edit order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeField {
    Hour,
    Minute,
    Second,
    Weekday,
    Date,
    Month,
    Year,
}

impl TimeField {
    /// All fields in edit order
    pub const ALL: [TimeField; 7] = [
        TimeField::Hour,
        TimeField::Minute,
        TimeField::Second,
        TimeField::Weekday,
        TimeField::Date,
        TimeField::Month,
        TimeField::Year,
    ];

    /// Next field in edit order (wraps from Year to Hour)
    pub fn next(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Position in edit order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inclusive value range accepted by the RTC
    pub fn bounds(self) -> (u8, u8) {
        match self {
            TimeField::Hour => (0, 23),
            TimeField::Minute | TimeField::Second => (0, 59),
            TimeField::Weekday => (1, 7),
            TimeField::Date => (1, 31),
            TimeField::Month => (1, 12),
            TimeField::Year => (0, 99),
        }
    }
}

/// 7-bit alarm weekday mask: bit `k` enables weekday `k + 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeekdayMask(u8);

impl WeekdayMask {
    pub const NONE: Self = Self(0);
    pub const EVERY_DAY: Self = Self(0x7F);

    /// Build from raw register bits (bit 7 is dropped)
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x7F)
    }

    /// Raw bits, as drawn in the weekday column
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether `weekday` (1..=7) is enabled
    pub fn contains(self, weekday: u8) -> bool {
        (1..=7).contains(&weekday) && self.0 & (1 << (weekday - 1)) != 0
    }

    /// Flip the bit for `weekday` (1..=7)
    pub fn toggle(&mut self, weekday: u8) {
        if (1..=7).contains(&weekday) {
            self.0 ^= 1 << (weekday - 1);
        }
    }
}

/// Alarm time plus weekday mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlarmSetting {
    pub hour: u8,
    pub minute: u8,
    pub weekdays: WeekdayMask,
}

impl AlarmSetting {
    pub const fn new(hour: u8, minute: u8, weekdays: WeekdayMask) -> Self {
        Self {
            hour,
            minute,
            weekdays,
        }
    }

    /// Value shown while editing `field` (weekday fields are 0 or 1)
    pub fn field_value(&self, field: AlarmField) -> u8 {
        match field {
            AlarmField::Hour => self.hour,
            AlarmField::Minute => self.minute,
            _ => field
                .weekday()
                .map(|day| u8::from(self.weekdays.contains(day)))
                .unwrap_or(0),
        }
    }

    /// Copy with one field changed: hour/minute wrap, weekdays toggle
    pub fn adjusted(self, field: AlarmField, direction: Direction) -> Self {
        let mut next = self;
        match field {
            AlarmField::Hour => next.hour = wrap_step(self.hour.min(23), direction, 0, 23),
            AlarmField::Minute => next.minute = wrap_step(self.minute.min(59), direction, 0, 59),
            _ => {
                if let Some(day) = field.weekday() {
                    next.weekdays.toggle(day);
                }
            }
        }
        next
    }
}

/// Editable alarm field, in edit order
///
/// Sunday is the terminator: advancing past it leaves alarm editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlarmField {
    Hour,
    Minute,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl AlarmField {
    /// Next field, or `None` after the terminator
    pub fn next(self) -> Option<Self> {
        use AlarmField::*;
        match self {
            Hour => Some(Minute),
            Minute => Some(Monday),
            Monday => Some(Tuesday),
            Tuesday => Some(Wednesday),
            Wednesday => Some(Thursday),
            Thursday => Some(Friday),
            Friday => Some(Saturday),
            Saturday => Some(Sunday),
            Sunday => None,
        }
    }

    /// Weekday number (1..=7) for the weekday toggles
    pub fn weekday(self) -> Option<u8> {
        match self {
            AlarmField::Hour | AlarmField::Minute => None,
            day => Some(day as u8 - AlarmField::Monday as u8 + 1),
        }
    }

    /// Whether advancing from this field ends the edit
    pub fn is_terminator(self) -> bool {
        self == AlarmField::Sunday
    }
}
