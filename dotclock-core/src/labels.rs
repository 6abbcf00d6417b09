//! Persisted text labels
//!
//! Labels (weekday and month names, field names, units) live in the
//! settings EEPROM as null-terminated runs. They are scanned once at
//! startup into an owned table.
//!
//! Scan rules:
//! - each non-empty run fills the next slot, in slot order
//! - a null byte where a run would start is skipped by one byte
//! - the scan stops when every slot is filled or storage ends
//!
//! Damaged data therefore yields fewer or shifted labels, never an error.

use heapless::Vec;

use crate::clock::{AlarmField, TimeField};
use crate::traits::SettingsStorage;

/// Maximum stored label length (longer runs are truncated)
pub const MAX_LABEL_LEN: usize = 16;

/// Number of label slots
pub const LABEL_COUNT: usize = Label::Sensor4 as usize + 1;

/// Maximum number of temperature sensors with their own label
pub const MAX_SENSOR_LABELS: u8 = 4;

/// Label slots, in storage order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Label {
    // Weekday names, indexed by `weekday % 7`
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    // Month names, indexed by `month % 12`
    December,
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    /// Suffix after the year in the date ticker
    YearSuffix,
    // Time-edit field names, in `TimeField` order
    FieldHour,
    FieldMinute,
    FieldSecond,
    FieldWeekday,
    FieldDate,
    FieldMonth,
    FieldYear,
    // Alarm-edit field names
    AlarmHour,
    AlarmMinute,
    // Short weekday names for the alarm toggles
    ShortMonday,
    ShortTuesday,
    ShortWednesday,
    ShortThursday,
    ShortFriday,
    ShortSaturday,
    ShortSunday,
    /// Degree sign for the temperature ticker
    Degree,
    // Sensor names
    Sensor1,
    Sensor2,
    Sensor3,
    Sensor4,
}

/// Label table parsed from settings storage
#[derive(Debug, Clone)]
pub struct LabelTable {
    slots: [Vec<u8, MAX_LABEL_LEN>; LABEL_COUNT],
    loaded: usize,
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl LabelTable {
    /// Table with every label empty
    pub fn empty() -> Self {
        Self {
            slots: core::array::from_fn(|_| Vec::new()),
            loaded: 0,
        }
    }

    /// Scan labels from `storage`, starting at `base`
    pub fn load<S: SettingsStorage>(storage: &mut S, base: u16) -> Self {
        let mut table = Self::empty();
        let end = storage.capacity();
        let mut addr = base;

        while table.loaded < LABEL_COUNT && addr < end {
            if storage.read_byte(addr) == 0 {
                addr += 1;
                continue;
            }

            let slot = &mut table.slots[table.loaded];
            while addr < end {
                let byte = storage.read_byte(addr);
                if byte == 0 {
                    break;
                }
                // Over-long runs keep their first MAX_LABEL_LEN bytes
                let _ = slot.push(byte);
                addr += 1;
            }
            table.loaded += 1;
        }

        table
    }

    /// Number of slots filled by the scan
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    /// Label bytes (empty when the slot was never filled)
    pub fn get(&self, label: Label) -> &[u8] {
        self.slot(label as usize)
    }

    fn slot(&self, index: usize) -> &[u8] {
        self.slots.get(index).map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// Long weekday name for RTC weekday 1..=7
    pub fn weekday(&self, weekday: u8) -> &[u8] {
        self.slot(Label::Sunday as usize + usize::from(weekday % 7))
    }

    /// Month name for RTC month 1..=12
    pub fn month(&self, month: u8) -> &[u8] {
        self.slot(Label::December as usize + usize::from(month % 12))
    }

    /// Name of a time-edit field
    pub fn time_field(&self, field: TimeField) -> &[u8] {
        self.slot(Label::FieldHour as usize + field.index())
    }

    /// Name of an alarm-edit field
    pub fn alarm_field(&self, field: AlarmField) -> &[u8] {
        match field {
            AlarmField::Hour => self.get(Label::AlarmHour),
            AlarmField::Minute => self.get(Label::AlarmMinute),
            day => {
                let offset = day.weekday().map(|d| usize::from(d - 1)).unwrap_or(0);
                self.slot(Label::ShortMonday as usize + offset)
            }
        }
    }

    /// Name of temperature sensor `index`
    pub fn sensor(&self, index: u8) -> &[u8] {
        if index < MAX_SENSOR_LABELS {
            self.slot(Label::Sensor1 as usize + usize::from(index))
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MemoryStorage;

    fn storage_with(base: u16, bytes: &[u8]) -> MemoryStorage<256> {
        let mut storage = MemoryStorage::<256>::new();
        storage.write(base, bytes);
        storage
    }

    #[test]
    fn test_sequential_labels() {
        let mut storage = storage_with(0x20, b"Sun\0Mon\0Tue\0");
        let table = LabelTable::load(&mut storage, 0x20);

        assert_eq!(table.loaded(), 3);
        assert_eq!(table.get(Label::Sunday), b"Sun");
        assert_eq!(table.get(Label::Monday), b"Mon");
        assert_eq!(table.get(Label::Tuesday), b"Tue");
        assert_eq!(table.get(Label::Wednesday), b"");
    }

    #[test]
    fn test_empty_runs_are_skipped() {
        let mut storage = storage_with(0x20, b"\0\0Sun\0\0\0Mon\0");
        let table = LabelTable::load(&mut storage, 0x20);

        assert_eq!(table.loaded(), 2);
        assert_eq!(table.get(Label::Sunday), b"Sun");
        assert_eq!(table.get(Label::Monday), b"Mon");
    }

    #[test]
    fn test_scan_stops_at_storage_end() {
        // Unterminated run reaching the last byte
        let mut storage = MemoryStorage::<8>::new();
        storage.write(4, b"ABCD");
        let table = LabelTable::load(&mut storage, 4);

        assert_eq!(table.loaded(), 1);
        assert_eq!(table.get(Label::Sunday), b"ABCD");
    }

    #[test]
    fn test_long_run_is_truncated() {
        let mut storage = storage_with(0, b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\0Next\0");
        let table = LabelTable::load(&mut storage, 0);

        assert_eq!(table.get(Label::Sunday).len(), MAX_LABEL_LEN);
        assert_eq!(table.get(Label::Monday), b"Next");
    }

    #[test]
    fn test_stops_when_all_slots_filled() {
        let mut storage = MemoryStorage::<512>::new();
        let mut addr = 0;
        for _ in 0..LABEL_COUNT + 5 {
            storage.write(addr, b"x\0");
            addr += 2;
        }
        let table = LabelTable::load(&mut storage, 0);
        assert_eq!(table.loaded(), LABEL_COUNT);
    }

    #[test]
    fn test_weekday_and_month_indexing() {
        let mut storage = MemoryStorage::<512>::new();
        let mut addr = 0;
        for name in [
            "Su", "Mo", "Tu", "We", "Th", "Fr", "Sa", "Dec", "Jan", "Feb",
        ] {
            storage.write(addr, name.as_bytes());
            addr += name.len() as u16 + 1;
        }
        let table = LabelTable::load(&mut storage, 0);

        assert_eq!(table.weekday(7), b"Su");
        assert_eq!(table.weekday(1), b"Mo");
        assert_eq!(table.month(12), b"Dec");
        assert_eq!(table.month(2), b"Feb");
    }

    #[test]
    fn test_sensor_out_of_range_is_empty() {
        let table = LabelTable::empty();
        assert_eq!(table.sensor(MAX_SENSOR_LABELS), b"");
    }
}
