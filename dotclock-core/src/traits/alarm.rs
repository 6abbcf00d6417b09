//! Alarm storage trait

use crate::clock::{AlarmField, AlarmSetting, Direction, WeekdayMask};

/// Alarm setting with a working copy and a persisted copy
///
/// Edits change the working copy only; `save` persists it. There is no
/// cancel: unsaved edits survive until power is lost.
pub trait AlarmStore {
    /// Current working alarm
    fn read_alarm(&mut self) -> AlarmSetting;

    /// Persisted weekday mask
    ///
    /// Decides whether the alarm fires today and is overlaid on the clock
    /// face. The Alarm view draws the working mask from `read_alarm` instead.
    fn raw_weekday_mask(&mut self) -> WeekdayMask;

    /// Value of a single field of the working alarm
    fn edit_value(&mut self, field: AlarmField) -> u8 {
        self.read_alarm().field_value(field)
    }

    /// Change one field of the working alarm
    fn change_value(&mut self, field: AlarmField, direction: Direction);

    /// Persist the working alarm
    fn save(&mut self);
}
