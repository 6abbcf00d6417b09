//! Edit cursors

use crate::clock::{AlarmField, TimeField};

/// Field under edit in the time-edit view (`None` = not editing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeEditCursor(Option<TimeField>);

impl TimeEditCursor {
    pub const NOEDIT: Self = Self(None);

    /// Field under edit
    pub fn field(self) -> Option<TimeField> {
        self.0
    }

    /// Move to the next field, starting at Hour when not editing
    pub fn advance(&mut self) {
        self.0 = Some(match self.0 {
            Some(field) => field.next(),
            None => TimeField::Hour,
        });
    }

    /// Leave time editing
    pub fn clear(&mut self) {
        self.0 = None;
    }
}

/// Field under edit in the alarm-edit view (`None` = not editing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmEditCursor(Option<AlarmField>);

impl AlarmEditCursor {
    pub const NOEDIT: Self = Self(None);

    /// Field under edit
    pub fn field(self) -> Option<AlarmField> {
        self.0
    }

    /// Check if the cursor sits on the terminator field
    pub fn at_terminator(self) -> bool {
        self.0.is_some_and(AlarmField::is_terminator)
    }

    /// Move to the next field, starting at Hour when not editing
    ///
    /// Advancing past the terminator clears the cursor.
    pub fn advance(&mut self) {
        self.0 = match self.0 {
            Some(field) => field.next(),
            None => Some(AlarmField::Hour),
        };
    }

    /// Leave alarm editing
    pub fn clear(&mut self) {
        self.0 = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_cursor_starts_at_hour() {
        let mut cursor = TimeEditCursor::NOEDIT;
        cursor.advance();
        assert_eq!(cursor.field(), Some(TimeField::Hour));
        cursor.advance();
        assert_eq!(cursor.field(), Some(TimeField::Minute));
        cursor.clear();
        assert_eq!(cursor, TimeEditCursor::NOEDIT);
    }

    #[test]
    fn test_alarm_cursor_walks_to_terminator() {
        let mut cursor = AlarmEditCursor::NOEDIT;
        let mut visited = 0;
        loop {
            cursor.advance();
            if cursor.field().is_none() {
                break;
            }
            visited += 1;
        }
        // Hour, Minute and seven weekdays
        assert_eq!(visited, 9);
    }

    #[test]
    fn test_alarm_cursor_terminator() {
        let mut cursor = AlarmEditCursor::NOEDIT;
        for _ in 0..9 {
            cursor.advance();
        }
        assert_eq!(cursor.field(), Some(AlarmField::Sunday));
        assert!(cursor.at_terminator());
    }
}
