//! Alarm views
//!
//! The read-only view shows the alarm time, the bell glyph and the weekday
//! column, all from the working setting so that edits show up before they
//! are saved. The edit view shows one field at a time with its label.

use dotclock_core::clock::{AlarmField, AlarmSetting, WeekdayMask};
use dotclock_core::format::NumberFormatter;
use dotclock_core::labels::LabelTable;
use dotclock_core::mask::DirtyMask;
use dotclock_core::traits::MatrixDisplay;

use super::{digit_diff, draw_separator, GLYPH_ALARM};

/// Weekday toggle drawn while the day is enabled
const DAY_ON: [u8; 3] = [b' ', GLYPH_ALARM, b' '];
/// Weekday toggle drawn while the day is disabled
const DAY_OFF: [u8; 3] = *b"   ";

#[derive(Debug, Clone, Copy, Default)]
pub struct AlarmView {
    hour: u8,
    minute: u8,
    weekdays: WeekdayMask,
}

impl AlarmView {
    pub fn draw<M: MatrixDisplay>(
        &mut self,
        display: &mut M,
        formatter: &mut NumberFormatter,
        alarm: &AlarmSetting,
    ) -> DirtyMask {
        let weekdays = alarm.weekdays;

        display.set_cursor_x(0);
        display.load_text(formatter.format(i16::from(alarm.hour), 2, 0, b' '));
        display.set_cursor_x(13);
        display.load_text(formatter.format(i16::from(alarm.minute), 2, 0, b'0'));
        display.set_cursor_x(26);
        display.load_text(&[GLYPH_ALARM]);

        draw_separator(display, 2, 10);
        display.write_column(23, weekdays.bits());

        let mut mask = digit_diff(self.hour, alarm.hour, DirtyMask::HOUR_TENS, DirtyMask::HOUR_UNITS);
        mask |= digit_diff(self.minute, alarm.minute, DirtyMask::MIN_TENS, DirtyMask::MIN_UNITS);
        mask |= DirtyMask::WEEKDAYS.when(self.weekdays != weekdays);

        self.hour = alarm.hour;
        self.minute = alarm.minute;
        self.weekdays = weekdays;
        mask
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlarmEditView {
    value: u8,
    field: Option<AlarmField>,
}

impl AlarmEditView {
    pub fn draw<M: MatrixDisplay>(
        &mut self,
        display: &mut M,
        formatter: &mut NumberFormatter,
        labels: &LabelTable,
        field: AlarmField,
        value: u8,
    ) -> DirtyMask {
        display.set_cursor_x(0);
        match field {
            AlarmField::Hour | AlarmField::Minute => {
                display.load_text(formatter.format(i16::from(value), 2, 0, b' '));
            }
            _ if value != 0 => display.load_text(&DAY_ON),
            _ => display.load_text(&DAY_OFF),
        }
        display.set_cursor_x(13);
        display.load_text(labels.alarm_field(field));

        let mut mask = digit_diff(self.value, value, DirtyMask::HOUR_TENS, DirtyMask::ALARM);
        mask |= DirtyMask::ALL.when(self.field != Some(field));

        self.value = value;
        self.field = Some(field);
        mask
    }
}
