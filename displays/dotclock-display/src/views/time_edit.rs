//! Time-edit view
//!
//! Value of the field under edit at column 0, its label at column 13.

use dotclock_core::clock::{DateTime, TimeField};
use dotclock_core::format::NumberFormatter;
use dotclock_core::labels::LabelTable;
use dotclock_core::mask::DirtyMask;
use dotclock_core::traits::MatrixDisplay;

use super::digit_diff;

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeEditView {
    value: u8,
    field: Option<TimeField>,
}

impl TimeEditView {
    pub fn draw<M: MatrixDisplay>(
        &mut self,
        display: &mut M,
        formatter: &mut NumberFormatter,
        labels: &LabelTable,
        now: &DateTime,
        field: TimeField,
    ) -> DirtyMask {
        let value = now.field(field);

        display.set_cursor_x(0);
        display.load_text(formatter.format(i16::from(value), 2, 0, b' '));
        display.set_cursor_x(13);
        display.load_text(labels.time_field(field));

        let mut mask = digit_diff(self.value, value, DirtyMask::HOUR_TENS, DirtyMask::HOUR_UNITS);
        mask |= DirtyMask::ALL.when(self.field != Some(field));

        self.value = value;
        self.field = Some(field);
        mask
    }
}
