//! Main clock face
//!
//! Layout by font:
//!
//! | Font   | Hour | Separator        | Minute | Seconds | Column 0 | Column 23 |
//! |--------|------|------------------|--------|---------|----------|-----------|
//! | Normal | 0    | 10-11 (phase)    | 13     | 25      | hour     | weekdays  |
//! | Big    | 0    | 11-12 (sec bit)  | 13     | 25      | hour     | weekdays  |
//! | Extra  | 1    | 15-16 (phase)    | 18     | -       | cleared  | -         |

use dotclock_core::clock::{DateTime, WeekdayMask};
use dotclock_core::config::{BigNumberMode, HourZeroStyle};
use dotclock_core::format::NumberFormatter;
use dotclock_core::mask::DirtyMask;
use dotclock_core::traits::{FontSize, MatrixDisplay};

use super::{digit_diff, draw_separator};

/// Region bits for hour tens/units and minute tens/units in `font`
fn regions(font: BigNumberMode) -> [DirtyMask; 4] {
    match font {
        BigNumberMode::Normal => [
            DirtyMask::HOUR_TENS,
            DirtyMask::HOUR_UNITS,
            DirtyMask::MIN_TENS,
            DirtyMask::MIN_UNITS,
        ],
        BigNumberMode::Big => [
            DirtyMask::BIG_HOUR_TENS,
            DirtyMask::BIG_HOUR_UNITS,
            DirtyMask::BIG_MIN_TENS,
            DirtyMask::BIG_MIN_UNITS,
        ],
        BigNumberMode::Extra => [
            DirtyMask::EXTRA_HOUR_TENS,
            DirtyMask::EXTRA_HOUR_UNITS,
            DirtyMask::EXTRA_MIN_TENS,
            DirtyMask::EXTRA_MIN_UNITS,
        ],
    }
}

fn font_size(font: BigNumberMode) -> FontSize {
    match font {
        BigNumberMode::Normal => FontSize::Normal,
        BigNumberMode::Big => FontSize::Big,
        BigNumberMode::Extra => FontSize::Extra,
    }
}

/// Clock face cache
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockView {
    hour: u8,
    minute: u8,
    second: u8,
    font: Option<BigNumberMode>,
}

impl ClockView {
    /// Draw the clock face and return the changed regions
    pub fn draw<M: MatrixDisplay>(
        &mut self,
        display: &mut M,
        formatter: &mut NumberFormatter,
        now: &DateTime,
        font: BigNumberMode,
        hour_zero: HourZeroStyle,
        weekdays: WeekdayMask,
    ) -> DirtyMask {
        let extra = font == BigNumberMode::Extra;
        let size = font_size(font);

        display.set_cursor_x(if extra { 1 } else { 0 });
        display.load_numeric(formatter.format(i16::from(now.hour), 2, 0, hour_zero.pad()), size);

        display.set_cursor_x(if extra { 18 } else { 13 });
        display.load_numeric(formatter.format(i16::from(now.minute), 2, 0, b'0'), size);

        if !extra {
            display.set_cursor_x(25);
            display.load_numeric(
                formatter.format(i16::from(now.second), 2, 0, b'0'),
                FontSize::Small,
            );
        }

        let [hour_tens, hour_units, min_tens, min_units] = regions(font);
        let mut mask = DirtyMask::ALL.when(self.font != Some(font));
        mask |= digit_diff(self.hour, now.hour, hour_tens, hour_units);
        mask |= digit_diff(self.minute, now.minute, min_tens, min_units);
        if !extra {
            mask |= digit_diff(
                self.second,
                now.second,
                DirtyMask::SEC_TENS,
                DirtyMask::SEC_UNITS,
            );
        }

        let phase = now.second % 5;
        match font {
            BigNumberMode::Normal => draw_separator(display, phase, 10),
            BigNumberMode::Big => {
                let bit = now.second & 0x01;
                display.write_column(11, (bit ^ 0x01) << 7);
                display.write_column(12, bit << 7);
            }
            BigNumberMode::Extra => {
                display.write_column(0, 0x00);
                draw_separator(display, phase, 15);
            }
        }
        if !extra {
            display.write_column(23, weekdays.bits());
        }

        self.hour = now.hour;
        self.minute = now.minute;
        self.second = now.second;
        self.font = Some(font);

        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotclock_core::mock::{MatrixOp, MockMatrix};

    fn draw(
        view: &mut ClockView,
        matrix: &mut MockMatrix,
        now: DateTime,
        font: BigNumberMode,
    ) -> DirtyMask {
        let mut formatter = NumberFormatter::new();
        view.draw(
            matrix,
            &mut formatter,
            &now,
            font,
            HourZeroStyle::PadSpace,
            WeekdayMask::from_bits(0b0011111),
        )
    }

    #[test]
    fn test_normal_layout() {
        let mut view = ClockView::default();
        let mut matrix = MockMatrix::new();
        draw(&mut view, &mut matrix, DateTime::at(7, 5, 42), BigNumberMode::Normal);

        assert_eq!(matrix.text().as_slice(), b" 70542");
        assert!(matrix.recorded(&MatrixOp::CursorX(25)));
        // Phase 42 % 5 = 2
        assert_eq!(matrix.column(10), Some(0x36));
        assert_eq!(matrix.column(11), Some(0x36));
        assert_eq!(matrix.column(23), Some(0b0011111));
    }

    #[test]
    fn test_extra_layout() {
        let mut view = ClockView::default();
        let mut matrix = MockMatrix::new();
        draw(&mut view, &mut matrix, DateTime::at(12, 34, 56), BigNumberMode::Extra);

        assert_eq!(matrix.text().as_slice(), b"1234");
        assert!(matrix.recorded(&MatrixOp::CursorX(1)));
        assert!(matrix.recorded(&MatrixOp::CursorX(18)));
        assert!(!matrix.recorded(&MatrixOp::CursorX(25)));
        assert_eq!(matrix.column(0), Some(0x00));
        // Phase 56 % 5 = 1
        assert_eq!(matrix.column(15), Some(0x26));
        assert_eq!(matrix.column(23), None);
    }

    #[test]
    fn test_big_seconds_indicator() {
        let mut view = ClockView::default();
        let mut matrix = MockMatrix::new();
        draw(&mut view, &mut matrix, DateTime::at(1, 2, 3), BigNumberMode::Big);
        assert_eq!(matrix.column(11), Some(0x00));
        assert_eq!(matrix.column(12), Some(0x80));

        draw(&mut view, &mut matrix, DateTime::at(1, 2, 4), BigNumberMode::Big);
        assert_eq!(matrix.column(11), Some(0x80));
        assert_eq!(matrix.column(12), Some(0x00));
    }

    #[test]
    fn test_regions_follow_font() {
        let mut view = ClockView::default();
        let mut matrix = MockMatrix::new();
        draw(&mut view, &mut matrix, DateTime::at(9, 59, 59), BigNumberMode::Big);

        let mask = draw(&mut view, &mut matrix, DateTime::at(10, 0, 0), BigNumberMode::Big);
        assert_eq!(
            mask,
            DirtyMask::BIG_HOUR_TENS
                | DirtyMask::BIG_HOUR_UNITS
                | DirtyMask::BIG_MIN_TENS
                | DirtyMask::BIG_MIN_UNITS
                | DirtyMask::SEC_TENS
                | DirtyMask::SEC_UNITS
        );
    }

    #[test]
    fn test_unchanged_is_empty_and_font_change_is_full() {
        let mut view = ClockView::default();
        let mut matrix = MockMatrix::new();
        let now = DateTime::at(8, 15, 30);

        assert!(draw(&mut view, &mut matrix, now, BigNumberMode::Normal).is_full());
        assert!(draw(&mut view, &mut matrix, now, BigNumberMode::Normal).is_empty());
        assert!(draw(&mut view, &mut matrix, now, BigNumberMode::Extra).is_full());
    }
}
