//! Brightness-edit view
//!
//! Cursor hour with an arrow at column 0, working level with a sun glyph
//! at column 15.

use dotclock_core::format::NumberFormatter;
use dotclock_core::mask::DirtyMask;
use dotclock_core::traits::MatrixDisplay;

use super::{digit_diff, GLYPH_ARROW, GLYPH_SUN};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrightnessView {
    hour: u8,
    level: u8,
}

impl BrightnessView {
    pub fn draw<M: MatrixDisplay>(
        &mut self,
        display: &mut M,
        formatter: &mut NumberFormatter,
        hour: u8,
        level: u8,
    ) -> DirtyMask {
        display.set_cursor_x(0);
        display.load_text(formatter.format(i16::from(hour), 2, 0, b' '));
        display.load_text(&[GLYPH_ARROW]);
        display.set_cursor_x(15);
        display.load_text(formatter.format(i16::from(level), 2, 0, b' '));
        display.load_text(&[GLYPH_SUN]);

        let mask = digit_diff(self.hour, hour, DirtyMask::HOUR_TENS, DirtyMask::HOUR_UNITS)
            | digit_diff(self.level, level, DirtyMask::BR_TENS, DirtyMask::BR_UNITS);

        self.hour = hour;
        self.level = level;
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotclock_core::mock::MockMatrix;

    #[test]
    fn test_layout_and_mask() {
        let mut view = BrightnessView::default();
        let mut matrix = MockMatrix::new();
        let mut formatter = NumberFormatter::new();

        view.draw(&mut matrix, &mut formatter, 7, 12);
        assert_eq!(matrix.text().as_slice(), b" 7\xBB12\xA4");

        let mask = view.draw(&mut matrix, &mut formatter, 7, 9);
        assert_eq!(mask, DirtyMask::BR_TENS | DirtyMask::BR_UNITS);

        let mask = view.draw(&mut matrix, &mut formatter, 8, 9);
        assert_eq!(mask, DirtyMask::HOUR_UNITS);
    }
}
