//! Fixed-point number formatting
//!
//! Renders integers into a fixed-width byte field for the matrix fonts.
//! A value may represent a fixed-point number scaled by `10^precision`,
//! e.g. a temperature in tenths of a degree.

/// Capacity of the scratch buffer (`width + precision` is capped to this)
pub const FORMAT_CAPACITY: usize = 8;

/// Number formatter with a reusable scratch buffer
///
/// Each call returns a borrow of the same buffer, so a result has to be
/// consumed before the next call.
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    buf: [u8; FORMAT_CAPACITY],
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberFormatter {
    pub const fn new() -> Self {
        Self {
            buf: [0; FORMAT_CAPACITY],
        }
    }

    /// Format `value` into exactly `width + precision` bytes
    ///
    /// - The leftmost unused slot holds `pad`, or `-` for negative values
    /// - With `precision > 0` a `.` sits `precision` digits from the right
    /// - At least one integer digit is always written
    ///
    /// Values too wide for the field keep their rightmost digits.
    pub fn format(&mut self, value: i16, width: u8, precision: u8, pad: u8) -> &[u8] {
        let len = (usize::from(width) + usize::from(precision)).min(FORMAT_CAPACITY);
        let width = width as isize;

        let mut magnitude = i32::from(value);
        let mut sign = pad;
        if magnitude < 0 {
            sign = b'-';
            magnitude = -magnitude;
        }

        let field = &mut self.buf[..len];
        field.fill(pad);

        let mut pos = len as isize - 1;
        while pos >= 0 && (magnitude > 0 || pos > width - 2) {
            if precision > 0 && pos == width - 1 {
                field[pos as usize] = b'.';
                pos -= 1;
                if pos < 0 {
                    break;
                }
            }
            field[pos as usize] = b'0' + (magnitude % 10) as u8;
            pos -= 1;
            magnitude /= 10;
        }

        if pos >= 0 {
            field[pos as usize] = sign;
        }

        &self.buf[..len]
    }
}
