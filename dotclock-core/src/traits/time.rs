//! Real-time clock trait

use crate::clock::{DateTime, Direction, TimeField};

/// Source of the current date and time
pub trait TimeSource {
    /// Read the current date/time registers
    fn read_time(&mut self) -> DateTime;

    /// Step one field of the running clock
    ///
    /// Time editing is live: the change lands in the RTC immediately and
    /// there is no separate commit.
    fn adjust(&mut self, field: TimeField, direction: Direction);
}
