//! In-memory collaborators for host tests
//!
//! Enabled with the `mock` feature (or inside this crate's own tests).
//! Everything is fixed capacity so the module builds under `no_std`.

use heapless::{Deque, Vec};

use crate::clock::{AlarmField, AlarmSetting, DateTime, Direction, TimeField, WeekdayMask};
use crate::mask::DirtyMask;
use crate::traits::{
    AlarmStore, Beeper, ButtonInput, Command, Effect, FontSize, MatrixDisplay, SettingsStorage,
    TemperatureSource, TimeSource,
};

/// Byte array standing in for the settings EEPROM
#[derive(Debug, Clone)]
pub struct MemoryStorage<const N: usize> {
    bytes: [u8; N],
    writes: u32,
}

impl<const N: usize> Default for MemoryStorage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MemoryStorage<N> {
    /// Zero-filled storage
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            writes: 0,
        }
    }

    /// Storage in the erased state (every byte 0xFF)
    pub const fn erased() -> Self {
        Self {
            bytes: [0xFF; N],
            writes: 0,
        }
    }

    /// Preload bytes starting at `addr` (bytes past the end are dropped)
    pub fn write(&mut self, addr: u16, bytes: &[u8]) {
        let start = usize::from(addr).min(N);
        let end = (start + bytes.len()).min(N);
        self.bytes[start..end].copy_from_slice(&bytes[..end - start]);
    }

    /// Stored byte, 0 past the end
    pub fn byte(&self, addr: u16) -> u8 {
        self.bytes.get(usize::from(addr)).copied().unwrap_or(0)
    }

    /// Number of writes that changed a cell
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl<const N: usize> SettingsStorage for MemoryStorage<N> {
    fn capacity(&self) -> u16 {
        N.min(usize::from(u16::MAX)) as u16
    }

    fn read_byte(&mut self, addr: u16) -> u8 {
        self.byte(addr)
    }

    fn update_byte(&mut self, addr: u16, value: u8) {
        if let Some(cell) = self.bytes.get_mut(usize::from(addr)) {
            if *cell != value {
                *cell = value;
                self.writes += 1;
            }
        }
    }
}

/// RTC holding a settable snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct MockClock {
    pub now: DateTime,
}

impl MockClock {
    pub fn new(now: DateTime) -> Self {
        Self { now }
    }
}

impl TimeSource for MockClock {
    fn read_time(&mut self) -> DateTime {
        self.now
    }

    fn adjust(&mut self, field: TimeField, direction: Direction) {
        self.now = self.now.adjusted(field, direction);
    }
}

/// Alarm store with separate working and saved copies
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAlarmStore {
    pub working: AlarmSetting,
    pub saved: AlarmSetting,
    pub saves: u32,
}

impl MockAlarmStore {
    /// Store whose working and saved copies both hold `alarm`
    pub fn new(alarm: AlarmSetting) -> Self {
        Self {
            working: alarm,
            saved: alarm,
            saves: 0,
        }
    }
}

impl AlarmStore for MockAlarmStore {
    fn read_alarm(&mut self) -> AlarmSetting {
        self.working
    }

    fn raw_weekday_mask(&mut self) -> WeekdayMask {
        self.saved.weekdays
    }

    fn change_value(&mut self, field: AlarmField, direction: Direction) {
        self.working = self.working.adjusted(field, direction);
    }

    fn save(&mut self) {
        self.saved = self.working;
        self.saves += 1;
    }
}

/// Sensor bank returning fixed readings
#[derive(Debug, Clone, Default)]
pub struct MockTemperature {
    pub readings: Vec<i16, 4>,
}

impl MockTemperature {
    pub fn new(readings: &[i16]) -> Self {
        let mut bank = Self::default();
        for &reading in readings.iter().take(4) {
            let _ = bank.readings.push(reading);
        }
        bank
    }
}

impl TemperatureSource for MockTemperature {
    fn device_count(&mut self) -> u8 {
        self.readings.len() as u8
    }

    fn temperature(&mut self, index: u8) -> i16 {
        self.readings.get(usize::from(index)).copied().unwrap_or(0)
    }
}

/// Longest text run kept per recorded operation
pub const MOCK_TEXT_LEN: usize = 24;

/// Operation recorded by `MockMatrix`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixOp {
    CursorX(u8),
    Text(Vec<u8, MOCK_TEXT_LEN>),
    Numeric(Vec<u8, MOCK_TEXT_LEN>, FontSize),
    Column(u8, u8),
    Swap(DirtyMask, Effect),
    ClearTrailing,
    StartScroll,
    StopScroll,
    Brightness(u8),
    Rotate,
}

/// Capacity of the `MockMatrix` operation log
pub const MOCK_OP_LOG: usize = 128;

/// Matrix that records every call
///
/// The log keeps the most recent `MOCK_OP_LOG` operations; older ones are
/// evicted so queries always see the latest frames.
#[derive(Debug, Clone, Default)]
pub struct MockMatrix {
    pub ops: Deque<MatrixOp, MOCK_OP_LOG>,
    /// Value returned by `scroll_active`
    pub scrolling: bool,
    /// Last level passed to `set_brightness`
    pub brightness: Option<u8>,
    pub rotations: u32,
}

impl MockMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget recorded operations
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Check if `op` is in the log
    pub fn recorded(&self, op: &MatrixOp) -> bool {
        self.ops.iter().any(|logged| logged == op)
    }

    /// Most recent operation
    pub fn last_op(&self) -> Option<&MatrixOp> {
        self.ops.back()
    }

    /// Most recent buffer swap
    pub fn last_swap(&self) -> Option<(DirtyMask, Effect)> {
        self.ops.iter().rev().find_map(|op| match op {
            MatrixOp::Swap(mask, effect) => Some((*mask, *effect)),
            _ => None,
        })
    }

    /// Number of recorded buffer swaps
    pub fn swap_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, MatrixOp::Swap(..)))
            .count()
    }

    /// Text and digits drawn since the last clear, concatenated
    pub fn text(&self) -> Vec<u8, 256> {
        let mut out = Vec::new();
        for op in &self.ops {
            if let MatrixOp::Text(bytes) | MatrixOp::Numeric(bytes, _) = op {
                let _ = out.extend_from_slice(bytes);
            }
        }
        out
    }

    /// Last raw column pattern written at `pos`
    pub fn column(&self, pos: u8) -> Option<u8> {
        self.ops.iter().rev().find_map(|op| match op {
            MatrixOp::Column(p, bits) if *p == pos => Some(*bits),
            _ => None,
        })
    }

    fn record(&mut self, op: MatrixOp) {
        if self.ops.is_full() {
            self.ops.pop_front();
        }
        let _ = self.ops.push_back(op);
    }

    fn capture(bytes: &[u8]) -> Vec<u8, MOCK_TEXT_LEN> {
        let len = bytes.len().min(MOCK_TEXT_LEN);
        Vec::from_slice(&bytes[..len]).unwrap_or_default()
    }
}

impl MatrixDisplay for MockMatrix {
    fn set_cursor_x(&mut self, col: u8) {
        self.record(MatrixOp::CursorX(col));
    }

    fn load_text(&mut self, text: &[u8]) {
        self.record(MatrixOp::Text(Self::capture(text)));
    }

    fn load_numeric(&mut self, digits: &[u8], font: FontSize) {
        self.record(MatrixOp::Numeric(Self::capture(digits), font));
    }

    fn write_column(&mut self, pos: u8, bits: u8) {
        self.record(MatrixOp::Column(pos, bits));
    }

    fn swap_buffers(&mut self, mask: DirtyMask, effect: Effect) {
        self.record(MatrixOp::Swap(mask, effect));
    }

    fn clear_trailing_columns(&mut self) {
        self.record(MatrixOp::ClearTrailing);
    }

    fn start_scroll(&mut self) {
        self.scrolling = true;
        self.record(MatrixOp::StartScroll);
    }

    fn stop_scroll(&mut self) {
        self.scrolling = false;
        self.record(MatrixOp::StopScroll);
    }

    fn scroll_active(&self) -> bool {
        self.scrolling
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = Some(level);
        self.record(MatrixOp::Brightness(level));
    }

    fn rotate_screen(&mut self) {
        self.rotations += 1;
        self.record(MatrixOp::Rotate);
    }
}

/// Beeper with a manually driven countdown
#[derive(Debug, Clone, Default)]
pub struct MockBeeper {
    /// Milliseconds left; tests set this to 0 to end a tone
    pub remaining: u16,
    /// Every duration passed to `start`
    pub started: Vec<u16, 32>,
}

impl MockBeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let the current tone run out
    pub fn finish(&mut self) {
        self.remaining = 0;
    }
}

impl Beeper for MockBeeper {
    fn start(&mut self, duration_ms: u16) {
        self.remaining = duration_ms;
        let _ = self.started.push(duration_ms);
    }

    fn remaining(&self) -> u16 {
        self.remaining
    }
}

/// Button source fed from a queue
#[derive(Debug, Clone, Default)]
pub struct MockButtons {
    queue: Deque<Command, 16>,
}

impl MockButtons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a command for a later `next_command`
    pub fn push(&mut self, command: Command) {
        let _ = self.queue.push_back(command);
    }
}

impl ButtonInput for MockButtons {
    fn next_command(&mut self) -> Command {
        self.queue.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_skips_equal_bytes() {
        let mut storage = MemoryStorage::<16>::new();
        storage.update_byte(3, 0);
        assert_eq!(storage.writes(), 0);
        storage.update_byte(3, 7);
        storage.update_byte(3, 7);
        assert_eq!(storage.writes(), 1);
        assert_eq!(storage.read_byte(3), 7);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut storage = MemoryStorage::<4>::erased();
        storage.update_byte(10, 1);
        assert_eq!(storage.read_byte(10), 0);
        storage.write(2, b"abcd");
        assert_eq!(storage.byte(3), b'b');
    }

    #[test]
    fn test_matrix_records_swaps() {
        let mut matrix = MockMatrix::new();
        matrix.load_text(b"Mon");
        matrix.swap_buffers(DirtyMask::ALL, Effect::ScrollBoth);
        assert_eq!(matrix.text().as_slice(), b"Mon");
        assert_eq!(matrix.last_swap(), Some((DirtyMask::ALL, Effect::ScrollBoth)));
        assert_eq!(matrix.swap_count(), 1);
    }

    #[test]
    fn test_matrix_log_keeps_latest_ops() {
        let mut matrix = MockMatrix::new();
        matrix.write_column(23, 0x01);
        for _ in 0..MOCK_OP_LOG {
            matrix.set_cursor_x(0);
        }
        matrix.write_column(23, 0x7F);
        matrix.swap_buffers(DirtyMask::WEEKDAYS, Effect::ScrollDown);

        assert_eq!(matrix.ops.len(), MOCK_OP_LOG);
        assert_eq!(matrix.column(23), Some(0x7F));
        assert_eq!(matrix.last_swap(), Some((DirtyMask::WEEKDAYS, Effect::ScrollDown)));
        assert_eq!(matrix.last_op(), Some(&MatrixOp::Swap(DirtyMask::WEEKDAYS, Effect::ScrollDown)));
    }
}
