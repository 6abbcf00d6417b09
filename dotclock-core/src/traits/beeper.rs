//! Beeper trait

/// Piezo beeper driven by a millisecond countdown
pub trait Beeper {
    /// Start (or restart) a tone lasting `duration_ms`
    fn start(&mut self, duration_ms: u16);

    /// Milliseconds left on the current tone, 0 when silent
    fn remaining(&self) -> u16;

    /// Check if a tone is playing
    fn is_active(&self) -> bool {
        self.remaining() > 0
    }
}
