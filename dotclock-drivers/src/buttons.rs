//! Three-button decoder
//!
//! Samples three active-low buttons from a periodic tick and turns them
//! into `Command`s:
//!
//! - a level has to be stable for `debounce_ms` before it is accepted
//! - every button pressed during one press cycle joins the chord
//! - holding for `long_press_ms` emits the long/chord command once
//! - releasing before that emits the short command (single buttons only)

use dotclock_core::config::ButtonTiming;
use dotclock_core::traits::{ButtonInput, Command};
use embedded_hal::digital::InputPin;

use crate::error::DriverError;

/// Debounced decoder for buttons 1, 2 and 3
pub struct ButtonDecoder<P1, P2, P3> {
    btn1: P1,
    btn2: P2,
    btn3: P3,
    timing: ButtonTiming,
    /// Last raw sample
    raw: u8,
    /// Time the raw sample has been unchanged
    raw_stable_ms: u16,
    /// Debounced state
    state: u8,
    /// Buttons seen pressed during the current press cycle
    held: u8,
    /// Time since the press cycle started
    hold_ms: u16,
    /// Long command already emitted for this cycle
    long_sent: bool,
    /// Command waiting for `next_command`
    pending: Option<Command>,
}

impl<P1, P2, P3> ButtonDecoder<P1, P2, P3>
where
    P1: InputPin,
    P2: InputPin,
    P3: InputPin,
{
    /// Create a decoder over three active-low button pins
    pub fn new(btn1: P1, btn2: P2, btn3: P3, timing: ButtonTiming) -> Self {
        Self {
            btn1,
            btn2,
            btn3,
            timing,
            raw: 0,
            raw_stable_ms: 0,
            state: 0,
            held: 0,
            hold_ms: 0,
            long_sent: false,
            pending: None,
        }
    }

    /// Sample the pins and advance the decoder by `elapsed_ms`
    pub fn update(&mut self, elapsed_ms: u16) -> Result<(), DriverError> {
        let raw = self.sample()?;

        if raw != self.raw {
            self.raw = raw;
            self.raw_stable_ms = 0;
        } else {
            self.raw_stable_ms = self.raw_stable_ms.saturating_add(elapsed_ms);
        }

        if self.raw_stable_ms >= self.timing.debounce_ms {
            self.state = self.raw;
        }

        if self.state != 0 {
            self.held |= self.state;
            self.hold_ms = self.hold_ms.saturating_add(elapsed_ms);

            if !self.long_sent && self.hold_ms >= self.timing.long_press_ms {
                self.long_sent = true;
                self.emit(Command::long_press(self.held));
            }
        } else if self.held != 0 {
            if !self.long_sent {
                self.emit(Command::short_press(self.held));
            }
            self.held = 0;
            self.hold_ms = 0;
            self.long_sent = false;
        }

        Ok(())
    }

    /// Periodic tick: like `update`, but a pin failure only logs a warning
    pub fn tick(&mut self, elapsed_ms: u16) {
        if let Err(e) = self.update(elapsed_ms) {
            warn!("Button read failed: {}", e);
        }
    }

    /// Debounced button bits (bit 0 = button 1)
    pub fn pressed(&self) -> u8 {
        self.state
    }

    /// Release the pins
    pub fn release(self) -> (P1, P2, P3) {
        (self.btn1, self.btn2, self.btn3)
    }

    fn sample(&mut self) -> Result<u8, DriverError> {
        let b1 = self.btn1.is_low().map_err(|_| DriverError::InputPin)?;
        let b2 = self.btn2.is_low().map_err(|_| DriverError::InputPin)?;
        let b3 = self.btn3.is_low().map_err(|_| DriverError::InputPin)?;

        Ok(u8::from(b1) | u8::from(b2) << 1 | u8::from(b3) << 2)
    }

    fn emit(&mut self, command: Command) {
        if command != Command::None {
            debug!("Button command: {}", command);
            self.pending = Some(command);
        }
    }
}

impl<P1, P2, P3> ButtonInput for ButtonDecoder<P1, P2, P3>
where
    P1: InputPin,
    P2: InputPin,
    P3: InputPin,
{
    fn next_command(&mut self) -> Command {
        self.pending.take().unwrap_or_default()
    }
}
