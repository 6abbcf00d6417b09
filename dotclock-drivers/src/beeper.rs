//! Piezo beeper on a GPIO pin
//!
//! The pin is held high while a tone plays. A periodic tick counts the
//! remaining time down and drops the pin when it reaches zero.

use dotclock_core::traits::Beeper;
use embedded_hal::digital::OutputPin;

use crate::error::DriverError;

/// Active-high beeper with a millisecond countdown
pub struct PinBeeper<P> {
    pin: P,
    remaining_ms: u16,
}

impl<P: OutputPin> PinBeeper<P> {
    /// Create a silent beeper
    pub fn new(mut pin: P) -> Result<Self, DriverError> {
        pin.set_low().map_err(|_| DriverError::OutputPin)?;
        Ok(Self {
            pin,
            remaining_ms: 0,
        })
    }

    /// Count the current tone down by `elapsed_ms`
    pub fn tick(&mut self, elapsed_ms: u16) -> Result<(), DriverError> {
        if self.remaining_ms == 0 {
            return Ok(());
        }

        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            self.pin.set_low().map_err(|_| DriverError::OutputPin)?;
        }
        Ok(())
    }

    /// Stop the tone immediately
    pub fn silence(&mut self) -> Result<(), DriverError> {
        self.remaining_ms = 0;
        self.pin.set_low().map_err(|_| DriverError::OutputPin)
    }

    /// Release the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Beeper for PinBeeper<P> {
    fn start(&mut self, duration_ms: u16) {
        if duration_ms == 0 {
            return;
        }

        match self.pin.set_high() {
            Ok(()) => self.remaining_ms = duration_ms,
            Err(_) => warn!("Beeper pin failed, tone of {} ms dropped", duration_ms),
        }
    }

    fn remaining(&self) -> u16 {
        self.remaining_ms
    }
}
