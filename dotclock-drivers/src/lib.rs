//! GPIO drivers for the dot-matrix clock
//!
//! Concrete implementations of the `dotclock-core` input and beeper traits
//! on top of `embedded-hal` digital pins:
//!
//! - Three-button decoder with debounce, long press and chords
//! - Piezo beeper with a millisecond countdown

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod beeper;
pub mod buttons;
pub mod error;

pub use beeper::PinBeeper;
pub use buttons::ButtonDecoder;
pub use error::DriverError;
