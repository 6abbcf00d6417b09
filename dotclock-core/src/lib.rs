//! Board-agnostic core logic for the dot-matrix clock
//!
//! This crate contains everything the rendering engine and the mode
//! controller share that does not depend on specific hardware:
//!
//! - Collaborator traits (RTC, alarm store, sensors, matrix, EEPROM, beeper, buttons)
//! - Date/time and alarm data model
//! - Mode state machine and the button command table
//! - Fixed-point number formatting
//! - Dirty mask and persisted label table
//! - Configuration and persisted settings layout

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod clock;
pub mod config;
pub mod format;
pub mod labels;
pub mod mask;
pub mod state;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use clock::{AlarmField, AlarmSetting, DateTime, Direction, TimeField, WeekdayMask};
pub use format::NumberFormatter;
pub use labels::{Label, LabelTable};
pub use mask::DirtyMask;
