//! Rendering engine for the dot-matrix clock
//!
//! This crate provides:
//! - `DisplayEngine`, which draws every view into the matrix back buffer
//!   and computes the dirty mask for each buffer swap
//! - Per-view renderers with their own change caches
//! - The date and temperature scroll tickers
//! - The per-hour brightness schedule
//! - The alarm and hourly chime trigger
//!
//! # Architecture
//!
//! The engine never owns hardware. The matrix, clock, alarm store, sensors,
//! settings storage and beeper are borrowed for the duration of each call,
//! which lets the mode controller and host tests drive the same code.

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod brightness;
pub mod engine;
pub mod trigger;
pub mod views;

pub use brightness::{BrightnessSchedule, HourSelect};
pub use engine::DisplayEngine;
pub use trigger::{AlarmTrigger, Chime, TriggerLatch};
pub use views::{Ticker, View};
