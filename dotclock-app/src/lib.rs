//! Mode controller for the dot-matrix clock
//!
//! Ties the rendering engine to the collaborators of one board and runs
//! the cooperative main loop: refresh snapshots, evaluate the alarm,
//! handle one button command, render the active view.

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod controller;

pub use controller::{Hardware, ModeController};
