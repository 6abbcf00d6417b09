//! Collaborator traits
//!
//! These traits define the interface between the clock core and the
//! hardware it runs on. Every call is synchronous and expected to finish
//! in constant time; interrupt-side state is only observed by polling.

pub mod alarm;
pub mod beeper;
pub mod input;
pub mod matrix;
pub mod storage;
pub mod temperature;
pub mod time;

pub use alarm::AlarmStore;
pub use beeper::Beeper;
pub use input::{ButtonInput, Command};
pub use matrix::{Effect, FontSize, MatrixDisplay};
pub use storage::SettingsStorage;
pub use temperature::TemperatureSource;
pub use time::TimeSource;
