//! Mode state machine
//!
//! The clock is always in exactly one display mode. Button commands move
//! it between modes and select the side effect the controller performs.
//! The machine is explicit, finite and has no terminal state.

pub mod cursor;
pub mod mode;

pub use cursor::{AlarmEditCursor, TimeEditCursor};
pub use mode::{Action, Mode, Transition};
