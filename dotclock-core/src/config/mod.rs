//! Configuration types
//!
//! Board-agnostic tuning values and the persisted settings layout.

pub mod layout;
pub mod types;

pub use layout::*;
pub use types::*;
