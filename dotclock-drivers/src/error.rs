//! Driver error type

/// Pin access failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// A button input could not be read
    InputPin,
    /// The beeper output could not be driven
    OutputPin,
}
