//! Temperature sensor trait

/// Bank of temperature sensors on a shared bus
pub trait TemperatureSource {
    /// Number of sensors found on the bus
    fn device_count(&mut self) -> u8;

    /// Last reading of sensor `index` in tenths of a degree (455 = 45.5°C)
    fn temperature(&mut self, index: u8) -> i16;
}
