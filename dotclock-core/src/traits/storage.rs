//! Persistent settings storage trait

/// Byte-addressable non-volatile settings storage (EEPROM)
pub trait SettingsStorage {
    /// Storage size in bytes; addresses at or past this bound are invalid
    fn capacity(&self) -> u16;

    /// Read one byte
    fn read_byte(&mut self, addr: u16) -> u8;

    /// Write one byte, skipping the write when the stored value already matches
    ///
    /// EEPROM cells wear out, so implementations must not rewrite
    /// unchanged bytes.
    fn update_byte(&mut self, addr: u16, value: u8);
}
