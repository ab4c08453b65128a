//! Pin definitions for the ILI9486 demo board
//!
//! ESP32 DevKit wired to a 3.5" 320x480 SPI module (16-bit shift-register
//! front end). MISO is not connected; the controller is write-only here.

/// Pin configuration constants for the ILI9486 display
pub struct Pins;

impl Pins {
    /// SPI Clock pin
    pub const SCK: u8 = 18;
    /// SPI Master Out Slave In
    pub const MOSI: u8 = 23;
    /// Chip Select pin for SPI display
    pub const CS: u8 = 5;
    /// Data/Command control pin (High for data, Low for command)
    pub const DC: u8 = 21;
    /// Reset pin for display
    pub const RST: u8 = 22;
    /// Backlight enable, active high
    pub const BACKLIGHT: u8 = 4;
}

/// SPI clock for the display bus, Hz
pub const PIXEL_CLOCK_HZ: u32 = 5_000_000;
