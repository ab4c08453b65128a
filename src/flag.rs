/// Register values, bit masks and fixed timings used by the ILI9486 driver.
///
/// All constants are documented inline with their respective values.
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // Memory Access Control (0x36) bits
    pub const MADCTL_MY: u8 = 0x80; // Row address order (mirror Y)
    pub const MADCTL_MX: u8 = 0x40; // Column address order (mirror X)
    pub const MADCTL_MV: u8 = 0x20; // Row / column exchange (swap axes)
    pub const MADCTL_BGR: u8 = 0x08; // BGR color filter panel
    pub const MADCTL_ORIENTATION_MASK: u8 = 0xE0;

    // Interface Pixel Format (0x3A)
    pub const PIXEL_FORMAT_18BPP: u8 = 0x66; // RGB666 on both DPI and DBI

    // Settle delays, milliseconds
    pub const HW_RESET_PULSE_MS: u32 = 10;
    pub const HW_RESET_SETTLE_MS: u32 = 10;
    pub const SW_RESET_SETTLE_MS: u32 = 120;
    pub const SLEEP_OUT_SETTLE_MS: u32 = 20;
    pub const DISPLAY_ON_SETTLE_MS: u32 = 20;
}
