pub struct Cmd;
#[allow(dead_code)]
impl Cmd {
    // Init
    pub const SW_RESET: u8 = 0x01;
    pub const SLEEP_OUT: u8 = 0x11;
    pub const PIXEL_FORMAT: u8 = 0x3A;
    pub const MADCTL: u8 = 0x36;

    // Vendor power / gamma registers
    pub const INTERFACE_MODE: u8 = 0xB0;
    pub const FRAME_RATE: u8 = 0xB1;
    pub const INVERSION_CONTROL: u8 = 0xB4;
    pub const DISPLAY_FUNCTION: u8 = 0xB6;
    pub const ENTRY_MODE: u8 = 0xB7;
    pub const POWER_CONTROL_1: u8 = 0xC0;
    pub const POWER_CONTROL_2: u8 = 0xC1;
    pub const VCOM_CONTROL: u8 = 0xC5;
    pub const POSITIVE_GAMMA: u8 = 0xE0;
    pub const NEGATIVE_GAMMA: u8 = 0xE1;

    // Update
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;

    // Display state
    pub const DISPLAY_ON: u8 = 0x29;
    pub const DISPLAY_OFF: u8 = 0x28;
    pub const INVERT_ON: u8 = 0x21;
    pub const INVERT_OFF: u8 = 0x20;
}

/*
ILI9486 datasheet names:
0x01 - SWRESET  Software Reset
0x11 - SLPOUT   Sleep Out
0x20 - INVOFF   Display Inversion OFF
0x21 - INVON    Display Inversion ON
0x28 - DISPOFF  Display OFF
0x29 - DISPON   Display ON
0x2A - CASET    Column Address Set
0x2B - PASET    Page Address Set
0x2C - RAMWR    Memory Write
0x36 - MADCTL   Memory Access Control
0x3A - COLMOD   Interface Pixel Format
0xB0 - Interface Mode Control
0xB1 - Frame Rate Control (Normal Mode)
0xB4 - Display Inversion Control
0xB6 - Display Function Control
0xB7 - Entry Mode Set
0xC0 - Power Control 1
0xC1 - Power Control 2
0xC5 - VCOM Control
0xE0 - Positive Gamma Control
0xE1 - Negative Gamma Control
*/
