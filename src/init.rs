//! Power-on register sequence
//!
//! The table is a protocol contract with the controller family and is sent
//! verbatim. Values are the trimmed datasheet defaults for 3.5" 320x480
//! modules.
use crate::cmd::Cmd;
use crate::flag::Flag;

/// Steps of the initialization sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStep {
    /// Send a bare command byte
    Cmd(u8),
    /// Send a command with a static parameter slice
    CmdData(u8, &'static [u8]),
    /// Send MADCTL with the driver's current mode register
    ModeRegister,
    /// Sleep for the given number of milliseconds
    DelayMs(u32),
}

/// The fixed ILI9486 bring-up sequence
pub const INIT_SEQUENCE: &[InitStep] = &[
    InitStep::Cmd(Cmd::SW_RESET),
    InitStep::DelayMs(Flag::SW_RESET_SETTLE_MS),
    InitStep::Cmd(Cmd::SLEEP_OUT),
    InitStep::DelayMs(Flag::SLEEP_OUT_SETTLE_MS),
    // Power / gamma registers
    InitStep::CmdData(Cmd::INTERFACE_MODE, &[0x00]),
    // Frame rate ~70 Hz
    InitStep::CmdData(Cmd::FRAME_RATE, &[0xB0, 0x11]),
    // 2-dot inversion
    InitStep::CmdData(Cmd::INVERSION_CONTROL, &[0x02]),
    InitStep::CmdData(Cmd::DISPLAY_FUNCTION, &[0x02, 0x22]),
    InitStep::CmdData(Cmd::ENTRY_MODE, &[0xC6]),
    InitStep::CmdData(Cmd::POWER_CONTROL_1, &[0x0D, 0x0D]),
    InitStep::CmdData(Cmd::POWER_CONTROL_2, &[0x41]),
    InitStep::CmdData(Cmd::VCOM_CONTROL, &[0x00, 0x18]),
    InitStep::CmdData(
        Cmd::POSITIVE_GAMMA,
        &[
            0x0F, 0x1F, 0x1C, 0x0C, 0x0F, 0x08, 0x48, 0x98, 0x37, 0x0A, 0x13, 0x04, 0x11, 0x0D,
            0x00,
        ],
    ),
    InitStep::CmdData(
        Cmd::NEGATIVE_GAMMA,
        &[
            0x0F, 0x32, 0x2E, 0x0B, 0x0D, 0x05, 0x47, 0x75, 0x37, 0x06, 0x10, 0x03, 0x24, 0x20,
            0x00,
        ],
    ),
    InitStep::CmdData(Cmd::PIXEL_FORMAT, &[Flag::PIXEL_FORMAT_18BPP]),
    InitStep::ModeRegister,
    InitStep::Cmd(Cmd::DISPLAY_ON),
    InitStep::DelayMs(Flag::DISPLAY_ON_SETTLE_MS),
];
