//! ILI9486 LCD Panel Driver
//!
//! Used with the common 3.5" 320x480 SPI modules where the controller's
//! 16-bit parallel bus sits behind a pair of shift registers.
//!
//! The driver translates draw requests into the controller's wire protocol
//! and keeps the orientation register in sync. It does not buffer frames,
//! pace refreshes, or arbitrate the bus.
//!
//! ### Usage
//!
//! 1. wrap the SPI device and D/C pin in an [`interface::SpiInterface`]
//!    (or any other [`interface::PanelIo`])
//! 1. create the panel with [`driver::Ili9486::new`]
//! 1. call [`driver::Ili9486::reset`] and [`driver::Ili9486::init`]
//! 1. blit RGB565 rectangles with [`driver::Ili9486::draw`], or draw on it
//!    with [`embedded_graphics`](https://github.com/embedded-graphics/embedded-graphics)
//!
//! ```rust, ignore
//! use ili9486::prelude::*;
//!
//! let iface = SpiInterface::new(spi, dc, BusWidth::Bits16);
//! let mut panel = Ili9486::new(iface, Some(rst), delay, PanelConfig::default())?;
//! panel.reset()?;
//! panel.init()?;
//! panel.draw(0, 0, 2, 1, &[0xF800, 0x001F])?;
//! ```
//!
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

extern crate alloc;

pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod graphics;
pub mod init;
pub mod interface;
pub mod madctl;
pub mod panel;
pub mod pins;

mod cmd;
mod flag;

#[cfg(test)]
mod testing;

pub use config::{HEIGHT, WIDTH};

/// Useful exports
pub mod prelude {
    pub use crate::config::PanelConfig;
    pub use crate::driver::{Ili9486, NoResetPin};
    pub use crate::error::{DisplayError, Error, Phase};
    pub use crate::interface::{BusWidth, DataCommandIo, PanelIo, SpiInterface};
    pub use crate::madctl::{ColorOrder, ModeRegister};
    pub use crate::panel::Panel;
}
