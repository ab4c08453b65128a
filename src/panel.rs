//! Generic LCD panel interface
//!
//! The operations a graphics stack needs from any panel driver. Code that
//! only draws and rotates can be written against [`Panel`] instead of a
//! concrete controller.
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::driver::Ili9486;
use crate::error::Error;
use crate::interface::PanelIo;

/// Panel operations, in the order a caller normally uses them:
/// `reset`, `init`, then any mix of the rest.
pub trait Panel {
    /// Error returned by every operation
    type Error;

    /// Hardware reset
    fn reset(&mut self) -> Result<(), Self::Error>;

    /// Bring the controller into a displaying state
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Blit row-major RGB565 `pixels` into `[x_start, x_end) x [y_start, y_end)`
    fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        pixels: &[u16],
    ) -> Result<(), Self::Error>;

    /// Mirror along the X and/or Y axis
    fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), Self::Error>;

    /// Exchange the X and Y axes
    fn swap_xy(&mut self, swap: bool) -> Result<(), Self::Error>;

    /// Offset every window coordinate by `(x_gap, y_gap)`
    fn set_gap(&mut self, x_gap: u16, y_gap: u16) -> Result<(), Self::Error>;

    /// Invert colors
    fn invert_color(&mut self, invert: bool) -> Result<(), Self::Error>;

    /// Switch the display output on or off
    fn disp_on_off(&mut self, on: bool) -> Result<(), Self::Error>;
}

impl<IO, RST, DELAY> Panel for Ili9486<IO, RST, DELAY>
where
    IO: PanelIo,
    RST: OutputPin,
    DELAY: DelayNs,
{
    type Error = Error;

    fn reset(&mut self) -> Result<(), Error> {
        Ili9486::reset(self)
    }

    fn init(&mut self) -> Result<(), Error> {
        Ili9486::init(self)
    }

    fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        pixels: &[u16],
    ) -> Result<(), Error> {
        self.draw(x_start, y_start, x_end, y_end, pixels)
    }

    fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), Error> {
        self.set_mirror(mirror_x, mirror_y)
    }

    fn swap_xy(&mut self, swap: bool) -> Result<(), Error> {
        self.set_swap_axes(swap)
    }

    fn set_gap(&mut self, x_gap: u16, y_gap: u16) -> Result<(), Error> {
        Ili9486::set_gap(self, x_gap, y_gap);
        Ok(())
    }

    fn invert_color(&mut self, invert: bool) -> Result<(), Error> {
        Ili9486::invert_color(self, invert)
    }

    fn disp_on_off(&mut self, on: bool) -> Result<(), Error> {
        self.display_power(on)
    }
}
