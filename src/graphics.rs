//! embedded-graphics support
//!
//! The panel is an immediate-mode [`DrawTarget`]: nothing is buffered, every
//! call turns into one or more blits. Prefer filled shapes and images
//! (`fill_contiguous` / `fill_solid`) over single pixels; each lone pixel
//! costs four transactions.
use alloc::vec::Vec;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::driver::Ili9486;
use crate::error::Error;
use crate::interface::PanelIo;

impl<IO, RST, DELAY> OriginDimensions for Ili9486<IO, RST, DELAY> {
    fn size(&self) -> Size {
        let (width, height) = self.resolution();
        Size::new(u32::from(width), u32::from(height))
    }
}

impl<IO, RST, DELAY> DrawTarget for Ili9486<IO, RST, DELAY>
where
    IO: PanelIo,
    RST: OutputPin,
    DELAY: DelayNs,
{
    type Color = Rgb565;
    type Error = Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            let (x, y) = (point.x as u16, point.y as u16);
            self.draw(x, y, x + 1, y + 1, &[color.into_storage()])?;
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        if area.is_zero_sized() {
            return Ok(());
        }
        if area.intersection(&self.bounding_box()) != *area {
            // partly off screen, let draw_iter clip
            let pixels = area.points().zip(colors).map(|(p, c)| Pixel(p, c));
            return self.draw_iter(pixels);
        }

        let x0 = area.top_left.x as usize;
        let y0 = area.top_left.y as usize;
        let width = area.size.width as usize;
        let height = area.size.height as usize;

        // Whole rows per blit while they fit; rows wider than the buffer
        // go out in pieces of one buffer each.
        let capacity = self.capacity();
        let (band_rows, segment) = if width <= capacity {
            (capacity / width, width)
        } else {
            (1, capacity)
        };

        let mut staging = Vec::new();
        staging
            .try_reserve_exact(band_rows.min(height) * segment)
            .map_err(|_| Error::OutOfMemory)?;

        let mut colors = colors.into_iter().map(|c| c.into_storage());
        for row in (0..height).step_by(band_rows) {
            let rows = band_rows.min(height - row);
            for col in (0..width).step_by(segment) {
                let cols = segment.min(width - col);
                staging.clear();
                staging.extend(colors.by_ref().take(rows * cols));
                if staging.len() < rows * cols {
                    // color iterator ran dry
                    return Ok(());
                }
                let (x, y) = (x0 + col, y0 + row);
                self.draw(
                    x as u16,
                    y as u16,
                    (x + cols) as u16,
                    (y + rows) as u16,
                    &staging,
                )?;
            }
        }
        Ok(())
    }
}
