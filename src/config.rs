//! Construction-time panel settings
use crate::madctl::ColorOrder;

/// Native horizontal resolution of ILI9486 modules
pub const WIDTH: u16 = 320;

/// Native vertical resolution of ILI9486 modules
pub const HEIGHT: u16 = 480;

/// Default scratch capacity: 80 full lines, the usual single flush size
pub const DEFAULT_MAX_TRANSFER_PIXELS: usize = WIDTH as usize * 80;

/// Settings fixed when the panel is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    /// Panel width in pixels, before any axis swap
    pub width: u16,
    /// Panel height in pixels, before any axis swap
    pub height: u16,
    /// Column offset added to every window coordinate
    pub x_gap: u16,
    /// Row offset added to every window coordinate
    pub y_gap: u16,
    /// Largest blit, in pixels, the conversion buffer is sized for
    pub max_transfer_pixels: usize,
    /// Color filter order, fixed for the life of the panel
    pub color_order: ColorOrder,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            width: WIDTH,
            height: HEIGHT,
            x_gap: 0,
            y_gap: 0,
            max_transfer_pixels: DEFAULT_MAX_TRANSFER_PIXELS,
            color_order: ColorOrder::Bgr,
        }
    }
}

impl PanelConfig {
    /// Set the panel resolution
    #[must_use]
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the coordinate offset
    #[must_use]
    pub fn with_gap(mut self, x_gap: u16, y_gap: u16) -> Self {
        self.x_gap = x_gap;
        self.y_gap = y_gap;
        self
    }

    /// Set the scratch buffer capacity in pixels
    #[must_use]
    pub fn with_max_transfer_pixels(mut self, pixels: usize) -> Self {
        self.max_transfer_pixels = pixels;
        self
    }

    /// Set the color filter order
    #[must_use]
    pub fn with_color_order(mut self, order: ColorOrder) -> Self {
        self.color_order = order;
        self
    }
}
