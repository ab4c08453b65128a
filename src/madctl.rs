//! Memory access control (MADCTL) register mirror
use crate::flag::Flag;

/// Sub-pixel order of the panel's color filter, MADCTL bit 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOrder {
    /// Red-green-blue
    Rgb,
    /// Blue-green-red, what most ILI9486 modules ship with
    #[default]
    Bgr,
}

/// In-memory copy of the controller's mode register.
///
/// Only the orientation bits (7..5) ever change after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeRegister(u8);

impl ModeRegister {
    /// Power-on value for the given color order: mirror-X set, no swap.
    pub const fn new(order: ColorOrder) -> Self {
        let bits = match order {
            ColorOrder::Rgb => Flag::MADCTL_MX,
            ColorOrder::Bgr => Flag::MADCTL_MX | Flag::MADCTL_BGR,
        };
        ModeRegister(bits)
    }

    /// Raw register byte as sent to the controller
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Copy with mirror-X / mirror-Y replaced
    #[must_use]
    pub const fn with_mirror(self, x: bool, y: bool) -> Self {
        self.with(Flag::MADCTL_MX, x).with(Flag::MADCTL_MY, y)
    }

    /// Copy with swap-axes replaced
    #[must_use]
    pub const fn with_swap_axes(self, swap: bool) -> Self {
        self.with(Flag::MADCTL_MV, swap)
    }

    /// Mirror-X flag
    pub const fn mirror_x(self) -> bool {
        self.0 & Flag::MADCTL_MX != 0
    }

    /// Mirror-Y flag
    pub const fn mirror_y(self) -> bool {
        self.0 & Flag::MADCTL_MY != 0
    }

    /// Swap-axes flag
    pub const fn swap_axes(self) -> bool {
        self.0 & Flag::MADCTL_MV != 0
    }

    /// Set or clear `mask`, restricted to the orientation bits
    const fn with(self, mask: u8, on: bool) -> Self {
        let mask = mask & Flag::MADCTL_ORIENTATION_MASK;
        if on {
            ModeRegister(self.0 | mask)
        } else {
            ModeRegister(self.0 & !mask)
        }
    }
}

impl Default for ModeRegister {
    fn default() -> Self {
        ModeRegister::new(ColorOrder::default())
    }
}
