//! Pixel color for monochrome OLED panels
//!
//! The SSD1306 stores one bit per pixel: a set bit lights the pixel in
//! normal video (dark in inverse video), a cleared bit leaves it off.
//!
//! | Color | RAM bit |
//! |-------|---------|
//! | Off   | 0       |
//! | On    | 1       |
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::Color;
//!
//! // Any nonzero state lights the pixel
//! assert_eq!(Color::from(0u8), Color::Off);
//! assert_eq!(Color::from(7u8), Color::On);
//! assert_eq!(Color::from(true), Color::On);
//! ```

/// Pixel state of a monochrome panel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Pixel dark (bit cleared)
    #[default]
    Off,
    /// Pixel lit (bit set)
    On,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        Self::from(color.is_on())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Off => Self::Off,
            Color::On => Self::On,
        }
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl From<u8> for Color {
    fn from(state: u8) -> Self {
        Self::from(state != 0)
    }
}

impl Color {
    /// Whether the pixel is lit
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// Get the byte value filling a whole page column with this color
    ///
    /// ## Example
    ///
    /// ```
    /// use ssd1306_fb::Color;
    ///
    /// assert_eq!(Color::Off.fill_byte(), 0x00);
    /// assert_eq!(Color::On.fill_byte(), 0xFF);
    /// ```
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Off => 0x00,
            Self::On => 0xFF,
        }
    }
}
