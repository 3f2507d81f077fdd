//! SSD1306 OLED Display Driver
//!
//! A framebuffer driver for SSD1306 monochrome OLED panels on I2C, up to
//! 128x64 pixels.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Page-addressed framebuffer with pixel and rectangle operations
//! - Built-in 5x8 and 12x16 fonts, fixed-width integer and decimal rendering
//! - Push-button input and Lissajous curve animations
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use ssd1306_fb::{Builder, Display, GraphicDisplay, I2cInterface};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let mut delay = MockDelay;
//! let config = match Builder::new().contrast(0xFF).precharge(0x50).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let interface = I2cInterface::from_config(i2c, &config);
//!
//! let mut display = GraphicDisplay::new(Display::new(interface, config), [0u8; 1024]);
//! let _ = display.initialize(&mut delay);
//!
//! let fb = display.framebuffer_mut();
//! fb.draw_str("PRESS START", 2, 0);
//! fb.draw_str("TO BEGIN...", 4, 0);
//! let _ = display.flush();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Lissajous curve animations
pub mod animation;
/// Pixel color for monochrome panels
pub mod color;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Fixed-width bitmap fonts
pub mod font;
/// Page-addressed framebuffer
pub mod framebuffer;
/// Framebuffer-backed display, embedded-graphics support with the `graphics` feature
pub mod graphics;
/// Push-button input
pub mod input;
/// Hardware interface abstraction
pub mod interface;
/// Pixel addressing utilities
pub mod layout;
/// Glyph and number rendering
pub mod text;

pub use animation::{Lissajous, RotatingLissajous};
pub use color::Color;
pub use config::{Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS};
pub use display::{Display, PanelState};
pub use error::{BufferError, BuilderError, Error};
pub use font::{FONT_5X8, FONT_12X16, Font};
pub use framebuffer::Framebuffer;
pub use graphics::GraphicDisplay;
pub use input::Button;
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, I2cInterface};
pub use text::DECIMAL_DIVIDER;
