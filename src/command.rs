//! SSD1306 command definitions
//!
//! This module defines the command bytes used to configure the SSD1306
//! OLED controller and to address its display RAM. Commands travel over I2C
//! in a command-framed write (control byte [`CONTROL_COMMAND`]), pixel data in
//! a data-framed write (control byte [`CONTROL_DATA`]).
//!
//! ## Command Structure
//!
//! Every bus write follows the pattern:
//! 1. START + 7-bit peripheral address (write)
//! 2. Control byte selecting command or data stream
//! 3. Payload bytes (command bytes with their arguments, or GDDRAM bytes)
//! 4. STOP
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_fb::{command, DisplayInterface, I2cInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let mut interface = I2cInterface::new(MockI2c);
//! # let page_data = [0xFFu8; 128];
//! // Turn the panel off
//! let _ = interface.send_commands(&[command::DISPLAY_OFF]);
//!
//! // Address page 0 and write one page of pixels
//! let _ = interface.send_commands(&[command::PAGE_ADDRESS, 0, command::PAGE_END]);
//! let _ = interface.send_data(&page_data);
//! ```

// Bus framing

/// Default 7-bit I2C address of the SSD1306 (SA0 low)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Control byte introducing a command stream (Co=0, D/C#=0)
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte introducing a GDDRAM data stream (Co=0, D/C#=1)
pub const CONTROL_DATA: u8 = 0x40;

// Fundamental commands

/// Set contrast control (0x81)
///
/// Requires 1 byte: contrast level, 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from RAM content (0xA4)
pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;

/// Entire display on, ignoring RAM content (0xA5)
pub const ENTIRE_DISPLAY_ON: u8 = 0xA5;

/// Normal video, a set RAM bit lights the pixel (0xA6)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverse video, a cleared RAM bit lights the pixel (0xA7)
pub const INVERSE_DISPLAY: u8 = 0xA7;

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on, normal mode (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Addressing commands

/// Lower nibble of the page-mode column start address (0x00..=0x0F)
pub const LOWER_COLUMN_START: u8 = 0x00;

/// Upper nibble of the page-mode column start address (0x10..=0x1F)
pub const HIGHER_COLUMN_START: u8 = 0x10;

/// Set memory addressing mode (0x20)
///
/// Requires 1 byte: 0x00 horizontal, 0x01 vertical, 0x02 page.
pub const MEMORY_ADDRESSING_MODE: u8 = 0x20;

/// Set column address range (0x21)
///
/// Requires 2 bytes: [start column, end column].
pub const COLUMN_ADDRESS: u8 = 0x21;

/// Set page address range (0x22)
///
/// Requires 2 bytes: [start page, end page].
pub const PAGE_ADDRESS: u8 = 0x22;

/// End page sent with every [`PAGE_ADDRESS`] during a flush
pub const PAGE_END: u8 = 7;

// Hardware configuration commands

/// Set display start line (0x40..=0x7F); the lower 6 bits select the line
pub const DISPLAY_START_LINE: u8 = 0x40;

/// Segment remap, column 127 mapped to SEG0 (0xA1)
pub const SEGMENT_REMAP: u8 = 0xA1;

/// Set multiplex ratio (0xA8)
///
/// Requires 1 byte: number of active rows minus one.
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;

/// COM output scan direction, normal (0xC0)
pub const COM_SCAN_NORMAL: u8 = 0xC0;

/// COM output scan direction, remapped (0xC8)
pub const COM_SCAN_REMAPPED: u8 = 0xC8;

/// Set display offset (0xD3)
///
/// Requires 1 byte: vertical shift by COM, 0..=63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Requires 1 byte: 0x02 sequential, 0x12 alternative (128x64 panels).
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency (0xD5)
///
/// Requires 1 byte: oscillator frequency in the upper nibble, divide
/// ratio minus one in the lower nibble.
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Set pre-charge period (0xD9)
///
/// Requires 1 byte: phase 2 period in the upper nibble, phase 1 in the lower.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB)
///
/// Requires 1 byte: 0x00 ~0.65 VCC, 0x20 ~0.77 VCC, 0x30 ~0.83 VCC.
pub const SET_VCOMH_DESELECT: u8 = 0xDB;

// Charge pump commands

/// Charge pump setting (0x8D)
///
/// Requires 1 byte: [`CHARGE_PUMP_ENABLE`] or [`CHARGE_PUMP_DISABLE`].
pub const CHARGE_PUMP: u8 = 0x8D;

/// Argument for [`CHARGE_PUMP`] enabling the internal DC-DC converter
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

/// Argument for [`CHARGE_PUMP`] disabling the internal DC-DC converter
pub const CHARGE_PUMP_DISABLE: u8 = 0x10;
