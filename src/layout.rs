//! Pixel addressing utilities
//!
//! This module maps pixel coordinates onto the SSD1306 display RAM layout.
//!
//! The controller organises its RAM in horizontal pages of 8 rows. Each page
//! holds one byte per column; bit `b` of that byte is row `page * 8 + b`, so
//! the least significant bit is the top row of the page.
//!
//! ```text
//!            col 0    col 1    ...  col W-1
//! page 0   [byte 0] [byte 1]  ...  [byte W-1]      rows 0..=7
//! page 1   [byte W] [byte W+1] ... [byte 2W-1]     rows 8..=15
//! ```
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::layout::{bit_mask, byte_index, pixel_address};
//!
//! // Pixel (3, 10) on a 128 wide panel lives in page 1, bit 2
//! assert_eq!(byte_index(3, 1, 128), 131);
//! assert_eq!(bit_mask(10), 0x04);
//! assert_eq!(pixel_address(3, 10, 128), (131, 0x04));
//! ```

/// Number of pixel rows stored in one page byte
pub const ROWS_PER_PAGE: u16 = 8;

/// Index of the byte holding column `x` of `page`
pub fn byte_index(x: u16, page: u16, width: u16) -> usize {
    page as usize * width as usize + x as usize
}

/// Page containing pixel row `y`
pub fn page_of(y: u16) -> u16 {
    y / ROWS_PER_PAGE
}

/// Bit position of pixel row `y` within its page byte
pub fn bit_index(y: u16) -> u8 {
    (y % ROWS_PER_PAGE) as u8
}

/// Bit mask of pixel row `y` within its page byte
pub fn bit_mask(y: u16) -> u8 {
    1 << bit_index(y)
}

/// Buffer location (byte index, bit mask) of pixel `(x, y)`
///
/// The caller is responsible for bounds; see
/// [`Framebuffer::set_pixel`](crate::framebuffer::Framebuffer::set_pixel)
/// for the clamped entry point.
pub fn pixel_address(x: u16, y: u16, width: u16) -> (usize, u8) {
    (byte_index(x, page_of(y), width), bit_mask(y))
}
