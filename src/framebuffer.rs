//! Page-addressed framebuffer
//!
//! [`Framebuffer`] mirrors the SSD1306 display RAM byte for byte, so a flush
//! is a straight copy of each page. See [`crate::layout`] for the pixel to
//! byte mapping.
//!
//! All mutations are in-memory only; nothing reaches the panel until the
//! buffer is flushed through [`Display::update`](crate::display::Display::update)
//! or [`GraphicDisplay::flush`](crate::graphics::GraphicDisplay::flush).
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::{Color, Dimensions, Framebuffer};
//!
//! let dims = Dimensions::default();
//! let mut fb = Framebuffer::new(dims, [0u8; 1024]);
//!
//! fb.set_pixel(Color::On, 3, 10);
//! assert_eq!(fb.get_pixel(3, 10), Some(Color::On));
//!
//! // Coordinates past the panel are ignored
//! fb.set_pixel(Color::On, 500, 10);
//! assert_eq!(fb.get_pixel(500, 10), None);
//!
//! fb.clear_rect(0, 7, 1, 1);
//! assert_eq!(fb.get_pixel(3, 10), Some(Color::Off));
//! ```

use crate::color::Color;
use crate::config::Dimensions;
use crate::error::BufferError;
use crate::font::Font;
use crate::layout::{byte_index, pixel_address};

/// In-memory copy of the panel's display RAM
///
/// ## Type Parameters
///
/// * `B` - Storage implementing `AsRef<[u8]> + AsMut<[u8]>`, exactly
///   `dimensions.buffer_size()` bytes long (a `[u8; N]`, `&mut [u8]`, `Vec<u8>`...)
pub struct Framebuffer<B> {
    /// Page-organised pixel storage
    buffer: B,
    /// Panel dimensions
    dimensions: Dimensions,
    /// Font used by the text and number renderers
    font: Font,
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new Framebuffer using the default 5x8 font
    ///
    /// # Panics
    ///
    /// Panics if `dimensions` violate the controller limits (possible when
    /// built as a struct literal) or if `buffer` is not exactly
    /// `dimensions.buffer_size()` bytes.
    pub fn new(dimensions: Dimensions, buffer: B) -> Self {
        assert!(
            Dimensions::new(dimensions.width, dimensions.height).is_ok(),
            "invalid framebuffer dimensions {}x{}",
            dimensions.width,
            dimensions.height
        );
        let required = dimensions.buffer_size();
        assert!(
            buffer.as_ref().len() == required,
            "framebuffer size mismatch: required {} bytes, got {}",
            required,
            buffer.as_ref().len()
        );
        Self {
            buffer,
            dimensions,
            font: Font::default(),
        }
    }

    /// Try to create a new Framebuffer, returning an error on invalid
    /// dimensions or a size mismatch
    ///
    /// This is the fallible version of [`new`](Self::new).
    pub fn try_new(dimensions: Dimensions, buffer: B) -> Result<Self, BufferError> {
        let Dimensions { width, height } = dimensions;
        if Dimensions::new(width, height).is_err() {
            return Err(BufferError::InvalidDimensions { width, height });
        }
        let expected = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided != expected {
            return Err(BufferError::SizeMismatch { expected, provided });
        }
        Ok(Self {
            buffer,
            dimensions,
            font: Font::default(),
        })
    }

    /// Select the font used for text and numbers
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Replace the font used for text and numbers
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    /// Font used for text and numbers
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Panel dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Whole buffer, pages in ascending order
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// The `width` bytes of one page, or `None` past the last page
    pub fn page(&self, page: u16) -> Option<&[u8]> {
        if page >= self.dimensions.pages() {
            return None;
        }
        let start = byte_index(0, page, self.dimensions.width);
        self.buffer
            .as_ref()
            .get(start..start + self.dimensions.width as usize)
    }

    /// Give the storage back
    pub fn release(self) -> B {
        self.buffer
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.buffer.as_mut().fill(0);
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        self.buffer.as_mut().fill(color.fill_byte());
    }

    /// Turn off the pixels of a column/page rectangle
    ///
    /// Clears every byte whose column lies in `x_first..=x_last` and whose
    /// page lies in `page_first..=page_last`. Bounds past the panel are
    /// clamped; an empty range clears nothing.
    pub fn clear_rect(&mut self, x_first: u16, x_last: u16, page_first: u16, page_last: u16) {
        let width = self.dimensions.width;
        let pages = self.dimensions.pages();
        if x_first >= width || page_first >= pages {
            return;
        }
        let x_last = x_last.min(width - 1);
        let page_last = page_last.min(pages - 1);
        if x_first > x_last || page_first > page_last {
            return;
        }

        let buffer = self.buffer.as_mut();
        for page in page_first..=page_last {
            let start = byte_index(x_first, page, width);
            let end = byte_index(x_last, page, width);
            buffer[start..=end].fill(0);
        }
    }

    /// Replace the whole buffer with `bitmap`
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::SizeMismatch`] and leaves the buffer untouched
    /// if `bitmap` is not exactly `dimensions.buffer_size()` bytes.
    pub fn load(&mut self, bitmap: &[u8]) -> Result<(), BufferError> {
        let buffer = self.buffer.as_mut();
        if bitmap.len() != buffer.len() {
            return Err(BufferError::SizeMismatch {
                expected: buffer.len(),
                provided: bitmap.len(),
            });
        }
        buffer.copy_from_slice(bitmap);
        Ok(())
    }

    /// Set or clear the pixel at `(x, y)`
    ///
    /// Any nonzero `u8`, `true` or [`Color::On`] lights the pixel. Coordinates
    /// outside the panel are ignored, so animation code can plot without
    /// checking every point.
    pub fn set_pixel(&mut self, color: impl Into<Color>, x: u16, y: u16) {
        if x >= self.dimensions.width || y >= self.dimensions.height {
            return;
        }
        let (index, bit) = pixel_address(x, y, self.dimensions.width);
        let byte = &mut self.buffer.as_mut()[index];
        match color.into() {
            Color::On => *byte |= bit,
            Color::Off => *byte &= !bit,
        }
    }

    /// Read back the pixel at `(x, y)`, or `None` outside the panel
    pub fn get_pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.dimensions.width || y >= self.dimensions.height {
            return None;
        }
        let (index, bit) = pixel_address(x, y, self.dimensions.width);
        Some(Color::from(self.buffer.as_ref()[index] & bit != 0))
    }

    /// Overwrite one page byte; out-of-panel positions are skipped
    pub(crate) fn store_column(&mut self, x: u16, page: u16, byte: u8) {
        if x >= self.dimensions.width || page >= self.dimensions.pages() {
            return;
        }
        let index = byte_index(x, page, self.dimensions.width);
        self.buffer.as_mut()[index] = byte;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn test_framebuffer() -> Framebuffer<Vec<u8>> {
        let dims = Dimensions::default();
        Framebuffer::new(dims, vec![0u8; dims.buffer_size()])
    }

    #[test]
    fn test_set_pixel_every_position_touches_one_bit() {
        let mut fb = test_framebuffer();
        for y in (0..64).step_by(7) {
            for x in (0..128).step_by(11) {
                fb.set_pixel(Color::On, x, y);
                let (index, bit) = pixel_address(x, y, 128);
                assert_eq!(fb.as_bytes()[index], bit);
                assert_eq!(fb.as_bytes().iter().filter(|b| **b != 0).count(), 1);

                fb.set_pixel(0u8, x, y);
                assert!(fb.as_bytes().iter().all(|b| *b == 0));
            }
        }
    }

    #[test]
    fn test_set_pixel_nonzero_state_sets() {
        let mut fb = test_framebuffer();
        fb.set_pixel(0x80u8, 1, 1);
        assert_eq!(fb.get_pixel(1, 1), Some(Color::On));
        fb.set_pixel(false, 1, 1);
        assert_eq!(fb.get_pixel(1, 1), Some(Color::Off));
    }

    #[test]
    fn test_clear_pixel_keeps_neighbours() {
        let mut fb = test_framebuffer();
        fb.fill(Color::On);
        fb.set_pixel(Color::Off, 10, 12);
        assert_eq!(fb.as_bytes()[128 + 10], 0xFF & !0x10);
        assert_eq!(fb.as_bytes()[128 + 9], 0xFF);
        assert_eq!(fb.as_bytes()[128 + 11], 0xFF);
        assert_eq!(fb.as_bytes()[10], 0xFF);
    }

    #[test]
    fn test_set_pixel_out_of_bounds_is_noop() {
        let mut fb = test_framebuffer();
        fb.set_pixel(Color::On, 128, 0);
        fb.set_pixel(Color::On, 0, 64);
        fb.set_pixel(Color::On, u16::MAX, u16::MAX);
        assert!(fb.as_bytes().iter().all(|b| *b == 0));
        assert_eq!(fb.get_pixel(128, 0), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut fb = test_framebuffer();
        fb.fill(Color::On);
        fb.clear();
        assert!(fb.as_bytes().iter().all(|b| *b == 0));
        fb.clear();
        assert!(fb.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_clear_rect_clears_exactly_the_rectangle() {
        let mut fb = test_framebuffer();
        fb.fill(Color::On);
        fb.clear_rect(10, 20, 2, 4);

        for page in 0..8u16 {
            for x in 0..128u16 {
                let byte = fb.as_bytes()[byte_index(x, page, 128)];
                let inside = (10..=20).contains(&x) && (2..=4).contains(&page);
                assert_eq!(byte, if inside { 0x00 } else { 0xFF }, "x={x} page={page}");
            }
        }
    }

    #[test]
    fn test_clear_rect_clamps_to_panel() {
        let mut fb = test_framebuffer();
        fb.fill(Color::On);
        fb.clear_rect(120, 255, 7, 200);

        assert_eq!(fb.page(7).unwrap()[119], 0xFF);
        assert!(fb.page(7).unwrap()[120..].iter().all(|b| *b == 0));
        assert!(fb.page(6).unwrap().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn test_clear_rect_empty_ranges_clear_nothing() {
        let mut fb = test_framebuffer();
        fb.fill(Color::On);
        fb.clear_rect(20, 10, 0, 7);
        fb.clear_rect(0, 127, 5, 4);
        fb.clear_rect(128, 200, 0, 7);
        fb.clear_rect(0, 127, 8, 9);
        assert!(fb.as_bytes().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn test_load_round_trip() {
        let mut fb = test_framebuffer();
        let bitmap: Vec<u8> = (0..1024).map(|i| (i % 251) as u8).collect();
        fb.load(&bitmap).unwrap();
        assert_eq!(fb.as_bytes(), bitmap.as_slice());
    }

    #[test]
    fn test_load_size_mismatch_leaves_buffer_unchanged() {
        let mut fb = test_framebuffer();
        fb.set_pixel(Color::On, 5, 5);
        let before = fb.as_bytes().to_vec();

        let result = fb.load(&[0xFFu8; 1023]);
        assert_eq!(
            result,
            Err(BufferError::SizeMismatch {
                expected: 1024,
                provided: 1023
            })
        );
        assert_eq!(fb.as_bytes(), before.as_slice());

        assert!(fb.load(&[0xFFu8; 1025]).is_err());
        assert_eq!(fb.as_bytes(), before.as_slice());
    }

    #[test]
    fn test_try_new_rejects_wrong_size() {
        let dims = Dimensions::default();
        let result = Framebuffer::try_new(dims, vec![0u8; 512]);
        assert!(matches!(
            result,
            Err(BufferError::SizeMismatch {
                expected: 1024,
                provided: 512
            })
        ));
        assert!(Framebuffer::try_new(dims, [0u8; 1024]).is_ok());
    }

    #[test]
    #[should_panic(expected = "framebuffer size mismatch")]
    fn test_new_panics_on_wrong_size() {
        let _ = Framebuffer::new(Dimensions::default(), vec![0u8; 10]);
    }

    #[test]
    fn test_try_new_rejects_hand_built_dimensions() {
        let dims = Dimensions {
            width: 128,
            height: 12,
        };
        let result = Framebuffer::try_new(dims, [0u8; 192]);
        assert!(matches!(
            result,
            Err(BufferError::InvalidDimensions {
                width: 128,
                height: 12
            })
        ));

        let dims = Dimensions {
            width: 0,
            height: 64,
        };
        assert!(Framebuffer::try_new(dims, [0u8; 0]).is_err());
    }

    #[test]
    #[should_panic(expected = "invalid framebuffer dimensions 128x12")]
    fn test_new_panics_on_hand_built_dimensions() {
        let dims = Dimensions {
            width: 128,
            height: 12,
        };
        let mut fb = Framebuffer::new(dims, [0u8; 192]);
        fb.set_pixel(Color::On, 127, 11);
    }

    #[test]
    fn test_page_access() {
        let dims = Dimensions::new(16, 16).unwrap();
        let mut fb = Framebuffer::new(dims, [0u8; 32]);
        fb.set_pixel(Color::On, 0, 8);
        assert_eq!(fb.page(0), Some(&[0u8; 16][..]));
        assert_eq!(fb.page(1).unwrap()[0], 0x01);
        assert_eq!(fb.page(2), None);
    }

    #[test]
    fn test_store_column_skips_out_of_panel() {
        let mut fb = test_framebuffer();
        fb.store_column(127, 7, 0xAA);
        fb.store_column(128, 0, 0xFF);
        fb.store_column(0, 8, 0xFF);
        assert_eq!(fb.as_bytes()[1023], 0xAA);
        assert_eq!(fb.as_bytes().iter().filter(|b| **b != 0).count(), 1);
    }
}
