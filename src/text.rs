//! Glyph and number rendering into a [`Framebuffer`]
//!
//! Text is placed on a coarse grid: `y_page` counts 8-row pages and
//! `x_symbol` counts glyph cells of the framebuffer's font, so with the 5x8
//! font `x_symbol = 3` starts at pixel column 21.
//!
//! Glyph columns are stored whole, not OR'ed into the buffer: a character
//! erases whatever was underneath its cell, spacing columns included.
//! Columns that fall past the right edge or below the last page are dropped.
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::{Dimensions, Framebuffer};
//!
//! let mut fb = Framebuffer::new(Dimensions::default(), [0u8; 1024]);
//!
//! fb.draw_str("VOLT", 0, 0);
//! fb.draw_fixed_2_1(1, 0, 12.35); // "12.4"
//! fb.draw_uint(2, 0, 1234, 3); // "234"
//! ```

use log::trace;

use crate::framebuffer::Framebuffer;

/// Glyph drawn between integer and fractional digits
pub const DECIMAL_DIVIDER: u8 = b'.';

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draw one character at cell `x_symbol` of page `y_page`
    ///
    /// Codes the font has no glyph for are skipped, and so is everything
    /// drawn with a font of zero-width glyphs.
    pub fn draw_char(&mut self, char_code: u8, y_page: u16, x_symbol: u16) {
        let font = *self.font();
        if font.columns == 0 {
            return;
        }
        let Some(glyph) = font.glyph(char_code) else {
            trace!("no glyph for code {:#04x}, skipped", char_code);
            return;
        };

        let columns = font.columns as usize;
        let x_start = x_symbol.saturating_mul(font.cell_width());

        for (page_offset, page_columns) in glyph.chunks_exact(columns).enumerate() {
            let page = y_page.saturating_add(page_offset as u16);
            let mut x = x_start;
            for _ in 0..font.space_start {
                self.store_column(x, page, 0);
                x = x.saturating_add(1);
            }
            for &column in page_columns {
                self.store_column(x, page, column);
                x = x.saturating_add(1);
            }
            for _ in 0..font.space_end {
                self.store_column(x, page, 0);
                x = x.saturating_add(1);
            }
        }
    }

    /// Draw `text` left to right starting at cell `x_symbol`
    pub fn draw_string(&mut self, text: &[u8], y_page: u16, x_symbol: u16) {
        for (offset, &char_code) in text.iter().enumerate() {
            let x = x_symbol.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
            self.draw_char(char_code, y_page, x);
        }
    }

    /// Draw the bytes of `text`; non-ASCII bytes have no glyph and are skipped
    pub fn draw_str(&mut self, text: &str, y_page: u16, x_symbol: u16) {
        self.draw_string(text.as_bytes(), y_page, x_symbol);
    }

    /// Draw `value` as exactly `digit_count` zero-padded decimal digits
    ///
    /// Higher digits are cut off, so `draw_uint(.., 1234, 3)` shows `234`.
    pub fn draw_uint(&mut self, y_page: u16, x_symbol: u16, value: u32, digit_count: u8) {
        self.draw_digits(y_page, x_symbol, u64::from(value), digit_count);
    }

    /// Draw `value` as `integer_digits`, a divider, then `fractional_digits`
    ///
    /// The value is scaled to one extra decimal place and truncated; that
    /// place rounds half up. Integer digits are cut off like
    /// [`draw_uint`](Self::draw_uint). Negative and NaN values draw as zero.
    /// Without fractional digits no divider is drawn.
    pub fn draw_fixed_decimal(
        &mut self,
        y_page: u16,
        x_symbol: u16,
        value: f32,
        integer_digits: u8,
        fractional_digits: u8,
    ) {
        let mut scale = 10.0_f32;
        for _ in 0..fractional_digits {
            scale *= 10.0;
        }
        // `as` saturates: negatives and NaN become 0
        let scaled = (value * scale) as u64;
        let rounded = scaled / 10 + u64::from(scaled % 10 >= 5);

        let (integer, fraction) = match 10_u64.checked_pow(u32::from(fractional_digits)) {
            Some(divisor) => (rounded / divisor, rounded % divisor),
            None => (0, rounded),
        };

        self.draw_digits(y_page, x_symbol, integer, integer_digits);
        if fractional_digits == 0 {
            return;
        }
        let x = x_symbol.saturating_add(u16::from(integer_digits));
        self.draw_char(DECIMAL_DIVIDER, y_page, x);
        self.draw_digits(y_page, x.saturating_add(1), fraction, fractional_digits);
    }

    /// `d.ddd`
    pub fn draw_fixed_1_3(&mut self, y_page: u16, x_symbol: u16, value: f32) {
        self.draw_fixed_decimal(y_page, x_symbol, value, 1, 3);
    }

    /// `dd.d`
    pub fn draw_fixed_2_1(&mut self, y_page: u16, x_symbol: u16, value: f32) {
        self.draw_fixed_decimal(y_page, x_symbol, value, 2, 1);
    }

    /// `ddd.d`
    pub fn draw_fixed_3_1(&mut self, y_page: u16, x_symbol: u16, value: f32) {
        self.draw_fixed_decimal(y_page, x_symbol, value, 3, 1);
    }

    /// `ddd`, rounded half up on the first decimal place
    pub fn draw_fixed_3(&mut self, y_page: u16, x_symbol: u16, value: f32) {
        self.draw_fixed_decimal(y_page, x_symbol, value, 3, 0);
    }

    fn draw_digits(&mut self, y_page: u16, x_symbol: u16, value: u64, digit_count: u8) {
        for position in 0..digit_count {
            let exponent = u32::from(digit_count - 1 - position);
            // Places beyond u64 range are always zero
            let digit = 10_u64
                .checked_pow(exponent)
                .map_or(0, |divisor| (value / divisor) % 10);
            let x = x_symbol.saturating_add(u16::from(position));
            self.draw_char(b'0' + digit as u8, y_page, x);
        }
    }
}
