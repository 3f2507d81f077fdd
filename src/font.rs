//! Fixed-width bitmap fonts
//!
//! Glyphs are stored in the same column-major, page-packed layout as the
//! display RAM: each byte is one column of 8 vertically stacked pixels with
//! the top row in bit 0. A glyph taller than one page stores its pages one
//! after the other, each page holding `columns` bytes.
//!
//! Two fonts are provided:
//!
//! | Font           | Glyph  | Pages | Spacing | Cell width |
//! |----------------|--------|-------|---------|------------|
//! | [`FONT_5X8`]   | 5 x 8  | 1     | 1 + 1   | 7 px       |
//! | [`FONT_12X16`] | 12 x 16| 2     | 0 + 0   | 12 px      |
//!
//! Both cover printable ASCII, `0x20..=0x7E`. The 12x16 font is the 5x8
//! font scaled by two at compile time and centred in its cell.
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::{FONT_12X16, FONT_5X8};
//!
//! assert_eq!(FONT_5X8.cell_width(), 7);
//! assert_eq!(FONT_12X16.cell_width(), 12);
//!
//! // '1' in the 5x8 font
//! assert_eq!(FONT_5X8.glyph(b'1'), Some(&[0x00, 0x42, 0x7F, 0x40, 0x00][..]));
//! assert_eq!(FONT_5X8.glyph(0x7F), None);
//! ```

/// First character code present in the glyph tables
const FIRST_CHAR: u8 = 0x20;

/// Number of glyphs in the glyph tables (`0x20..=0x7E`)
const GLYPH_COUNT: usize = 95;

/// A fixed-width bitmap font
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font {
    /// Character code of the first glyph in `data`
    pub first_char: u8,
    /// Number of glyphs in `data`
    pub glyph_count: u8,
    /// Glyph bitmap width in pixel columns
    pub columns: u8,
    /// Glyph height in 8-row pages
    pub pages: u8,
    /// Blank columns drawn before each glyph
    pub space_start: u8,
    /// Blank columns drawn after each glyph
    pub space_end: u8,
    /// Glyph bitmaps, `columns * pages` bytes per glyph
    pub data: &'static [u8],
}

impl Font {
    /// Width of one glyph cell in pixels, spacing included
    pub const fn cell_width(&self) -> u16 {
        self.space_start as u16 + self.columns as u16 + self.space_end as u16
    }

    /// Height of one glyph cell in pixels
    pub const fn cell_height(&self) -> u16 {
        self.pages as u16 * 8
    }

    /// Bytes occupied by one glyph in `data`
    pub const fn glyph_len(&self) -> usize {
        self.columns as usize * self.pages as usize
    }

    /// Bitmap of `char_code`, or `None` when the font has no such glyph
    pub fn glyph(&self, char_code: u8) -> Option<&'static [u8]> {
        let index = char_code.checked_sub(self.first_char)? as usize;
        if index >= self.glyph_count as usize {
            return None;
        }
        let data: &'static [u8] = self.data;
        let start = index * self.glyph_len();
        data.get(start..start + self.glyph_len())
    }
}

impl Default for Font {
    fn default() -> Self {
        FONT_5X8
    }
}

/// 5x8 font, one blank column on each side of a glyph
pub const FONT_5X8: Font = Font {
    first_char: FIRST_CHAR,
    glyph_count: GLYPH_COUNT as u8,
    columns: 5,
    pages: 1,
    space_start: 1,
    space_end: 1,
    data: &GLYPHS_5X8,
};

/// 12x16 font, glyphs fill the whole cell
pub const FONT_12X16: Font = Font {
    first_char: FIRST_CHAR,
    glyph_count: GLYPH_COUNT as u8,
    columns: 12,
    pages: 2,
    space_start: 0,
    space_end: 0,
    data: &GLYPHS_12X16,
};

const GLYPHS_12X16: [u8; GLYPH_COUNT * 24] = scale_5x8(&GLYPHS_5X8);

/// Spread the low nibble of `bits` over a byte, each bit doubled
const fn double_nibble(bits: u8) -> u8 {
    let mut out = 0u8;
    let mut i = 0;
    while i < 4 {
        if bits & (1 << i) != 0 {
            out |= 0b11 << (2 * i);
        }
        i += 1;
    }
    out
}

/// Scale the 5x8 glyphs by two into 12x16 cells
///
/// Column `c` of the source lands on columns `1 + 2c` and `2 + 2c`; source
/// rows 0..=3 fill the upper page and rows 4..=7 the lower page.
const fn scale_5x8(src: &[u8; GLYPH_COUNT * 5]) -> [u8; GLYPH_COUNT * 24] {
    let mut out = [0u8; GLYPH_COUNT * 24];
    let mut glyph = 0;
    while glyph < GLYPH_COUNT {
        let mut col = 0;
        while col < 5 {
            let bits = src[glyph * 5 + col];
            let upper = double_nibble(bits & 0x0F);
            let lower = double_nibble(bits >> 4);
            let x = glyph * 24 + 1 + 2 * col;
            out[x] = upper;
            out[x + 1] = upper;
            out[x + 12] = lower;
            out[x + 13] = lower;
            col += 1;
        }
        glyph += 1;
    }
    out
}

#[rustfmt::skip]
const GLYPHS_5X8: [u8; GLYPH_COUNT * 5] = [
    0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x5F, 0x00, 0x00, // '!'
    0x00, 0x07, 0x00, 0x07, 0x00, // '"'
    0x14, 0x7F, 0x14, 0x7F, 0x14, // '#'
    0x24, 0x2A, 0x7F, 0x2A, 0x12, // '$'
    0x23, 0x13, 0x08, 0x64, 0x62, // '%'
    0x36, 0x49, 0x55, 0x22, 0x50, // '&'
    0x00, 0x05, 0x03, 0x00, 0x00, // '''
    0x00, 0x1C, 0x22, 0x41, 0x00, // '('
    0x00, 0x41, 0x22, 0x1C, 0x00, // ')'
    0x08, 0x2A, 0x1C, 0x2A, 0x08, // '*'
    0x08, 0x08, 0x3E, 0x08, 0x08, // '+'
    0x00, 0x50, 0x30, 0x00, 0x00, // ','
    0x08, 0x08, 0x08, 0x08, 0x08, // '-'
    0x00, 0x60, 0x60, 0x00, 0x00, // '.'
    0x20, 0x10, 0x08, 0x04, 0x02, // '/'
    0x3E, 0x51, 0x49, 0x45, 0x3E, // '0'
    0x00, 0x42, 0x7F, 0x40, 0x00, // '1'
    0x42, 0x61, 0x51, 0x49, 0x46, // '2'
    0x21, 0x41, 0x45, 0x4B, 0x31, // '3'
    0x18, 0x14, 0x12, 0x7F, 0x10, // '4'
    0x27, 0x45, 0x45, 0x45, 0x39, // '5'
    0x3C, 0x4A, 0x49, 0x49, 0x30, // '6'
    0x01, 0x71, 0x09, 0x05, 0x03, // '7'
    0x36, 0x49, 0x49, 0x49, 0x36, // '8'
    0x06, 0x49, 0x49, 0x29, 0x1E, // '9'
    0x00, 0x36, 0x36, 0x00, 0x00, // ':'
    0x00, 0x56, 0x36, 0x00, 0x00, // ';'
    0x08, 0x14, 0x22, 0x41, 0x00, // '<'
    0x14, 0x14, 0x14, 0x14, 0x14, // '='
    0x00, 0x41, 0x22, 0x14, 0x08, // '>'
    0x02, 0x01, 0x51, 0x09, 0x06, // '?'
    0x32, 0x49, 0x79, 0x41, 0x3E, // '@'
    0x7E, 0x11, 0x11, 0x11, 0x7E, // 'A'
    0x7F, 0x49, 0x49, 0x49, 0x36, // 'B'
    0x3E, 0x41, 0x41, 0x41, 0x22, // 'C'
    0x7F, 0x41, 0x41, 0x22, 0x1C, // 'D'
    0x7F, 0x49, 0x49, 0x49, 0x41, // 'E'
    0x7F, 0x09, 0x09, 0x09, 0x01, // 'F'
    0x3E, 0x41, 0x49, 0x49, 0x7A, // 'G'
    0x7F, 0x08, 0x08, 0x08, 0x7F, // 'H'
    0x00, 0x41, 0x7F, 0x41, 0x00, // 'I'
    0x20, 0x40, 0x41, 0x3F, 0x01, // 'J'
    0x7F, 0x08, 0x14, 0x22, 0x41, // 'K'
    0x7F, 0x40, 0x40, 0x40, 0x40, // 'L'
    0x7F, 0x02, 0x0C, 0x02, 0x7F, // 'M'
    0x7F, 0x04, 0x08, 0x10, 0x7F, // 'N'
    0x3E, 0x41, 0x41, 0x41, 0x3E, // 'O'
    0x7F, 0x09, 0x09, 0x09, 0x06, // 'P'
    0x3E, 0x41, 0x51, 0x21, 0x5E, // 'Q'
    0x7F, 0x09, 0x19, 0x29, 0x46, // 'R'
    0x46, 0x49, 0x49, 0x49, 0x31, // 'S'
    0x01, 0x01, 0x7F, 0x01, 0x01, // 'T'
    0x3F, 0x40, 0x40, 0x40, 0x3F, // 'U'
    0x1F, 0x20, 0x40, 0x20, 0x1F, // 'V'
    0x3F, 0x40, 0x38, 0x40, 0x3F, // 'W'
    0x63, 0x14, 0x08, 0x14, 0x63, // 'X'
    0x07, 0x08, 0x70, 0x08, 0x07, // 'Y'
    0x61, 0x51, 0x49, 0x45, 0x43, // 'Z'
    0x00, 0x7F, 0x41, 0x41, 0x00, // '['
    0x02, 0x04, 0x08, 0x10, 0x20, // '\'
    0x00, 0x41, 0x41, 0x7F, 0x00, // ']'
    0x04, 0x02, 0x01, 0x02, 0x04, // '^'
    0x40, 0x40, 0x40, 0x40, 0x40, // '_'
    0x00, 0x01, 0x02, 0x04, 0x00, // '`'
    0x20, 0x54, 0x54, 0x54, 0x78, // 'a'
    0x7F, 0x48, 0x44, 0x44, 0x38, // 'b'
    0x38, 0x44, 0x44, 0x44, 0x20, // 'c'
    0x38, 0x44, 0x44, 0x48, 0x7F, // 'd'
    0x38, 0x54, 0x54, 0x54, 0x18, // 'e'
    0x08, 0x7E, 0x09, 0x01, 0x02, // 'f'
    0x0C, 0x52, 0x52, 0x52, 0x3E, // 'g'
    0x7F, 0x08, 0x04, 0x04, 0x78, // 'h'
    0x00, 0x44, 0x7D, 0x40, 0x00, // 'i'
    0x20, 0x40, 0x44, 0x3D, 0x00, // 'j'
    0x7F, 0x10, 0x28, 0x44, 0x00, // 'k'
    0x00, 0x41, 0x7F, 0x40, 0x00, // 'l'
    0x7C, 0x04, 0x18, 0x04, 0x78, // 'm'
    0x7C, 0x08, 0x04, 0x04, 0x78, // 'n'
    0x38, 0x44, 0x44, 0x44, 0x38, // 'o'
    0x7C, 0x14, 0x14, 0x14, 0x08, // 'p'
    0x08, 0x14, 0x14, 0x18, 0x7C, // 'q'
    0x7C, 0x08, 0x04, 0x04, 0x08, // 'r'
    0x48, 0x54, 0x54, 0x54, 0x20, // 's'
    0x04, 0x3F, 0x44, 0x40, 0x20, // 't'
    0x3C, 0x40, 0x40, 0x20, 0x7C, // 'u'
    0x1C, 0x20, 0x40, 0x20, 0x1C, // 'v'
    0x3C, 0x40, 0x30, 0x40, 0x3C, // 'w'
    0x44, 0x28, 0x10, 0x28, 0x44, // 'x'
    0x0C, 0x50, 0x50, 0x50, 0x3C, // 'y'
    0x44, 0x64, 0x54, 0x4C, 0x44, // 'z'
    0x00, 0x08, 0x36, 0x41, 0x00, // '{'
    0x00, 0x00, 0x7F, 0x00, 0x00, // '|'
    0x00, 0x41, 0x36, 0x08, 0x00, // '}'
    0x10, 0x08, 0x08, 0x10, 0x08, // '~'
];
