//! 5x7 bitmap font
//!
//! One glyph per printable ASCII character (`0x20..=0x7E`), stored as five
//! column bytes in a single flat table. Bit `j` of a column byte lights row
//! `j`, least significant bit at the top.

/// Glyph width in columns
pub const GLYPH_WIDTH: u8 = 5;

/// Glyph height in rows
pub const GLYPH_HEIGHT: u8 = 7;

/// Blank columns between adjacent glyphs
pub const GLYPH_SPACING: u8 = 1;

/// First character stored in the table
const FIRST_CHAR: u8 = b' ';

/// Number of glyphs in the table
const GLYPH_COUNT: usize = 95;

/// Column bitmaps for ASCII space through tilde
#[rustfmt::skip]
pub const FONT_5X7: [u8; GLYPH_COUNT * GLYPH_WIDTH as usize] = [
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
    0x00, 0x08, 0x14, 0x22, 0x41, // '<'
    0x14, 0x14, 0x14, 0x14, 0x14, // '='
    0x41, 0x22, 0x14, 0x08, 0x00, // '>'
    0x02, 0x01, 0x51, 0x09, 0x06, // '?'
    0x32, 0x49, 0x79, 0x41, 0x3E, // '@'
    0x7E, 0x11, 0x11, 0x11, 0x7E, // 'A'
    0x7F, 0x49, 0x49, 0x49, 0x36, // 'B'
    0x3E, 0x41, 0x41, 0x41, 0x22, // 'C'
    0x7F, 0x41, 0x41, 0x22, 0x1C, // 'D'
    0x7F, 0x49, 0x49, 0x49, 0x41, // 'E'
    0x7F, 0x09, 0x09, 0x01, 0x01, // 'F'
    0x3E, 0x41, 0x41, 0x51, 0x32, // 'G'
    0x7F, 0x08, 0x08, 0x08, 0x7F, // 'H'
    0x00, 0x41, 0x7F, 0x41, 0x00, // 'I'
    0x20, 0x40, 0x41, 0x3F, 0x01, // 'J'
    0x7F, 0x08, 0x14, 0x22, 0x41, // 'K'
    0x7F, 0x40, 0x40, 0x40, 0x40, // 'L'
    0x7F, 0x02, 0x04, 0x02, 0x7F, // 'M'
    0x7F, 0x04, 0x08, 0x10, 0x7F, // 'N'
    0x3E, 0x41, 0x41, 0x41, 0x3E, // 'O'
    0x7F, 0x09, 0x09, 0x09, 0x06, // 'P'
    0x3E, 0x41, 0x51, 0x21, 0x5E, // 'Q'
    0x7F, 0x09, 0x19, 0x29, 0x46, // 'R'
    0x46, 0x49, 0x49, 0x49, 0x31, // 'S'
    0x01, 0x01, 0x7F, 0x01, 0x01, // 'T'
    0x3F, 0x40, 0x40, 0x40, 0x3F, // 'U'
    0x1F, 0x20, 0x40, 0x20, 0x1F, // 'V'
    0x7F, 0x20, 0x18, 0x20, 0x7F, // 'W'
    0x63, 0x14, 0x08, 0x14, 0x63, // 'X'
    0x03, 0x04, 0x78, 0x04, 0x03, // 'Y'
    0x61, 0x51, 0x49, 0x45, 0x43, // 'Z'
    0x00, 0x00, 0x7F, 0x41, 0x41, // '['
    0x02, 0x04, 0x08, 0x10, 0x20, // '\\'
    0x41, 0x41, 0x7F, 0x00, 0x00, // ']'
    0x04, 0x02, 0x01, 0x02, 0x04, // '^'
    0x40, 0x40, 0x40, 0x40, 0x40, // '_'
    0x00, 0x01, 0x02, 0x04, 0x00, // '`'
    0x20, 0x54, 0x54, 0x54, 0x78, // 'a'
    0x7F, 0x48, 0x44, 0x44, 0x38, // 'b'
    0x38, 0x44, 0x44, 0x44, 0x20, // 'c'
    0x38, 0x44, 0x44, 0x48, 0x7F, // 'd'
    0x38, 0x54, 0x54, 0x54, 0x18, // 'e'
    0x08, 0x7E, 0x09, 0x01, 0x02, // 'f'
    0x08, 0x14, 0x54, 0x54, 0x3C, // 'g'
    0x7F, 0x08, 0x04, 0x04, 0x78, // 'h'
    0x00, 0x44, 0x7D, 0x40, 0x00, // 'i'
    0x20, 0x40, 0x44, 0x3D, 0x00, // 'j'
    0x00, 0x7F, 0x10, 0x28, 0x44, // 'k'
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

/// Read-only view over a fixed-size bitmap font
///
/// Glyphs are stored consecutively, `width` column bytes each, starting at
/// character `first`. Characters the table does not cover render as the
/// first glyph, which is blank for every table built on space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphTable {
    data: &'static [u8],
    width: u8,
    height: u8,
    first: u8,
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::FONT_5X7
    }
}

impl GlyphTable {
    /// The built-in 5x7 font
    pub const FONT_5X7: Self = Self::new(&FONT_5X7, GLYPH_WIDTH, GLYPH_HEIGHT, FIRST_CHAR);

    /// Wrap a custom table
    ///
    /// `height` is capped at 8 since each column is a single byte.
    pub const fn new(data: &'static [u8], width: u8, height: u8, first: u8) -> Self {
        Self {
            data,
            width,
            height: if height > 8 { 8 } else { height },
            first,
        }
    }

    /// Glyph width in columns
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Glyph height in rows
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Number of glyphs stored
    pub fn len(&self) -> usize {
        match self.width {
            0 => 0,
            w => self.data.len() / usize::from(w),
        }
    }

    /// Check if the table holds no glyphs
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a character has its own glyph
    pub fn contains(&self, ch: char) -> bool {
        self.offset(ch).is_some()
    }

    /// Column bitmaps for one character
    pub fn glyph(&self, ch: char) -> &'static [u8] {
        let width = usize::from(self.width);
        let data: &'static [u8] = self.data;
        match self.offset(ch) {
            Some(start) => &data[start..start + width],
            None => data.get(..width).unwrap_or(&[]),
        }
    }

    /// Single column bitmap of a character
    ///
    /// Returns 0 for columns past the glyph width.
    pub fn column(&self, ch: char, col: u8) -> u8 {
        self.glyph(ch).get(usize::from(col)).copied().unwrap_or(0)
    }

    /// Byte offset of a character's first column, if it is in the table
    fn offset(&self, ch: char) -> Option<usize> {
        let index = (ch as u32).checked_sub(u32::from(self.first))? as usize;
        if index >= self.len() {
            return None;
        }
        Some(index * usize::from(self.width))
    }
}
