//! Bitmap font for cell labels.
//!
//! 5x7 glyphs drawn at 2x, covering the letters premium labels use.

/// Glyph width in font units.
pub const GLYPH_W: u32 = 5;
/// Glyph height in font units.
pub const GLYPH_H: u32 = 7;
/// Pixels per font unit.
pub const SCALE: u32 = 2;
/// Horizontal distance between glyph origins, in pixels.
pub const ADVANCE: u32 = (GLYPH_W + 1) * SCALE;

/// Rows top to bottom; bit 4 is the leftmost column.
pub fn glyph(ch: char) -> Option<&'static [u8; GLYPH_H as usize]> {
    match ch.to_ascii_uppercase() {
        'D' => Some(&[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110]),
        'L' => Some(&[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
        'T' => Some(&[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
        'W' => Some(&[0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]),
        _ => None,
    }
}

/// Pixel width of a laid-out string.
pub fn text_width(text: &str) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 {
        return 0;
    }
    n * ADVANCE - SCALE
}

/// Pixel height of a line.
pub const fn text_height() -> u32 {
    GLYPH_H * SCALE
}

/// Whether font unit `(gx, gy)` of `rows` is inked.
#[inline]
pub fn is_set(rows: &[u8; GLYPH_H as usize], gx: u32, gy: u32) -> bool {
    rows[gy as usize] & (1 << (GLYPH_W - 1 - gx)) != 0
}
