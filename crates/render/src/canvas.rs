//! In-memory RGBA raster surface.

use std::io::{self, Write};

use crate::geometry::{Point, Rect};
use crate::glyphs;
use crate::surface::Surface;
use crate::types::{Rgb, SURFACE_SIZE};

/// One RGBA pixel. Alpha is either 0 (cleared) or 255 (painted).
pub type Pixel = [u8; 4];

const CLEAR: Pixel = [0, 0, 0, 0];

/// Row-major RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![CLEAR; len],
        }
    }

    /// A canvas sized for the board.
    pub fn board_sized() -> Self {
        Self::new(SURFACE_SIZE, SURFACE_SIZE)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    /// Painted colour at `(x, y)`; `None` if cleared or out of bounds.
    pub fn color_at(&self, x: u32, y: u32) -> Option<Rgb> {
        match self.get(x, y)? {
            [_, _, _, 0] => None,
            [r, g, b, _] => Some(Rgb::new(r, g, b)),
        }
    }

    fn put(&mut self, x: u32, y: u32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = [color.r, color.g, color.b, 255];
        }
    }

    /// Write a binary PPM (P6). Cleared pixels are written as white.
    pub fn write_ppm<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let mut row = Vec::with_capacity(self.width as usize * 3);
        for line in self.pixels.chunks_exact(self.width.max(1) as usize) {
            row.clear();
            for &[r, g, b, a] in line {
                if a == 0 {
                    row.extend_from_slice(&[255, 255, 255]);
                } else {
                    row.extend_from_slice(&[r, g, b]);
                }
            }
            out.write_all(&row)?;
        }
        out.flush()
    }
}

impl Default for PixelCanvas {
    fn default() -> Self {
        Self::board_sized()
    }
}

impl Surface for PixelCanvas {
    fn clear(&mut self) {
        self.pixels.fill(CLEAR);
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: u32, color: Rgb) {
        let x_end = rect.x.saturating_add(rect.w).min(self.width);
        let y_end = rect.y.saturating_add(rect.h).min(self.height);
        let r = radius.min(rect.w / 2).min(rect.h / 2) as f64;

        // Corner arc centres, in continuous coordinates.
        let left = rect.x as f64 + r;
        let right = (rect.x + rect.w) as f64 - r;
        let top = rect.y as f64 + r;
        let bottom = (rect.y + rect.h) as f64 - r;

        for y in rect.y..y_end {
            let cy = y as f64 + 0.5;
            let dy = (top - cy).max(cy - bottom).max(0.0);
            for x in rect.x..x_end {
                let cx = x as f64 + 0.5;
                let dx = (left - cx).max(cx - right).max(0.0);
                if dx * dx + dy * dy <= r * r {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn fill_text(&mut self, center: Point, text: &str, color: Rgb) {
        let left = center.x as i64 - (glyphs::text_width(text) / 2) as i64;
        let top = center.y as i64 - (glyphs::text_height() / 2) as i64;

        for (i, ch) in text.chars().enumerate() {
            let Some(rows) = glyphs::glyph(ch) else {
                continue;
            };
            let gx0 = left + (i as u32 * glyphs::ADVANCE) as i64;
            for gy in 0..glyphs::GLYPH_H {
                for gx in 0..glyphs::GLYPH_W {
                    if !glyphs::is_set(rows, gx, gy) {
                        continue;
                    }
                    for sy in 0..glyphs::SCALE {
                        for sx in 0..glyphs::SCALE {
                            let px = gx0 + (gx * glyphs::SCALE + sx) as i64;
                            let py = top + (gy * glyphs::SCALE + sy) as i64;
                            if px >= 0 && py >= 0 {
                                self.put(px as u32, py as u32, color);
                            }
                        }
                    }
                }
            }
        }
    }
}
