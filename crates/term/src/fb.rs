//! Character framebuffer the board is painted into.
//!
//! Every cell is a character plus a [`CellStyle`]. Cells off the mounted board,
//! and the gap columns and rows between board cells, stay [`Cell::BLANK`].

use std::io::Write;
use std::ops::Range;

use anyhow::Result;
use crossterm::{
    style::{Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};

use crate::types::Rgb;

/// Colours and weight of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    /// Background around the board and in the gaps between cells.
    pub const BLANK: CellStyle = CellStyle {
        fg: Rgb::new(220, 220, 220),
        bg: Rgb::BLACK,
        bold: false,
    };

    /// Solid block in a cell's fill colour.
    pub const fn fill(color: Rgb) -> Self {
        Self {
            fg: color,
            bg: color,
            bold: false,
        }
    }

    /// Bold label text over the cell fill `bg`.
    pub const fn label(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg, bold: true }
    }

    /// Queue the commands that switch the terminal to this style.
    pub fn queue_into<W: Write>(&self, out: &mut W) -> Result<()> {
        out.queue(SetForegroundColor(term_color(self.fg)))?;
        out.queue(SetBackgroundColor(term_color(self.bg)))?;
        let weight = if self.bold {
            Attribute::Bold
        } else {
            Attribute::NormalIntensity
        };
        out.queue(SetAttribute(weight))?;
        Ok(())
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::BLANK
    }
}

fn term_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        style: CellStyle::BLANK,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of styled terminal cells sized to the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Size the buffer to `width` x `height` with every cell blank.
    ///
    /// Reuses the allocation once it has been large enough.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width as usize * height as usize, Cell::BLANK);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Write one cell; positions off the buffer are dropped.
    pub fn put(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Blank-character fill of the `cols` x `rows` block, clipped to the buffer.
    pub fn fill(&mut self, cols: Range<u16>, rows: Range<u16>, style: CellStyle) {
        let cols = cols.start.min(self.width)..cols.end.min(self.width);
        if cols.is_empty() {
            return;
        }
        for y in rows.start.min(self.height)..rows.end.min(self.height) {
            let row = y as usize * self.width as usize;
            let span = row + cols.start as usize..row + cols.end as usize;
            self.cells[span].fill(Cell { ch: ' ', style });
        }
    }

    /// Characters of row `y`, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_clips_a_block_hanging_off_the_edge() {
        let tw = CellStyle::fill(Rgb::from_hex(0xbc504d));
        let mut fb = FrameBuffer::new(6, 2);
        fb.fill(3..10, 1..5, tw);
        assert_eq!(fb.get(2, 1), Some(Cell::BLANK));
        assert_eq!(fb.get(5, 1).map(|c| c.style), Some(tw));
        assert!(fb.cells()[..6].iter().all(|c| *c == Cell::BLANK));
    }

    #[test]
    fn labels_off_the_buffer_are_dropped() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put(5, 0, 'T', CellStyle::label(Rgb::WHITE, Rgb::BLACK));
        assert!(fb.cells().iter().all(|c| *c == Cell::BLANK));
        assert_eq!(fb.get(2, 0), None);
    }

    #[test]
    fn reset_blanks_every_cell_at_the_new_size() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put(1, 1, 'D', CellStyle::label(Rgb::BLACK, Rgb::from_hex(0xb8cce4)));
        fb.reset(3, 3);
        assert_eq!((fb.width(), fb.height()), (3, 3));
        assert_eq!(fb.cells().len(), 9);
        assert!(fb.cells().iter().all(|c| *c == Cell::BLANK));
    }

    #[test]
    fn style_commands_carry_exact_fill_colour() {
        let mut out = Vec::new();
        CellStyle::fill(Rgb::from_hex(0x548dd1))
            .queue_into(&mut out)
            .unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("38;2;84;141;209"), "{text:?}");
        assert!(text.contains("48;2;84;141;209"), "{text:?}");
    }

    #[test]
    fn label_style_is_bold_and_fill_is_not() {
        let mut bold = Vec::new();
        CellStyle::label(Rgb::WHITE, Rgb::BLACK)
            .queue_into(&mut bold)
            .unwrap();
        let mut normal = Vec::new();
        CellStyle::BLANK.queue_into(&mut normal).unwrap();

        let mut sgr_bold = Vec::new();
        sgr_bold.queue(SetAttribute(Attribute::Bold)).unwrap();
        assert!(bold.ends_with(&sgr_bold));
        assert!(!normal.ends_with(&sgr_bold));
    }
}
