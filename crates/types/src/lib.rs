//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the board renderer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (layout generation, pixel rendering, terminal presentation).
//!
//! # Surface Geometry
//!
//! The board is drawn onto a fixed square surface. All values are logical pixels:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SURFACE_SIZE` | 898 | Width and height of the drawing surface |
//! | `GAP_SIZE` | 2 | Space between neighbouring cells |
//! | `NUM_CELLS` | 15 | Cells per row and per column |
//! | `CELL_SIZE` | 58 | `floor((898 - 14 * 2) / 15)` |
//! | `CELL_PITCH` | 60 | Distance between consecutive cell origins |
//!
//! # Coordinates
//!
//! Board coordinates are `(column, row)` pairs, both in `0..15`. Grids are stored
//! row-major, so `(col, row)` lives at index `row * 15 + col`.
//!
//! # Examples
//!
//! ```
//! use scrabble_board_types::{Square, Rgb, CELL_SIZE, CELL_PITCH};
//!
//! assert_eq!(CELL_SIZE, 58);
//! assert_eq!(CELL_PITCH, 60);
//!
//! assert_eq!(Square::TripleLetter.base_color(), Rgb::from_hex(0x548dd1));
//! assert_eq!(Square::TripleLetter.label(), Some("TL"));
//! assert_eq!(Square::Default.label(), None);
//! ```

pub mod color;

pub use color::Rgb;

/// Width and height of the drawing surface in logical pixels.
pub const SURFACE_SIZE: u32 = 898;

/// Gap between neighbouring cells in logical pixels.
pub const GAP_SIZE: u32 = 2;

/// Number of cells along each axis.
pub const NUM_CELLS: u8 = 15;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = (NUM_CELLS as usize) * (NUM_CELLS as usize);

/// Side length of a single cell in logical pixels.
pub const CELL_SIZE: u32 = (SURFACE_SIZE - (NUM_CELLS as u32 - 1) * GAP_SIZE) / NUM_CELLS as u32;

/// Distance between the origins of two adjacent cells.
pub const CELL_PITCH: u32 = CELL_SIZE + GAP_SIZE;

/// Corner radius of every cell's rounded rectangle.
pub const CORNER_RADIUS: u32 = 5;

/// The five square classifications of a Scrabble board.
///
/// Declaration order is also the order the layout table applies them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    #[default]
    Default,
    TripleWord,
    DoubleWord,
    TripleLetter,
    DoubleLetter,
}

impl Square {
    /// All classifications, `Default` first.
    pub const ALL: [Square; 5] = [
        Square::Default,
        Square::TripleWord,
        Square::DoubleWord,
        Square::TripleLetter,
        Square::DoubleLetter,
    ];

    /// Short label drawn inside premium cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrabble_board_types::Square;
    ///
    /// assert_eq!(Square::TripleWord.label(), Some("TW"));
    /// assert_eq!(Square::DoubleLetter.label(), Some("DL"));
    /// assert_eq!(Square::Default.label(), None);
    /// ```
    pub fn label(self) -> Option<&'static str> {
        match self {
            Square::Default => None,
            Square::TripleWord => Some("TW"),
            Square::DoubleWord => Some("DW"),
            Square::TripleLetter => Some("TL"),
            Square::DoubleLetter => Some("DL"),
        }
    }

    /// Fill colour when the pointer is elsewhere.
    pub fn base_color(self) -> Rgb {
        match self {
            Square::Default => Rgb::from_hex(0xfef1ba),
            Square::TripleWord => Rgb::from_hex(0xbc504d),
            Square::DoubleWord => Rgb::from_hex(0xb8cce4),
            Square::TripleLetter => Rgb::from_hex(0x548dd1),
            Square::DoubleLetter => Rgb::from_hex(0xb7cbe3),
        }
    }

    /// Fill colour when the pointer is over the cell.
    pub fn hover_color(self) -> Rgb {
        self.base_color().darken(HOVER_DARKEN)
    }

    /// Pick the base or hover fill.
    pub fn fill_color(self, hovered: bool) -> Rgb {
        if hovered {
            self.hover_color()
        } else {
            self.base_color()
        }
    }

    pub fn is_special(self) -> bool {
        self != Square::Default
    }
}

/// Fraction of HSL lightness removed for the hover colour.
pub const HOVER_DARKEN: f64 = 0.5;

/// A pointer location in surface-local pixels.
///
/// Coordinates may be negative or exceed the surface; hit tests simply fail then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Surface pixel that stands in for terminal cell `d` along one axis when the
/// cell covers `scale` pixels: the last pixel the cell covers.
///
/// Painting and pointer translation both go through this pixel, so a terminal
/// cell shows a board cell exactly when a pointer there hovers it.
pub const fn sample_px(d: u32, scale: u32) -> u32 {
    (d + 1) * scale - 1
}

/// Terminal cells `[start, end)` along one axis whose sample pixel lies in the
/// closed pixel interval `[px, px + len]`. Empty when no sample falls inside.
///
/// # Examples
///
/// ```
/// use scrabble_board_types::sample_span;
///
/// // A 58 px cell at 60 px shows as four 12 px columns, then one gap column.
/// assert_eq!(sample_span(60, 58, 12), (5, 9));
/// assert_eq!(sample_span(60, 58, 30), (2, 3));
/// ```
pub const fn sample_span(px: u32, len: u32, scale: u32) -> (u32, u32) {
    let start = (px + 1).div_ceil(scale) - 1;
    let end = (px + len + 1) / scale;
    if end < start {
        (start, start)
    } else {
        (start, end)
    }
}

/// Where the surface sits inside a terminal viewport, and how big one terminal
/// cell is in surface pixels.
///
/// This is the terminal counterpart of a canvas bounding box: pointer events
/// arrive in viewport cells and are translated by subtracting `left`/`top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermBounds {
    pub left: u16,
    pub top: u16,
    pub cols: u16,
    pub rows: u16,
    pub px_per_col: u32,
    pub px_per_row: u32,
}

impl TermBounds {
    /// Whether a viewport cell lies on the surface.
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.left
            && row >= self.top
            && (col - self.left) < self.cols
            && (row - self.top) < self.rows
    }

    /// Translate a viewport cell into its sample pixel on the surface.
    ///
    /// Returns `None` when the cell is off the surface.
    pub fn to_surface(&self, col: u16, row: u16) -> Option<PointerPosition> {
        if !self.contains(col, row) {
            return None;
        }
        let x = sample_px((col - self.left) as u32, self.px_per_col);
        let y = sample_px((row - self.top) as u32, self.px_per_row);
        Some(PointerPosition::new(x as i32, y as i32))
    }
}
