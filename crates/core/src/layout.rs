//! Grid module - the 15x15 classification matrix
//!
//! Stored as a flat row-major array: `(col, row)` lives at `row * 15 + col`.

use std::sync::OnceLock;

use crate::table::{cell_index, SpecialSquareTable, STANDARD};
use crate::types::{Square, CELL_COUNT, NUM_CELLS};

/// A fully classified board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Square; CELL_COUNT],
}

impl Grid {
    /// Every cell `Default`.
    pub fn blank() -> Self {
        Self {
            cells: [Square::Default; CELL_COUNT],
        }
    }

    /// Start blank, then stamp each table entry in order.
    pub fn from_table(table: &SpecialSquareTable) -> Self {
        let mut grid = Self::blank();
        for p in table.iter() {
            grid.cells[cell_index(p.col, p.row)] = p.square;
        }
        grid
    }

    /// Classification at `(col, row)`, `None` off the board.
    pub fn get(&self, col: u8, row: u8) -> Option<Square> {
        if col >= NUM_CELLS || row >= NUM_CELLS {
            return None;
        }
        Some(self.cells[cell_index(col, row)])
    }

    /// Rows top to bottom, each left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> + '_ {
        self.cells.chunks_exact(NUM_CELLS as usize)
    }

    /// `(col, row, square)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8, Square)> + '_ {
        self.cells.iter().enumerate().map(|(i, &sq)| {
            let col = (i % NUM_CELLS as usize) as u8;
            let row = (i / NUM_CELLS as usize) as u8;
            (col, row, sq)
        })
    }

    pub fn count(&self, square: Square) -> usize {
        self.cells.iter().filter(|&&sq| sq == square).count()
    }

    pub fn cells(&self) -> &[Square] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        generate_board()
    }
}

/// Build the standard board from scratch.
///
/// Pure and cheap; the renderer calls this on every repaint.
pub fn generate_board() -> Grid {
    let mut grid = Grid::blank();
    for (square, coords) in STANDARD {
        for &(col, row) in coords {
            grid.cells[cell_index(col, row)] = square;
        }
    }
    grid
}

/// The standard board, built once per process.
pub fn standard_grid() -> &'static Grid {
    static GRID: OnceLock<Grid> = OnceLock::new();
    GRID.get_or_init(generate_board)
}
