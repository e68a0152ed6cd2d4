//! Special-square table - which coordinates carry which premium
//!
//! Coordinates are `(column, row)`. The standard board is `const` data and is
//! checked for bounds and pairwise disjointness at compile time; custom tables
//! go through [`SpecialSquareTable::new`], which rejects the same mistakes at
//! runtime instead of letting a later entry silently win.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{Square, CELL_COUNT, NUM_CELLS};

/// A `(column, row)` board coordinate.
pub type Coord = (u8, u8);

/// Triple-word squares: the corners and edge midpoints.
pub const TRIPLE_WORD: &[Coord] = &[
    (0, 0),
    (0, 7),
    (0, 14),
    (7, 0),
    (7, 14),
    (14, 0),
    (14, 7),
    (14, 14),
];

/// Double-word squares: both diagonals plus the centre star.
pub const DOUBLE_WORD: &[Coord] = &[
    (1, 1),
    (1, 13),
    (2, 2),
    (2, 12),
    (3, 3),
    (3, 11),
    (4, 4),
    (4, 10),
    (7, 7),
    (10, 4),
    (10, 10),
    (11, 3),
    (11, 11),
    (12, 2),
    (12, 12),
    (13, 1),
    (13, 13),
];

pub const TRIPLE_LETTER: &[Coord] = &[
    (1, 5),
    (1, 9),
    (5, 1),
    (5, 5),
    (5, 9),
    (5, 13),
    (9, 1),
    (9, 5),
    (9, 9),
    (9, 13),
    (13, 5),
    (13, 9),
];

pub const DOUBLE_LETTER: &[Coord] = &[
    (0, 3),
    (0, 11),
    (2, 6),
    (2, 8),
    (3, 0),
    (3, 7),
    (3, 14),
    (6, 2),
    (6, 6),
    (6, 8),
    (6, 12),
    (7, 3),
    (7, 11),
    (8, 2),
    (8, 6),
    (8, 8),
    (8, 12),
    (11, 0),
    (11, 7),
    (11, 14),
    (12, 6),
    (12, 8),
    (14, 3),
    (14, 11),
];

/// The standard board in application order.
pub const STANDARD: [(Square, &[Coord]); 4] = [
    (Square::TripleWord, TRIPLE_WORD),
    (Square::DoubleWord, DOUBLE_WORD),
    (Square::TripleLetter, TRIPLE_LETTER),
    (Square::DoubleLetter, DOUBLE_LETTER),
];

const _: () = assert!(
    coords_are_disjoint(&STANDARD),
    "standard special-square table overlaps or leaves the board"
);

/// Every coordinate is on the board and claimed at most once.
const fn coords_are_disjoint(entries: &[(Square, &[Coord])]) -> bool {
    let mut seen = [false; CELL_COUNT];
    let mut i = 0;
    while i < entries.len() {
        let coords = entries[i].1;
        let mut j = 0;
        while j < coords.len() {
            let (col, row) = coords[j];
            if col >= NUM_CELLS || row >= NUM_CELLS {
                return false;
            }
            let idx = (row as usize) * (NUM_CELLS as usize) + (col as usize);
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
            j += 1;
        }
        i += 1;
    }
    true
}

/// Reasons a custom table is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("coordinate ({col}, {row}) is outside the {size}x{size} board", size = NUM_CELLS)]
    OutOfBounds { col: u8, row: u8 },

    #[error("coordinate ({col}, {row}) is listed as both {first:?} and {second:?}")]
    Overlap {
        col: u8,
        row: u8,
        first: Square,
        second: Square,
    },

    #[error("coordinate ({col}, {row}) lists Default; only premium squares belong in the table")]
    NotSpecial { col: u8, row: u8 },
}

/// One premium placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub square: Square,
    pub col: u8,
    pub row: u8,
}

/// A validated set of premium placements.
///
/// Holds at most one entry per board cell, so it never outgrows the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialSquareTable {
    entries: ArrayVec<Placement, CELL_COUNT>,
}

impl SpecialSquareTable {
    /// The standard Scrabble premium layout.
    pub fn standard() -> Self {
        let mut entries = ArrayVec::new();
        for (square, coords) in STANDARD {
            for &(col, row) in coords {
                entries.push(Placement { square, col, row });
            }
        }
        Self { entries }
    }

    /// Build and validate a custom table.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrabble_board_core::{LayoutError, SpecialSquareTable};
    /// use scrabble_board_types::Square;
    ///
    /// let ok = SpecialSquareTable::new([(Square::TripleWord, (0, 0))]).unwrap();
    /// assert_eq!(ok.len(), 1);
    ///
    /// let clash = SpecialSquareTable::new([
    ///     (Square::TripleWord, (0, 0)),
    ///     (Square::DoubleLetter, (0, 0)),
    /// ]);
    /// assert!(matches!(clash, Err(LayoutError::Overlap { col: 0, row: 0, .. })));
    /// ```
    pub fn new<I>(entries: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (Square, Coord)>,
    {
        let mut claimed: [Option<Square>; CELL_COUNT] = [None; CELL_COUNT];
        let mut out = ArrayVec::new();

        for (square, (col, row)) in entries {
            if col >= NUM_CELLS || row >= NUM_CELLS {
                return Err(LayoutError::OutOfBounds { col, row });
            }
            if !square.is_special() {
                return Err(LayoutError::NotSpecial { col, row });
            }
            let idx = cell_index(col, row);
            if let Some(first) = claimed[idx] {
                return Err(LayoutError::Overlap {
                    col,
                    row,
                    first,
                    second: square,
                });
            }
            claimed[idx] = Some(square);
            // One entry per distinct cell, so capacity cannot be exceeded.
            out.push(Placement { square, col, row });
        }

        Ok(Self { entries: out })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.entries.iter()
    }

    /// Coordinates assigned to `square`, in table order.
    pub fn coords(&self, square: Square) -> impl Iterator<Item = Coord> + '_ {
        self.entries
            .iter()
            .filter(move |p| p.square == square)
            .map(|p| (p.col, p.row))
    }

    /// Classification of a single coordinate, `Default` if unlisted.
    pub fn classify(&self, col: u8, row: u8) -> Square {
        self.entries
            .iter()
            .find(|p| p.col == col && p.row == row)
            .map(|p| p.square)
            .unwrap_or_default()
    }
}

impl Default for SpecialSquareTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[inline(always)]
pub(crate) fn cell_index(col: u8, row: u8) -> usize {
    (row as usize) * (NUM_CELLS as usize) + (col as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_counts() {
        let t = SpecialSquareTable::standard();
        assert_eq!(t.coords(Square::TripleWord).count(), 8);
        assert_eq!(t.coords(Square::DoubleWord).count(), 17);
        assert_eq!(t.coords(Square::TripleLetter).count(), 12);
        assert_eq!(t.coords(Square::DoubleLetter).count(), 24);
        assert_eq!(t.len(), 61);
    }

    #[test]
    fn standard_entries_pass_runtime_validation() {
        let flat = STANDARD
            .iter()
            .flat_map(|(sq, coords)| coords.iter().map(move |&c| (*sq, c)));
        let validated = SpecialSquareTable::new(flat).unwrap();
        assert_eq!(validated, SpecialSquareTable::standard());
    }

    #[test]
    fn const_check_rejects_overlap_and_out_of_range() {
        const CLASH: [(Square, &[Coord]); 2] = [
            (Square::TripleWord, &[(0, 0)]),
            (Square::DoubleWord, &[(0, 0)]),
        ];
        const OFF: [(Square, &[Coord]); 1] = [(Square::TripleWord, &[(15, 0)])];
        assert!(!coords_are_disjoint(&CLASH));
        assert!(!coords_are_disjoint(&OFF));
        assert!(coords_are_disjoint(&STANDARD));
    }

    #[test]
    fn new_rejects_out_of_bounds() {
        let err = SpecialSquareTable::new([(Square::DoubleLetter, (3, 15))]).unwrap_err();
        assert_eq!(err, LayoutError::OutOfBounds { col: 3, row: 15 });
    }

    #[test]
    fn new_rejects_default_entries() {
        let err = SpecialSquareTable::new([(Square::Default, (1, 1))]).unwrap_err();
        assert_eq!(err, LayoutError::NotSpecial { col: 1, row: 1 });
    }

    #[test]
    fn new_rejects_duplicates_within_one_class() {
        let err = SpecialSquareTable::new([
            (Square::TripleLetter, (5, 5)),
            (Square::TripleLetter, (5, 5)),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::Overlap {
                col: 5,
                row: 5,
                first: Square::TripleLetter,
                second: Square::TripleLetter,
            }
        );
    }

    #[test]
    fn classify_defaults_unlisted() {
        let t = SpecialSquareTable::standard();
        assert_eq!(t.classify(0, 0), Square::TripleWord);
        assert_eq!(t.classify(1, 5), Square::TripleLetter);
        assert_eq!(t.classify(0, 1), Square::Default);
    }

    #[test]
    fn error_messages_name_the_coordinate() {
        let msg = LayoutError::OutOfBounds { col: 20, row: 1 }.to_string();
        assert_eq!(msg, "coordinate (20, 1) is outside the 15x15 board");
    }
}
