//! Board layout tests - classification of every coordinate

use scrabble_board::core::table::{DOUBLE_LETTER, DOUBLE_WORD, STANDARD, TRIPLE_LETTER, TRIPLE_WORD};
use scrabble_board::core::{generate_board, LayoutError, SpecialSquareTable};
use scrabble_board::types::{Square, NUM_CELLS};

#[test]
fn test_every_cell_has_exactly_one_classification() {
    let grid = generate_board();
    let mut seen = 0;
    for row in 0..NUM_CELLS {
        for col in 0..NUM_CELLS {
            assert!(grid.get(col, row).is_some(), "({}, {}) missing", col, row);
            seen += 1;
        }
    }
    assert_eq!(seen, 225);

    let total: usize = Square::ALL.iter().map(|&sq| grid.count(sq)).sum();
    assert_eq!(total, 225);
}

#[test]
fn test_special_tables_are_pairwise_disjoint() {
    for (i, (a, coords_a)) in STANDARD.iter().enumerate() {
        for (b, coords_b) in STANDARD.iter().skip(i + 1) {
            for c in coords_a.iter() {
                assert!(!coords_b.contains(c), "{:?} in both {:?} and {:?}", c, a, b);
            }
        }
    }
    assert!(TRIPLE_WORD.contains(&(0, 0)));
    assert!(!DOUBLE_WORD.contains(&(0, 0)));
    assert!(!TRIPLE_LETTER.contains(&(0, 0)));
    assert!(!DOUBLE_LETTER.contains(&(0, 0)));
}

#[test]
fn test_known_placements() {
    let grid = generate_board();
    assert_eq!(grid.get(0, 0), Some(Square::TripleWord));
    assert_eq!(grid.get(7, 7), Some(Square::DoubleWord));
    assert_eq!(grid.get(1, 5), Some(Square::TripleLetter));
    assert_eq!(grid.get(0, 3), Some(Square::DoubleLetter));
    assert_eq!(grid.get(0, 1), Some(Square::Default));
    assert_eq!(grid.get(14, 14), Some(Square::TripleWord));
    assert_eq!(grid.get(7, 0), Some(Square::TripleWord));
}

#[test]
fn test_unlisted_coordinates_are_default() {
    let grid = generate_board();
    for (col, row, sq) in grid.iter() {
        let listed = STANDARD
            .iter()
            .find(|(_, coords)| coords.contains(&(col, row)))
            .map(|(sq, _)| *sq);
        assert_eq!(sq, listed.unwrap_or(Square::Default), "({}, {})", col, row);
    }
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(generate_board(), generate_board());
}

#[test]
fn test_custom_table_builds_grid() {
    let table = SpecialSquareTable::new([
        (Square::DoubleWord, (7, 7)),
        (Square::TripleLetter, (0, 14)),
    ])
    .unwrap();
    let grid = scrabble_board::core::Grid::from_table(&table);
    assert_eq!(grid.get(7, 7), Some(Square::DoubleWord));
    assert_eq!(grid.get(0, 14), Some(Square::TripleLetter));
    assert_eq!(grid.get(0, 0), Some(Square::Default));
    assert_eq!(grid.count(Square::Default), 223);
}

#[test]
fn test_custom_table_overlap_is_rejected() {
    let err = SpecialSquareTable::new([
        (Square::TripleWord, (7, 7)),
        (Square::DoubleWord, (7, 7)),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        LayoutError::Overlap {
            col: 7,
            row: 7,
            first: Square::TripleWord,
            second: Square::DoubleWord,
        }
    );
}
