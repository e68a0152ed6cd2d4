//! Board layout module - pure, deterministic, and testable
//!
//! This module decides which premium classification every board coordinate has.
//! It has **zero dependencies** on rendering, terminals, or I/O, making it:
//!
//! - **Deterministic**: the standard board is literal data, validated at compile time
//! - **Testable**: every placement can be checked without a surface
//! - **Portable**: usable by the pixel canvas, the terminal backend, or headless tools
//!
//! # Module Structure
//!
//! - [`table`]: the special-square table (standard board plus validated custom tables)
//! - [`layout`]: the 15x15 [`Grid`] built from a table
//!
//! # Example
//!
//! ```
//! use scrabble_board_core::generate_board;
//! use scrabble_board_types::Square;
//!
//! let grid = generate_board();
//! assert_eq!(grid.get(0, 0), Some(Square::TripleWord));
//! assert_eq!(grid.get(7, 7), Some(Square::DoubleWord));
//! assert_eq!(grid.get(0, 1), Some(Square::Default));
//! ```

pub mod layout;
pub mod table;

pub use scrabble_board_types as types;

pub use layout::{generate_board, standard_grid, Grid};
pub use table::{Coord, LayoutError, Placement, SpecialSquareTable};
