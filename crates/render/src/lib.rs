//! Board renderer module.
//!
//! Paints the 15x15 board onto anything implementing [`Surface`]. The renderer is
//! stateless: every call clears the surface and repaints all 225 cells from a
//! freshly generated layout, so two calls with the same pointer produce the same
//! output.
//!
//! Backends:
//! - [`PixelCanvas`]: in-memory RGBA raster (headless snapshots, pixel tests)
//! - the terminal crate's `TermSurface`: character cells in a framebuffer

pub mod board_view;
pub mod canvas;
pub mod geometry;
mod glyphs;
pub mod surface;

pub use scrabble_board_core as core;
pub use scrabble_board_types as types;

pub use board_view::BoardView;
pub use canvas::PixelCanvas;
pub use geometry::{cell_origin, cell_rect, hovered_cell, is_hovered, Point, Rect};
pub use surface::Surface;
