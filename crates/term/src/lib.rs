//! Terminal presentation of the board.
//!
//! The board renderer paints through the `Surface` trait; this crate provides a
//! surface backed by a character framebuffer and flushes that framebuffer to a
//! real terminal with crossterm.
//!
//! Goals:
//! - Keep the renderer deterministic and testable (the framebuffer is plain data)
//! - Only write the board, and only its changed runs between frames
//! - Coalesce pointer-driven repaints to at most one per frame

pub mod fb;
pub mod renderer;
pub mod repaint;
pub mod surface;

pub use scrabble_board_render as render;
pub use scrabble_board_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_changes, encode_redraw, TerminalRenderer};
pub use repaint::{RepaintRequest, RepaintScheduler};
pub use surface::{place_centered, surface_bounds, TermSurface, Viewport};
