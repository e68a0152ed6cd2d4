//! Terminal input module (host-facing).
//!
//! This module is intentionally independent of the renderer. It maps `crossterm`
//! mouse events into surface-local [`crate::types::PointerPosition`]s and decides
//! which keys end the session.

pub mod map;

pub use scrabble_board_types as types;

pub use map::{map_mouse_event, should_quit, PointerInput};
