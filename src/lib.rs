//! Scrabble board (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the application
//! pieces that tie them together: configuration, logging, the interactive host
//! and headless snapshots.

pub use scrabble_board_core as core;
pub use scrabble_board_input as input;
pub use scrabble_board_render as render;
pub use scrabble_board_term as term;
pub use scrabble_board_types as types;

pub mod config;
pub mod host;
pub mod logging;
pub mod snapshot;
