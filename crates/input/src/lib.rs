//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework beyond `crossterm` key
//! events. It maps them into [`crate::types::MazeAction`]; what an action does to the board
//! is decided by the caller.

pub mod map;

pub use tui_maze_types as types;

pub use map::{map_key, should_quit};
