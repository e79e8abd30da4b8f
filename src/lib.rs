//! TUI Maze (workspace facade crate).
//!
//! Re-exports `tui_maze::{core,adapter,term,input,engine,types}` so the binary, integration
//! tests and benches share one import path while the implementation lives in dedicated
//! crates under `crates/`.

pub use tui_maze_adapter as adapter;
pub use tui_maze_core as core;
pub use tui_maze_engine as engine;
pub use tui_maze_input as input;
pub use tui_maze_term as term;
pub use tui_maze_types as types;
