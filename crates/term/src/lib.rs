//! Terminal front end for the maze.
//!
//! Renders into a plain framebuffer first and only then flushes to the terminal, so the
//! view logic stays testable without a tty. Horizontal units are two columns wide to keep
//! the first-person pane roughly square.

pub mod fb;
pub mod maze_view;
pub mod renderer;

pub use tui_maze_core as core;
pub use tui_maze_engine as engine;
pub use tui_maze_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use maze_view::{facing_glyph, MazeView, PaneRect, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
