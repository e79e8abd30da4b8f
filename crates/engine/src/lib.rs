//! Rendering engine (presentation-agnostic).
//!
//! Turns a board and a player into first-person corridor geometry. Output is plain data
//! (depths, flags, line segments) so any front end can draw it; the terminal view lives in
//! `tui-maze-term`.

pub mod perspective;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use perspective::{
    compute_render_cells, corridor_segments, delta_n, DepthTable, Point, RenderCell, RenderCells,
    Ring, Segment, SegmentKind,
};
