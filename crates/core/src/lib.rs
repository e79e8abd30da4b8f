//! Core maze logic module - pure, deterministic, and testable
//!
//! This crate holds the maze data model and every rule that mutates it. It has no
//! dependencies on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same generated maze
//! - **Testable**: Every operation is a plain function of its inputs
//! - **Portable**: Usable from the terminal runner, a server, or tests alike
//!
//! # Module Structure
//!
//! - [`board`]: grid of cells with mirrored walls, player occupancy, and resize
//! - [`spec`]: text-line serialization of a board's walls
//! - [`movement`]: one-step move/turn resolution for a player
//! - [`generator`]: randomized Kruskal maze generation
//! - [`rng`]: small seeded LCG used by the generator
//! - [`session`]: applies terminal actions to one player on one board
//!
//! # Shared Walls
//!
//! Two neighbouring cells each store the wall between them. Both copies always agree:
//! [`Board::set_wall`] writes both, and it is the only way walls change after construction
//! (apart from [`Board::set_cell`], which leaves the invariant to the caller).
//!
//! # Example
//!
//! ```
//! use tui_maze_core::{board_to_spec, move_player, spec_to_board, Board, Player};
//! use tui_maze_types::{Direction, Location, MoveCommand};
//!
//! let mut board = Board::new("demo", 3, 3);
//! let player = Player::new("p1", "demo", "Ada", Location::new(1, 1), Direction::North);
//! board.add_player(&player);
//!
//! let moved = move_player(MoveCommand::Forward, &player, &mut board);
//! assert_eq!(moved.location, Location::new(0, 1));
//!
//! // Walls survive a trip through the text format.
//! let spec = board_to_spec(&board);
//! let decoded = spec_to_board("demo", &spec).unwrap();
//! assert_eq!(decoded.get_cell(Location::new(0, 1)).unwrap().walls, board.get_cell(Location::new(0, 1)).unwrap().walls);
//! ```

pub mod board;
pub mod generator;
pub mod movement;
pub mod rng;
pub mod session;
pub mod spec;

pub use tui_maze_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player};
pub use generator::generate;
pub use movement::move_player;
pub use rng::SimpleRng;
pub use session::{Outcome, Session};
pub use spec::{
    board_to_spec, sample_board, spec_to_board, spec_to_board_or_minimal, SpecError, SAMPLE_SPEC,
};
