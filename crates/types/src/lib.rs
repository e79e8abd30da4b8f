//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the maze.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board model, perspective renderer, terminal UI, wire records).
//!
//! # Coordinates
//!
//! A [`Location`] is a `(row, col)` pair. Rows grow downward, columns grow rightward,
//! and `(0, 0)` is the top-left cell. Coordinates are signed so an out-of-range lookup
//! (including a negative one) is representable and simply answers "absent".
//!
//! # Board Size
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_BOARD_SIZE` | 3 | Smallest rows/cols a resize produces |
//! | `MAX_BOARD_SIZE` | 20 | Largest rows/cols a resize produces |
//!
//! # Perspective
//!
//! The first-person corridor view insets each step forward by a geometric series that
//! converges on the vanishing point:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PERSPECTIVE_DECAY` | 0.75 | Ratio `k` of the geometric series |
//! | `PERSPECTIVE_LOOKAHEAD` | 10 | Maximum steps drawn (`N`) |
//! | `VANISHING_POINT_FRACTION` | 0.45 | Inset at step `N` as a fraction of the viewport |
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{Direction, Location, MoveCommand};
//!
//! let facing = Direction::from_str("n").unwrap();
//! assert_eq!(facing.turn_right(), Direction::East);
//!
//! let here = Location::new(1, 1);
//! assert_eq!(here.step(facing), Location::new(0, 1));
//!
//! assert_eq!(MoveCommand::from_str("turnLeft"), Some(MoveCommand::TurnLeft));
//! ```

/// Smallest row/column count a resize will produce.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest row/column count a resize will produce.
pub const MAX_BOARD_SIZE: usize = 20;

/// Placeholder id for boards built without a caller-supplied id.
pub const DEFAULT_BOARD_ID: &str = "default";

/// Geometric decay `k` of the per-step depth series (0 < k < 1).
pub const PERSPECTIVE_DECAY: f64 = 0.75;

/// Number of corridor steps drawn before the vanishing point (`N`).
pub const PERSPECTIVE_LOOKAHEAD: usize = 10;

/// Inset of step `N` as a fraction of the viewport size.
///
/// Must stay below 0.5 so the farthest ring keeps a positive width.
pub const VANISHING_POINT_FRACTION: f64 = 0.45;


/// Compass facing of a player, and the side of a cell a wall sits on.
///
/// Turning right cycles North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions in clockwise order starting at North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Rotate 90° clockwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::Direction;
    ///
    /// assert_eq!(Direction::North.turn_right(), Direction::East);
    /// assert_eq!(Direction::West.turn_right(), Direction::North);
    /// ```
    pub fn turn_right(&self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Rotate 90° counter-clockwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::Direction;
    ///
    /// assert_eq!(Direction::North.turn_left(), Direction::West);
    /// assert_eq!(Direction::East.turn_left(), Direction::North);
    /// ```
    pub fn turn_left(&self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Unit `(dr, dc)` step one cell in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// Inverse of [`Direction::delta`]; `None` unless exactly one component is ±1.
    pub fn from_delta(delta: (i32, i32)) -> Option<Self> {
        match delta {
            (-1, 0) => Some(Direction::North),
            (1, 0) => Some(Direction::South),
            (0, 1) => Some(Direction::East),
            (0, -1) => Some(Direction::West),
            _ => None,
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "east" | "e", "south" | "s", "west" | "w"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Direction::North),
            "east" | "e" => Some(Direction::East),
            "south" | "s" => Some(Direction::South),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

/// A `(row, col)` grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub row: i32,
    pub col: i32,
}

impl Location {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset by an arbitrary `(dr, dc)`, saturating at the `i32` range.
    pub fn offset(&self, delta: (i32, i32)) -> Self {
        Self {
            row: self.row.saturating_add(delta.0),
            col: self.col.saturating_add(delta.1),
        }
    }

    /// The neighbouring location one step in `dir`.
    pub fn step(&self, dir: Direction) -> Self {
        self.offset(dir.delta())
    }
}

/// Wall flags for the four sides of a cell (`true` = wall present).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Walls {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Walls {
    pub const fn none() -> Self {
        Self {
            north: false,
            south: false,
            east: false,
            west: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            north: true,
            south: true,
            east: true,
            west: true,
        }
    }

    pub fn get(&self, side: Direction) -> bool {
        match side {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, side: Direction, present: bool) {
        match side {
            Direction::North => self.north = present,
            Direction::South => self.south = present,
            Direction::East => self.east = present,
            Direction::West => self.west = present,
        }
    }
}

/// Single-step movement commands consumed by the movement resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveCommand {
    /// Step one cell in the facing direction
    Forward,
    /// Step one cell opposite the facing direction, keeping the facing
    Backward,
    /// Rotate 90° counter-clockwise in place
    TurnLeft,
    /// Rotate 90° clockwise in place
    TurnRight,
}

impl MoveCommand {
    /// Parse command from string (wire protocol names, case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::MoveCommand;
    ///
    /// assert_eq!(MoveCommand::from_str("moveForward"), Some(MoveCommand::Forward));
    /// assert_eq!(MoveCommand::from_str("TURNRIGHT"), Some(MoveCommand::TurnRight));
    /// assert_eq!(MoveCommand::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveforward" => Some(MoveCommand::Forward),
            "movebackward" => Some(MoveCommand::Backward),
            "turnleft" => Some(MoveCommand::TurnLeft),
            "turnright" => Some(MoveCommand::TurnRight),
            _ => None,
        }
    }

    /// Convert to camelCase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveCommand::Forward => "moveForward",
            MoveCommand::Backward => "moveBackward",
            MoveCommand::TurnLeft => "turnLeft",
            MoveCommand::TurnRight => "turnRight",
        }
    }
}

/// Everything the terminal front end can ask the maze to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeAction {
    Move(MoveCommand),
    /// Toggle the wall on the side of the player's cell they are facing
    ToggleWallAhead,
    /// Add one row and one column (up to `MAX_BOARD_SIZE`)
    Grow,
    /// Remove one row and one column (down to `MIN_BOARD_SIZE`)
    Shrink,
    /// Replace the walls with a freshly generated maze of the same size
    Regenerate,
}
