//! Spec codec - text lines ⇄ [`Board`]
//!
//! A spec is a list of lines, two per board row plus one trailing cap line:
//!
//! ```text
//! ------    north walls of row 0   ('-' = wall, ' ' = open)
//! |  |      west walls of row 0    ('|' = wall, ' ' = open)
//!  -- -     north walls of row 1
//! | |       west walls of row 1
//! ------    south boundary of the last row
//! ```
//!
//! The east wall of the last column is implied by the grid boundary.

use std::fmt;

use crate::board::Board;
use crate::types::{Direction, Location};

/// Marker for a horizontal (north/south) wall.
pub const NORTH_WALL: char = '-';

/// Marker for a vertical (east/west) wall.
pub const WEST_WALL: char = '|';

/// Marker for an open side.
pub const OPEN: char = ' ';

/// Known-good 5x6 maze used as the default board.
pub const SAMPLE_SPEC: [&str; 11] = [
    "------",
    "|  |  ",
    " -- - ",
    "| |   ",
    "   -- ",
    "|   | ",
    "-- -  ",
    "|  |  ",
    "  - --",
    "| |   ",
    "------",
];

/// Structural failure while decoding a spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecError {
    /// Line lengths disagree. Between groups, `north` and `west` are the two group lengths;
    /// within one group, `north` is the first line's length and `west` the offending one.
    LengthMismatch { north: usize, west: usize },
    /// No complete (north, west) line pair, or zero-width lines.
    Empty,
}

impl SpecError {
    pub fn code(self) -> &'static str {
        match self {
            SpecError::LengthMismatch { .. } => "length_mismatch",
            SpecError::Empty => "empty_spec",
        }
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::LengthMismatch { north, west } => write!(
                f,
                "spec line length mismatch: expected length {}, found length {}",
                north, west
            ),
            SpecError::Empty => write!(f, "spec has no complete row"),
        }
    }
}

impl std::error::Error for SpecError {}

/// Decode spec lines into a board with the given id.
///
/// Lines are taken pairwise as (north, west); a dangling unpaired line is ignored.
pub fn spec_to_board<S: AsRef<str>>(id: &str, spec: &[S]) -> Result<Board, SpecError> {
    let pairs: Vec<(Vec<char>, Vec<char>)> = spec
        .chunks_exact(2)
        .map(|pair| {
            (
                pair[0].as_ref().chars().collect(),
                pair[1].as_ref().chars().collect(),
            )
        })
        .collect();

    let Some((first_north, first_west)) = pairs.first() else {
        return Err(SpecError::Empty);
    };
    let cols = first_north.len();

    for (north, _) in &pairs {
        if north.len() != cols {
            return Err(SpecError::LengthMismatch {
                north: cols,
                west: north.len(),
            });
        }
    }
    for (_, west) in &pairs {
        if west.len() != first_west.len() {
            return Err(SpecError::LengthMismatch {
                north: first_west.len(),
                west: west.len(),
            });
        }
    }
    if first_west.len() != cols {
        return Err(SpecError::LengthMismatch {
            north: cols,
            west: first_west.len(),
        });
    }
    if cols == 0 {
        return Err(SpecError::Empty);
    }

    let mut board = Board::new(id, pairs.len(), cols);
    for (row, (north, west)) in pairs.iter().enumerate() {
        for col in 0..cols {
            let location = Location::new(row as i32, col as i32);
            apply_marker(&mut board, location, Direction::North, north[col] == NORTH_WALL);
            apply_marker(&mut board, location, Direction::West, west[col] == WEST_WALL);
        }
    }

    Ok(board)
}

/// Decode a spec, substituting a 1x1 empty board when it is malformed.
pub fn spec_to_board_or_minimal<S: AsRef<str>>(id: &str, spec: &[S]) -> Board {
    match spec_to_board(id, spec) {
        Ok(board) => board,
        Err(err) => {
            log::warn!("board {}: {}; using a 1x1 board", id, err);
            Board::new(id, 1, 1)
        }
    }
}

/// Encode a board as spec lines.
pub fn board_to_spec(board: &Board) -> Vec<String> {
    let mut lines = Vec::with_capacity(board.rows() * 2 + 1);
    for row in board.cells().chunks(board.cols()) {
        lines.push(
            row.iter()
                .map(|cell| if cell.walls.north { NORTH_WALL } else { OPEN })
                .collect(),
        );
        lines.push(
            row.iter()
                .map(|cell| if cell.walls.west { WEST_WALL } else { OPEN })
                .collect(),
        );
    }
    lines.push(std::iter::repeat(NORTH_WALL).take(board.cols()).collect());
    lines
}

/// The board described by [`SAMPLE_SPEC`].
pub fn sample_board(id: &str) -> Board {
    spec_to_board_or_minimal(id, &SAMPLE_SPEC)
}

// Writes the marker onto the cell and, for interior edges, its neighbour. Boundary edges
// keep whatever the spec says so encode(decode(s)) reproduces `s` exactly.
fn apply_marker(board: &mut Board, location: Location, side: Direction, present: bool) {
    if !board.set_wall(location, side, present) {
        if let Some(cell) = board.get_cell(location) {
            let mut cell = cell.clone();
            cell.walls.set(side, present);
            board.set_cell(location, cell);
        }
    }
}
