//! Board module - manages the maze grid
//!
//! The board is a `rows x cols` grid of cells, each with four wall flags and a list of
//! occupying players. Cells are stored in one flat row-major vector sized at construction.
//! Coordinates: (row, col), row grows downward, col grows rightward, origin top-left.
//!
//! Neighbouring cells each carry their own copy of the wall between them. The two copies
//! must always agree; [`Board::set_wall`] is the only mutation path that writes walls and it
//! always writes both sides of the edge.

use crate::types::{Direction, Location, Walls, DEFAULT_BOARD_ID, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// A player standing somewhere in a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub board_id: String,
    pub name: String,
    pub location: Location,
    pub direction: Direction,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        board_id: impl Into<String>,
        name: impl Into<String>,
        location: Location,
        direction: Direction,
    ) -> Self {
        Self {
            id: id.into(),
            board_id: board_id.into(),
            name: name.into(),
            location,
            direction,
        }
    }

    pub fn with_location(&self, location: Location) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_direction(&self, direction: Direction) -> Self {
        Self {
            direction,
            ..self.clone()
        }
    }
}

/// One grid square: its walls and the players standing in it (insertion order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub location: Location,
    pub walls: Walls,
    pub occupants: Vec<Player>,
}

impl Cell {
    /// An open cell with no occupants.
    pub fn new(location: Location) -> Self {
        Self {
            location,
            walls: Walls::none(),
            occupants: Vec::new(),
        }
    }

    pub fn has_wall(&self, side: Direction) -> bool {
        self.walls.get(side)
    }

    pub fn occupant(&self, player_id: &str) -> Option<&Player> {
        self.occupants.iter().find(|p| p.id == player_id)
    }
}

/// The maze grid - `rows x cols` cells using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    id: String,
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board whose boundary cells are walled on their outward sides and whose
    /// interior walls are all open.
    ///
    /// Dimensions below 1 are raised to 1. The playable `[MIN_BOARD_SIZE, MAX_BOARD_SIZE]`
    /// range is enforced by [`Board::resized`], not here, so any well-formed spec decodes.
    pub fn new(id: impl Into<String>, rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let mut cell = Cell::new(Location::new(row as i32, col as i32));
                cell.walls = Walls {
                    north: row == 0,
                    south: row == rows - 1,
                    west: col == 0,
                    east: col == cols - 1,
                };
                cells.push(cell);
            }
        }

        Self {
            id: id.into(),
            rows,
            cols,
            cells,
        }
    }

    /// Empty board carrying the placeholder id.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self::new(DEFAULT_BOARD_ID, rows, cols)
    }

    /// Calculate flat index from a location
    #[inline(always)]
    fn index(&self, location: Location) -> Option<usize> {
        if location.row < 0
            || location.col < 0
            || location.row as usize >= self.rows
            || location.col as usize >= self.cols
        {
            return None;
        }
        Some((location.row as usize) * self.cols + (location.col as usize))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, location: Location) -> bool {
        self.index(location).is_some()
    }

    /// Get the cell at `location`. Returns None if out of bounds.
    pub fn get_cell(&self, location: Location) -> Option<&Cell> {
        self.index(location).map(|idx| &self.cells[idx])
    }

    /// Replace the cell at `location`. Returns false (board unchanged) if out of bounds.
    ///
    /// The stored cell's `location` is rewritten to `location`. This writes the cell's walls
    /// verbatim without touching its neighbours, so the caller owns the shared-wall invariant.
    pub fn set_cell(&mut self, location: Location, mut cell: Cell) -> bool {
        match self.index(location) {
            Some(idx) => {
                cell.location = location;
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True when the edge on `side` of `location` is on the outer boundary of the grid.
    pub fn is_boundary(&self, location: Location, side: Direction) -> bool {
        self.contains(location) && !self.contains(location.step(side))
    }

    /// Set the wall on `side` of `location` and the mirrored wall of the neighbour across it.
    ///
    /// Boundary edges are always walled: asking to open one is refused. Returns false when
    /// nothing was written (out of bounds, or a refused boundary edge).
    pub fn set_wall(&mut self, location: Location, side: Direction, present: bool) -> bool {
        let Some(idx) = self.index(location) else {
            return false;
        };

        match self.index(location.step(side)) {
            Some(neighbor) => {
                self.cells[idx].walls.set(side, present);
                self.cells[neighbor].walls.set(side.opposite(), present);
                true
            }
            None if present => {
                self.cells[idx].walls.set(side, true);
                true
            }
            None => false,
        }
    }

    /// Flip the wall on `side` of `location` (and its mirror).
    pub fn toggle_wall(&mut self, location: Location, side: Direction) -> bool {
        let Some(current) = self.get_cell(location).map(|c| c.has_wall(side)) else {
            return false;
        };
        self.set_wall(location, side, !current)
    }

    /// Insert `player` into the occupants of the cell at `player.location`.
    ///
    /// An occupant with the same id is replaced in place. Returns false if the location
    /// is out of bounds.
    pub fn add_player(&mut self, player: &Player) -> bool {
        let Some(idx) = self.index(player.location) else {
            return false;
        };

        let occupants = &mut self.cells[idx].occupants;
        match occupants.iter_mut().find(|p| p.id == player.id) {
            Some(existing) => *existing = player.clone(),
            None => occupants.push(player.clone()),
        }
        true
    }

    /// Remove the occupant matching `player.id` from the cell at `player.location`.
    ///
    /// Returns false if the cell or the player is absent.
    pub fn remove_player(&mut self, player: &Player) -> bool {
        let Some(idx) = self.index(player.location) else {
            return false;
        };

        let occupants = &mut self.cells[idx].occupants;
        match occupants.iter().position(|p| p.id == player.id) {
            Some(pos) => {
                occupants.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Move a player's occupancy record from `old` to `new`.
    pub fn update_player(&mut self, old: &Player, new: &Player) -> bool {
        self.remove_player(old);
        self.add_player(new)
    }

    /// Check whether a unit step `delta` out of `location` is open.
    ///
    /// False for anything but a unit step, for a destination outside the grid, and when the
    /// wall on the matching side of `location` is present.
    pub fn can_move(&self, location: Location, delta: (i32, i32)) -> bool {
        let Some(side) = Direction::from_delta(delta) else {
            return false;
        };
        if !self.contains(location) || !self.contains(location.offset(delta)) {
            return false;
        }
        self.get_cell(location)
            .map(|cell| !cell.has_wall(side))
            .unwrap_or(false)
    }

    /// All players on the board, row-major, in occupant order within a cell.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.cells.iter().flat_map(|cell| cell.occupants.iter())
    }

    pub fn find_player(&self, player_id: &str) -> Option<&Player> {
        self.players().find(|p| p.id == player_id)
    }

    /// Nearest in-bounds location to `location`.
    pub fn clamp_location(&self, location: Location) -> Location {
        Location::new(
            location.row.clamp(0, self.rows as i32 - 1),
            location.col.clamp(0, self.cols as i32 - 1),
        )
    }

    /// Build a copy of this board resized to `rows x cols`, each clamped to
    /// `[MIN_BOARD_SIZE, MAX_BOARD_SIZE]`.
    ///
    /// Walls of coordinates present in both grids are carried over through [`Board::set_wall`],
    /// so boundary edges of the new size stay walled and walls facing new rows/columns are
    /// mirrored into the new cells. Players are re-added with their locations clamped.
    pub fn resized(&self, rows: usize, cols: usize) -> Board {
        let rows = rows.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        let cols = cols.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        let mut next = Board::new(self.id.clone(), rows, cols);

        for row in 0..self.rows.min(rows) {
            for col in 0..self.cols.min(cols) {
                let location = Location::new(row as i32, col as i32);
                let walls = self.cells[row * self.cols + col].walls;
                for side in Direction::ALL {
                    if !next.is_boundary(location, side) {
                        next.set_wall(location, side, walls.get(side));
                    }
                }
            }
        }

        for player in self.players() {
            let clamped = next.clamp_location(player.location);
            if clamped != player.location {
                log::debug!(
                    "resize {}: player {} clamped from {:?} to {:?}",
                    self.id,
                    player.id,
                    player.location,
                    clamped
                );
            }
            next.add_player(&player.with_location(clamped));
        }

        next
    }

    /// Shared-wall invariant: both sides of every interior edge agree.
    pub fn is_consistent(&self) -> bool {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = &self.cells[row * self.cols + col];
                if row + 1 < self.rows && cell.walls.south != self.cells[(row + 1) * self.cols + col].walls.north {
                    return false;
                }
                if col + 1 < self.cols && cell.walls.east != self.cells[row * self.cols + col + 1].walls.west {
                    return false;
                }
            }
        }
        true
    }

    /// Every outward-facing wall of the grid is present.
    pub fn has_boundary_walls(&self) -> bool {
        self.cells.iter().all(|cell| {
            Direction::ALL
                .iter()
                .all(|&side| !self.is_boundary(cell.location, side) || cell.has_wall(side))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(MIN_BOARD_SIZE, MIN_BOARD_SIZE)
    }
}
