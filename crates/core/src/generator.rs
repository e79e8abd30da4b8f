//! Maze generation using randomized Kruskal with a union-find.
//!
//! Every interior wall starts closed. Interior edges are shuffled and each edge is opened
//! when the two cells it separates are not yet connected. The result is a perfect maze:
//! every cell is reachable and there are no loops.

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::types::{Direction, Location, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Disjoint-set forest over flat cell indices.
#[derive(Debug, Clone)]
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            // Path halving.
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    /// Returns true if the sets were merged, false if already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

/// Generate a perfect maze of `rows x cols` (each clamped to the playable range).
pub fn generate(id: &str, rows: usize, cols: usize, seed: u32) -> Board {
    let rows = rows.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
    let cols = cols.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
    let mut board = Board::new(id, rows, cols);

    // Each interior edge once, named by the cell on its north/west side.
    let mut edges: Vec<(Location, Direction)> = Vec::with_capacity(2 * rows * cols);
    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            let location = Location::new(row, col);
            for side in [Direction::South, Direction::East] {
                if !board.is_boundary(location, side) {
                    board.set_wall(location, side, true);
                    edges.push((location, side));
                }
            }
        }
    }

    let mut rng = SimpleRng::new(seed);
    rng.shuffle(&mut edges);

    let index = |loc: Location| loc.row as usize * cols + loc.col as usize;
    let mut sets = UnionFind::new(rows * cols);
    let mut opened = 0usize;
    for (location, side) in edges {
        if sets.union(index(location), index(location.step(side))) {
            board.set_wall(location, side, false);
            opened += 1;
            if opened + 1 == rows * cols {
                break;
            }
        }
    }

    log::debug!("generated {}x{} maze {} (seed {})", rows, cols, id, seed);
    board
}
