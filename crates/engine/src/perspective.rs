//! Perspective corridor renderer.
//!
//! Walks forward from a player's cell and describes each step as a [`RenderCell`]: how far
//! it is inset toward the vanishing point and which walls/openings flank it. The geometry of
//! one step is a "ring" of line segments ([`corridor_segments`]) in a square viewport.
//!
//! Depth of step `n` for a viewport of `size`:
//!
//! ```text
//! delta_n(size, n) = size * sqrt(((k^1 + ... + k^n) * c)^2 / 2)
//! c                = F * sqrt(2) / (k^1 + ... + k^N)
//! ```
//!
//! with `k = PERSPECTIVE_DECAY`, `N = PERSPECTIVE_LOOKAHEAD`, `F = VANISHING_POINT_FRACTION`,
//! so `delta_n(size, N) == F * size`.

use arrayvec::ArrayVec;

use crate::core::{Board, Player};
use crate::types::{
    Direction, Location, PERSPECTIVE_DECAY, PERSPECTIVE_LOOKAHEAD, VANISHING_POINT_FRACTION,
};

/// Upper bound on segments in one ring (two sides of four, plus a four-sided cap).
pub const MAX_RING_SEGMENTS: usize = 12;

/// Render cells for one view, nearest first. Never longer than the lookahead.
pub type RenderCells = ArrayVec<RenderCell, PERSPECTIVE_LOOKAHEAD>;

/// Segments of one corridor ring.
pub type Ring = ArrayVec<Segment, MAX_RING_SEGMENTS>;

fn geometric_sum(n: usize) -> f64 {
    (1..=n).map(|i| PERSPECTIVE_DECAY.powi(i as i32)).sum()
}

/// Scale that pins step `N` to the vanishing point.
fn normalizer() -> f64 {
    VANISHING_POINT_FRACTION * std::f64::consts::SQRT_2 / geometric_sum(PERSPECTIVE_LOOKAHEAD)
}

/// Inset of corridor step `n` on each side of a `size x size` viewport.
pub fn delta_n(size: f64, n: usize) -> f64 {
    let scaled = geometric_sum(n) * normalizer();
    size * (scaled * scaled / 2.0).sqrt()
}

/// `delta_n` precomputed for steps `1..=N` of one viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthTable {
    size: f64,
    depths: [f64; PERSPECTIVE_LOOKAHEAD],
}

impl DepthTable {
    pub fn new(size: f64) -> Self {
        let mut depths = [0.0; PERSPECTIVE_LOOKAHEAD];
        for (i, depth) in depths.iter_mut().enumerate() {
            *depth = delta_n(size, i + 1);
        }
        Self { size, depths }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Depth of 1-based step `n`, or None past the lookahead.
    pub fn depth(&self, n: usize) -> Option<f64> {
        n.checked_sub(1).and_then(|i| self.depths.get(i)).copied()
    }

    pub fn depths(&self) -> &[f64] {
        &self.depths
    }

    /// Walk the corridor from `start` looking `facing`.
    ///
    /// Stops after the first step with a wall ahead, at the lookahead bound, or when the
    /// walk leaves the grid.
    pub fn render_cells(&self, start: Location, facing: Direction, board: &Board) -> RenderCells {
        let left = facing.turn_left();
        let right = facing.turn_right();

        let mut cells = RenderCells::new();
        let mut location = start;
        let mut last_depth = 0.0;

        for (i, &depth) in self.depths.iter().enumerate() {
            let Some(cell) = board.get_cell(location) else {
                break;
            };

            let left_wall = cell.has_wall(left);
            let right_wall = cell.has_wall(right);
            let terminal = cell.has_wall(facing);

            cells.push(RenderCell {
                step: i + 1,
                last_depth,
                depth,
                left_wall,
                right_wall,
                left_opening: left_wall && recedes(board, location.step(left), facing),
                right_opening: right_wall && recedes(board, location.step(right), facing),
                terminal,
            });

            if terminal {
                break;
            }
            location = location.step(facing);
            last_depth = depth;
        }

        cells
    }
}

// A side cell "recedes" when nothing blocks it further forward.
fn recedes(board: &Board, side_cell: Location, facing: Direction) -> bool {
    board
        .get_cell(side_cell)
        .map(|cell| !cell.has_wall(facing))
        .unwrap_or(false)
}

/// Walk the corridor in front of `player` for a viewport `size` wide.
pub fn compute_render_cells(size: f64, player: &Player, board: &Board) -> RenderCells {
    DepthTable::new(size).render_cells(player.location, player.direction, board)
}

/// One forward step of the corridor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCell {
    /// 1-based distance from the viewer
    pub step: usize,
    /// Inset of the near edge (depth of the previous step, 0 for the first)
    pub last_depth: f64,
    /// Inset of the far edge
    pub depth: f64,
    pub left_wall: bool,
    pub right_wall: bool,
    /// Left wall present but the cell beyond it recedes forward
    pub left_opening: bool,
    pub right_opening: bool,
    /// Wall ahead; the walk ends here
    pub terminal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Corner or edge of a wall
    Edge,
    /// Front wall closing the corridor
    Cap,
    /// Connector where a side passage recedes behind a wall
    Opening,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub kind: SegmentKind,
}

impl Segment {
    const fn new(x0: f64, y0: f64, x1: f64, y1: f64, kind: SegmentKind) -> Self {
        Self {
            from: Point::new(x0, y0),
            to: Point::new(x1, y1),
            kind,
        }
    }

    fn mirrored(self, size: f64) -> Self {
        Self {
            from: Point::new(size - self.from.x, self.from.y),
            to: Point::new(size - self.to.x, self.to.y),
            kind: self.kind,
        }
    }
}

/// Line segments for one corridor step in a `size x size` viewport, origin top-left.
pub fn corridor_segments(cell: &RenderCell, size: f64) -> Ring {
    let mut ring = Ring::new();

    for seg in side_segments(cell.last_depth, cell.depth, size, cell.left_wall, cell.left_opening) {
        ring.push(seg);
    }
    for seg in side_segments(cell.last_depth, cell.depth, size, cell.right_wall, cell.right_opening) {
        ring.push(seg.mirrored(size));
    }

    if cell.terminal {
        let (b, f) = (cell.depth, size - cell.depth);
        ring.push(Segment::new(b, b, f, b, SegmentKind::Cap));
        ring.push(Segment::new(f, b, f, f, SegmentKind::Cap));
        ring.push(Segment::new(f, f, b, f, SegmentKind::Cap));
        ring.push(Segment::new(b, f, b, b, SegmentKind::Cap));
    }

    ring
}

// Left-hand side of a ring between near inset `a` and far inset `b`.
fn side_segments(a: f64, b: f64, size: f64, wall: bool, opening: bool) -> ArrayVec<Segment, 4> {
    use SegmentKind::{Edge, Opening};

    let mut out = ArrayVec::new();
    if wall {
        out.push(Segment::new(a, a, b, b, Edge));
        out.push(Segment::new(a, size - a, b, size - b, Edge));
        let far = if opening { Opening } else { Edge };
        out.push(Segment::new(b, b, b, size - b, far));
    } else {
        // Face of the side passage, seen square-on.
        out.push(Segment::new(a, b, b, b, Edge));
        out.push(Segment::new(a, size - b, b, size - b, Edge));
        out.push(Segment::new(a, a, a, size - a, Edge));
        out.push(Segment::new(b, b, b, size - b, Edge));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn last_step_lands_on_vanishing_point() {
        let size = 200.0;
        let d = delta_n(size, PERSPECTIVE_LOOKAHEAD);
        assert!((d - VANISHING_POINT_FRACTION * size).abs() < EPS);
    }

    #[test]
    fn depths_increase_and_converge() {
        let table = DepthTable::new(100.0);
        let depths = table.depths();
        for pair in depths.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        // Each gap is smaller than the previous one.
        for triple in depths.windows(3) {
            assert!(triple[2] - triple[1] < triple[1] - triple[0]);
        }
        assert!(depths[0] > 0.0);
    }

    #[test]
    fn table_matches_formula() {
        let table = DepthTable::new(64.0);
        for n in 1..=PERSPECTIVE_LOOKAHEAD {
            assert_eq!(table.depth(n), Some(delta_n(64.0, n)));
        }
        assert_eq!(table.depth(0), None);
        assert_eq!(table.depth(PERSPECTIVE_LOOKAHEAD + 1), None);
    }

    #[test]
    fn side_opening_needs_near_wall_and_receding_neighbor() {
        // 3 rows x 3 cols. Player at (2,1) facing north.
        let mut board = Board::new("o", 3, 3);
        // Close the near wall on the left; the cell beyond, (2,0), has no north wall.
        board.set_wall(Location::new(2, 1), Direction::West, true);
        // Close the near wall on the right and block (2,2) going north.
        board.set_wall(Location::new(2, 1), Direction::East, true);
        board.set_wall(Location::new(2, 2), Direction::North, true);

        let cells = DepthTable::new(90.0).render_cells(Location::new(2, 1), Direction::North, &board);
        let first = cells[0];
        assert!(first.left_wall && first.left_opening);
        assert!(first.right_wall && !first.right_opening);

        // Second step (1,1): no side walls at all, so no opening indicators.
        let second = cells[1];
        assert!(!second.left_wall && !second.left_opening);
        assert_eq!(second.last_depth, first.depth);
    }

    #[test]
    fn lookahead_bounds_open_corridors() {
        let board = Board::new("long", 20, 1);
        let cells = DepthTable::new(80.0).render_cells(Location::new(19, 0), Direction::North, &board);
        assert_eq!(cells.len(), PERSPECTIVE_LOOKAHEAD);
        assert!(cells.iter().all(|c| !c.terminal));
    }

    #[test]
    fn walk_off_grid_stops_quietly() {
        let board = Board::new("b", 3, 3);
        let cells = DepthTable::new(80.0).render_cells(Location::new(9, 9), Direction::North, &board);
        assert!(cells.is_empty());
    }

    #[test]
    fn terminal_ring_has_cap_rectangle() {
        let cell = RenderCell {
            step: 1,
            last_depth: 0.0,
            depth: 10.0,
            left_wall: true,
            right_wall: true,
            left_opening: false,
            right_opening: true,
            terminal: true,
        };
        let ring = corridor_segments(&cell, 100.0);
        assert_eq!(ring.iter().filter(|s| s.kind == SegmentKind::Cap).count(), 4);
        assert_eq!(ring.iter().filter(|s| s.kind == SegmentKind::Opening).count(), 1);

        // The opening connector sits on the right far edge.
        let opening = ring.iter().find(|s| s.kind == SegmentKind::Opening).unwrap();
        assert_eq!(opening.from.x, 90.0);
        assert_eq!(opening.to.x, 90.0);
    }

    #[test]
    fn open_side_draws_passage_face() {
        let cell = RenderCell {
            step: 2,
            last_depth: 10.0,
            depth: 20.0,
            left_wall: false,
            right_wall: true,
            left_opening: false,
            right_opening: false,
            terminal: false,
        };
        let ring = corridor_segments(&cell, 100.0);
        assert_eq!(ring.len(), 4 + 3);
        assert!(ring.contains(&Segment::new(10.0, 20.0, 20.0, 20.0, SegmentKind::Edge)));
    }
}
