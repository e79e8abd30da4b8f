//! MazeView: maps a board and the local player into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: a bordered first-person pane on the left (square in "units", each unit being one
//! row tall and two columns wide), then a minimap and a status panel on the right when the
//! terminal is wide enough.

use crate::core::{Board, Player};
use crate::engine::{corridor_segments, DepthTable, Point, SegmentKind};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, Location};

/// Smallest first-person pane side (in rows) worth drawing.
const MIN_PANE_SIDE: u16 = 6;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the first-person pane landed, in framebuffer cells (border included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

pub struct MazeView {
    /// Terminal columns per horizontal unit of the first-person pane.
    unit_w: u16,
    show_minimap: bool,
}

impl Default for MazeView {
    fn default() -> Self {
        // 2 columns per row compensates for typical terminal glyph aspect ratio.
        Self {
            unit_w: 2,
            show_minimap: true,
        }
    }
}

impl MazeView {
    pub fn new(unit_w: u16) -> Self {
        Self {
            unit_w: unit_w.max(1),
            show_minimap: true,
        }
    }

    pub fn with_minimap(mut self, show: bool) -> Self {
        self.show_minimap = show;
        self
    }

    /// Size and position of the first-person pane for `viewport`, or None if it won't fit.
    pub fn pane_rect(&self, viewport: Viewport) -> Option<PaneRect> {
        let side = viewport
            .height
            .saturating_sub(2)
            .min(viewport.width.saturating_sub(2) / self.unit_w);
        if side < MIN_PANE_SIDE {
            return None;
        }
        Some(PaneRect {
            x: 0,
            y: 0,
            w: side * self.unit_w + 2,
            h: side + 2,
        })
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, board: &Board, player: &Player, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let Some(pane) = self.pane_rect(viewport) else {
            fb.put_str(0, 0, "TERMINAL TOO SMALL", label_style());
            return;
        };

        draw_border(fb, pane.x, pane.y, pane.w, pane.h, border_style());
        self.draw_corridor(fb, board, player, pane);

        if self.show_minimap {
            let panel_x = pane.x + pane.w + 2;
            let bottom = self.draw_minimap(fb, board, player, panel_x, pane.y);
            draw_status(fb, board, player, panel_x, bottom.saturating_add(1));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, player: &Player, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, player, viewport, &mut fb);
        fb
    }

    fn draw_corridor(&self, fb: &mut FrameBuffer, board: &Board, player: &Player, pane: PaneRect) {
        let side = (pane.h - 2) as f64;
        let inner_w = (pane.w - 2) as f64;
        let inner_h = side;

        // Map square-viewport units onto the inner pane, inclusive of its last row/column.
        let to_cell = |p: Point| -> (i32, i32) {
            let x = pane.x as f64 + 1.0 + (p.x / side) * (inner_w - 1.0);
            let y = pane.y as f64 + 1.0 + (p.y / side) * (inner_h - 1.0);
            (x.round() as i32, y.round() as i32)
        };

        let table = DepthTable::new(side);
        for cell in table.render_cells(player.location, player.direction, board) {
            for seg in corridor_segments(&cell, side) {
                let style = match seg.kind {
                    SegmentKind::Edge => wall_style(cell.step),
                    SegmentKind::Cap => cap_style(),
                    SegmentKind::Opening => opening_style(),
                };
                let (x0, y0) = to_cell(seg.from);
                let (x1, y1) = to_cell(seg.to);
                fb.draw_line(x0, y0, x1, y1, style);
            }
        }
    }

    /// Draw the minimap at (x, y); returns the row just below it.
    fn draw_minimap(&self, fb: &mut FrameBuffer, board: &Board, player: &Player, x: u16, y: u16) -> u16 {
        let (Some(map_w), Some(map_h)) = (minimap_extent(board.cols()), minimap_extent(board.rows()))
        else {
            return y;
        };
        if x.saturating_add(map_w) > fb.width() || y.saturating_add(map_h) > fb.height() {
            return y;
        }

        let walls = border_style();
        let corner = CellStyle { dim: true, ..walls };
        for cell in board.cells() {
            let cx = x + cell.location.col as u16 * 2;
            let cy = y + cell.location.row as u16 * 2;
            fb.put_char(cx, cy, '·', corner);
            fb.put_char(cx + 2, cy, '·', corner);
            fb.put_char(cx, cy + 2, '·', corner);
            fb.put_char(cx + 2, cy + 2, '·', corner);
            if cell.walls.north {
                fb.put_char(cx + 1, cy, '─', walls);
            }
            if cell.walls.south {
                fb.put_char(cx + 1, cy + 2, '─', walls);
            }
            if cell.walls.west {
                fb.put_char(cx, cy + 1, '│', walls);
            }
            if cell.walls.east {
                fb.put_char(cx + 2, cy + 1, '│', walls);
            }
            if cell.occupants.iter().any(|p| p.id != player.id) {
                fb.put_char(cx + 1, cy + 1, '@', other_player_style());
            }
        }

        if board.contains(player.location) {
            let Location { row, col } = player.location;
            fb.put_char(
                x + col as u16 * 2 + 1,
                y + row as u16 * 2 + 1,
                facing_glyph(player.direction),
                player_style(),
            );
        }

        y + map_h
    }
}

fn draw_status(fb: &mut FrameBuffer, board: &Board, player: &Player, x: u16, y: u16) {
    let label = label_style();
    let value = CellStyle::fg(Rgb::new(200, 200, 200));

    fb.put_str(x, y, "BOARD", label);
    fb.put_str(x + 6, y, board.id(), value);

    let y = y.saturating_add(1);
    fb.put_str(x, y, "SIZE", label);
    let used = fb.put_u32(x + 6, y, board.rows() as u32, value);
    fb.put_char(x + 6 + used, y, 'x', value);
    fb.put_u32(x + 7 + used, y, board.cols() as u32, value);

    let y = y.saturating_add(1);
    fb.put_str(x, y, "POS", label);
    let used = fb.put_u32(x + 6, y, player.location.row.max(0) as u32, value);
    fb.put_char(x + 6 + used, y, ',', value);
    fb.put_u32(x + 7 + used, y, player.location.col.max(0) as u32, value);

    let y = y.saturating_add(1);
    fb.put_str(x, y, "FACING", label);
    fb.put_str(x + 7, y, player.direction.as_str(), value);

    let y = y.saturating_add(2);
    let hint = CellStyle { dim: true, ..value };
    fb.put_str(x, y, "arrows walk  t wall", hint);
    fb.put_str(x, y.saturating_add(1), "+/- size  g new  q quit", hint);
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Minimap side in cells for `n` rows or columns; `None` when it exceeds `u16`.
fn minimap_extent(n: usize) -> Option<u16> {
    u16::try_from(n).ok()?.checked_mul(2)?.checked_add(1)
}

pub fn facing_glyph(direction: Direction) -> char {
    match direction {
        Direction::North => '^',
        Direction::East => '>',
        Direction::South => 'v',
        Direction::West => '<',
    }
}

fn border_style() -> CellStyle {
    CellStyle::fg(Rgb::new(200, 200, 200))
}

fn label_style() -> CellStyle {
    CellStyle {
        bold: true,
        ..CellStyle::fg(Rgb::new(220, 220, 220))
    }
}

/// Walls fade with distance.
fn wall_style(step: usize) -> CellStyle {
    let fade = (step.min(10) as u8) * 14;
    CellStyle::fg(Rgb::new(120, 220 - fade, 240 - fade))
}

fn cap_style() -> CellStyle {
    CellStyle {
        bold: true,
        ..CellStyle::fg(Rgb::new(240, 200, 90))
    }
}

fn opening_style() -> CellStyle {
    CellStyle {
        dim: true,
        ..CellStyle::fg(Rgb::new(140, 140, 160))
    }
}

fn player_style() -> CellStyle {
    CellStyle {
        bold: true,
        ..CellStyle::fg(Rgb::new(240, 200, 90))
    }
}

fn other_player_style() -> CellStyle {
    CellStyle::fg(Rgb::new(220, 100, 100))
}
