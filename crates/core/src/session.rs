//! Session - one local player walking (and editing) one board.

use crate::board::{Board, Player};
use crate::generator::generate;
use crate::movement::move_player;
use crate::rng::SimpleRng;
use crate::types::{MazeAction, MoveCommand};

/// What an action touched; callers persist only the parts that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Walls or dimensions changed.
    pub board_changed: bool,
    /// Location or facing changed.
    pub player_changed: bool,
}

impl Outcome {
    pub fn any(&self) -> bool {
        self.board_changed || self.player_changed
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    player: Player,
    rng: SimpleRng,
}

impl Session {
    /// Place `player` on `board`, clamping its location into bounds.
    pub fn new(mut board: Board, player: &Player, seed: u32) -> Self {
        let player = player.with_location(board.clamp_location(player.location));
        board.add_player(&player);
        Self {
            board,
            player,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn apply(&mut self, action: MazeAction) -> Outcome {
        match action {
            MazeAction::Move(command) => self.apply_move(command),
            MazeAction::ToggleWallAhead => {
                let (location, direction) = (self.player.location, self.player.direction);
                if self.board.is_boundary(location, direction) {
                    return Outcome::default();
                }
                Outcome {
                    board_changed: self.board.toggle_wall(location, direction),
                    player_changed: false,
                }
            }
            MazeAction::Grow => self.resize_by(1),
            MazeAction::Shrink => self.resize_by(-1),
            MazeAction::Regenerate => {
                let seed = self.rng.next_u32();
                let mut board = generate(self.board.id(), self.board.rows(), self.board.cols(), seed);
                let player = self
                    .player
                    .with_location(board.clamp_location(self.player.location));
                board.add_player(&player);
                log::debug!("regenerated {} with seed {}", board.id(), seed);
                self.replace(board, player)
            }
        }
    }

    fn apply_move(&mut self, command: MoveCommand) -> Outcome {
        let next = move_player(command, &self.player, &mut self.board);
        let changed = next != self.player;
        self.player = next;
        Outcome {
            board_changed: false,
            player_changed: changed,
        }
    }

    fn resize_by(&mut self, step: isize) -> Outcome {
        let rows = self.board.rows().saturating_add_signed(step);
        let cols = self.board.cols().saturating_add_signed(step);
        let board = self.board.resized(rows, cols);
        if board.rows() == self.board.rows() && board.cols() == self.board.cols() {
            return Outcome::default();
        }

        let player = board
            .find_player(&self.player.id)
            .cloned()
            .unwrap_or_else(|| self.player.clone());
        self.replace(board, player)
    }

    fn replace(&mut self, board: Board, player: Player) -> Outcome {
        let outcome = Outcome {
            board_changed: true,
            player_changed: player != self.player,
        };
        self.board = board;
        self.player = player;
        outcome
    }
}
