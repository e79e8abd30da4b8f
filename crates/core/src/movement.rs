//! Movement resolver - applies one [`MoveCommand`] to a player on a board.

use crate::board::{Board, Player};
use crate::types::MoveCommand;

/// Resolve `command` for `player`, updating the board's occupancy when anything changes.
///
/// Returns the resulting player. When the command is blocked by a wall the returned player
/// equals `player` and the board is left untouched, so callers can skip persistence by
/// comparing the two.
pub fn move_player(command: MoveCommand, player: &Player, board: &mut Board) -> Player {
    let next = match command {
        MoveCommand::Forward | MoveCommand::Backward => {
            let heading = if command == MoveCommand::Forward {
                player.direction
            } else {
                player.direction.opposite()
            };
            let delta = heading.delta();
            if !board.can_move(player.location, delta) {
                return player.clone();
            }
            player.with_location(player.location.offset(delta))
        }
        MoveCommand::TurnLeft => player.with_direction(player.direction.turn_left()),
        MoveCommand::TurnRight => player.with_direction(player.direction.turn_right()),
    };

    board.update_player(player, &next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, Location};

    fn setup() -> (Board, Player) {
        let mut board = Board::new("b", 3, 3);
        let player = Player::new("p", "b", "P", Location::new(1, 1), Direction::East);
        board.add_player(&player);
        (board, player)
    }

    #[test]
    fn backward_keeps_facing() {
        let (mut board, player) = setup();
        let moved = move_player(MoveCommand::Backward, &player, &mut board);
        assert_eq!(moved.location, Location::new(1, 0));
        assert_eq!(moved.direction, Direction::East);
        assert!(board.get_cell(Location::new(1, 0)).unwrap().occupant("p").is_some());
    }

    #[test]
    fn turning_updates_occupant_record() {
        let (mut board, player) = setup();
        let turned = move_player(MoveCommand::TurnLeft, &player, &mut board);
        assert_eq!(turned.direction, Direction::North);
        assert_eq!(turned.location, player.location);
        let stored = board.get_cell(player.location).unwrap().occupant("p").unwrap();
        assert_eq!(stored.direction, Direction::North);
    }

    #[test]
    fn blocked_move_leaves_everything_equal() {
        let (mut board, player) = setup();
        board.set_wall(player.location, Direction::East, true);
        let before = board.clone();

        let result = move_player(MoveCommand::Forward, &player, &mut board);
        assert_eq!(result, player);
        assert_eq!(board, before);
    }
}
