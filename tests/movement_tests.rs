use tui_maze::core::{move_player, Board, Player};
use tui_maze::types::{Direction, Location, MoveCommand};

fn place(board: &mut Board, row: i32, col: i32, direction: Direction) -> Player {
    let player = Player::new("p", board.id(), "P", Location::new(row, col), direction);
    board.add_player(&player);
    player
}

#[test]
fn forward_moves_until_the_boundary() {
    let mut board = Board::new("open", 3, 3);
    let player = place(&mut board, 1, 1, Direction::North);

    let moved = move_player(MoveCommand::Forward, &player, &mut board);
    assert_eq!(moved.location, Location::new(0, 1));

    let blocked = move_player(MoveCommand::Forward, &moved, &mut board);
    assert_eq!(blocked, moved);
    assert_eq!(
        board.get_cell(Location::new(0, 1)).unwrap().occupant("p"),
        Some(&moved)
    );
}

#[test]
fn backward_steps_against_facing() {
    let mut board = Board::new("open", 3, 3);
    let player = place(&mut board, 1, 1, Direction::East);

    let moved = move_player(MoveCommand::Backward, &player, &mut board);
    assert_eq!(moved.location, Location::new(1, 0));
    assert_eq!(moved.direction, Direction::East);
}

#[test]
fn turns_keep_location_and_update_occupant() {
    let mut board = Board::new("open", 3, 3);
    let player = place(&mut board, 2, 2, Direction::North);

    let left = move_player(MoveCommand::TurnLeft, &player, &mut board);
    assert_eq!(left.direction, Direction::West);
    assert_eq!(left.location, player.location);

    let back = move_player(MoveCommand::TurnRight, &left, &mut board);
    assert_eq!(back.direction, Direction::North);
    assert_eq!(
        board.get_cell(Location::new(2, 2)).unwrap().occupant("p"),
        Some(&back)
    );
    assert_eq!(board.players().count(), 1);
}

#[test]
fn interior_wall_blocks_both_ways() {
    let mut board = Board::new("walled", 3, 3);
    board.set_wall(Location::new(1, 1), Direction::East, true);

    let west = place(&mut board, 1, 1, Direction::East);
    assert_eq!(move_player(MoveCommand::Forward, &west, &mut board), west);

    let mut board = Board::new("walled", 3, 3);
    board.set_wall(Location::new(1, 1), Direction::East, true);
    let east = place(&mut board, 1, 2, Direction::West);
    assert_eq!(move_player(MoveCommand::Forward, &east, &mut board), east);
}

#[test]
fn walk_a_loop_returns_home() {
    let mut board = Board::new("open", 3, 3);
    let mut player = place(&mut board, 0, 0, Direction::East);

    for command in [
        MoveCommand::Forward,
        MoveCommand::TurnRight,
        MoveCommand::Forward,
        MoveCommand::TurnRight,
        MoveCommand::Forward,
        MoveCommand::TurnRight,
        MoveCommand::Forward,
        MoveCommand::TurnRight,
    ] {
        player = move_player(command, &player, &mut board);
    }

    assert_eq!(player.location, Location::new(0, 0));
    assert_eq!(player.direction, Direction::East);
    assert_eq!(board.players().count(), 1);
}
