//! Key mapping from terminal events to maze actions.

use crate::types::{MazeAction, MoveCommand};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to maze actions.
pub fn map_key(key: KeyEvent) -> Option<MazeAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(MazeAction::Move(MoveCommand::Forward))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(MazeAction::Move(MoveCommand::Backward))
        }

        // Turning
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(MazeAction::Move(MoveCommand::TurnLeft))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(MazeAction::Move(MoveCommand::TurnRight))
        }

        // Editing
        KeyCode::Char('t') | KeyCode::Char('T') => Some(MazeAction::ToggleWallAhead),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(MazeAction::Grow),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(MazeAction::Shrink),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(MazeAction::Regenerate),

        _ => None,
    }
}

/// Check if key should quit the maze.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(MazeAction::Move(MoveCommand::Forward))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(MazeAction::Move(MoveCommand::Backward))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('W'))),
            Some(MazeAction::Move(MoveCommand::Forward))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('j'))),
            Some(MazeAction::Move(MoveCommand::Backward))
        );
    }

    #[test]
    fn test_turn_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(MazeAction::Move(MoveCommand::TurnLeft))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('d'))),
            Some(MazeAction::Move(MoveCommand::TurnRight))
        );
    }

    #[test]
    fn test_edit_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('t'))),
            Some(MazeAction::ToggleWallAhead)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('+'))), Some(MazeAction::Grow));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('-'))), Some(MazeAction::Shrink));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('g'))),
            Some(MazeAction::Regenerate)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_control_chords_are_not_actions() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
