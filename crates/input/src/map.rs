//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Press and auto-repeat both produce an action; releases produce nothing.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::SoftDrop)
        }

        // Rotation
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Some(GameAction::RotateCcw)
        }
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(GameAction::RotateCw),

        _ => None,
    }
}

/// Check if key should quit the game.
///
/// `q` is taken by rotation, so quitting is Esc or Ctrl+C.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::SoftDrop)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(GameAction::MoveRight)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('q'))),
            Some(GameAction::RotateCcw)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameAction::RotateCw)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::RotateCw)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('Z'))),
            Some(GameAction::RotateCcw)
        );
    }

    #[test]
    fn test_repeat_maps_and_release_does_not() {
        let repeat = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(repeat), Some(GameAction::MoveLeft));

        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..repeat
        };
        assert_eq!(handle_key_event(release), None);
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
    }
}
