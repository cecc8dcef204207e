use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::snake::Direction;

pub const PAUSE_KEY: char = 'k';

/// Logical keys the game reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    TogglePause,
    /// Any other key. Starts the game if it is paused.
    Other,
    Quit,
}

/// `None` for events that are not a key press (repeats, releases).
pub fn classify(ev: &KeyEvent) -> Option<KeyAction> {
    if ev.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_c(ev) {
        return Some(KeyAction::Quit);
    }

    let action = match ev.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Direction::Up),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            KeyAction::Steer(Direction::Right)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            KeyAction::Steer(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            KeyAction::Steer(Direction::Left)
        }
        KeyCode::Char(PAUSE_KEY) | KeyCode::Esc => KeyAction::TogglePause,
        _ => KeyAction::Other,
    };

    Some(action)
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(classify(&press(KeyCode::Up)), Some(KeyAction::Steer(Direction::Up)));
        assert_eq!(classify(&press(KeyCode::Right)), Some(KeyAction::Steer(Direction::Right)));
        assert_eq!(classify(&press(KeyCode::Down)), Some(KeyAction::Steer(Direction::Down)));
        assert_eq!(classify(&press(KeyCode::Left)), Some(KeyAction::Steer(Direction::Left)));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(classify(&press(KeyCode::Char('w'))), Some(KeyAction::Steer(Direction::Up)));
        assert_eq!(classify(&press(KeyCode::Char('A'))), Some(KeyAction::Steer(Direction::Left)));
    }

    #[test]
    fn test_pause_keys() {
        assert_eq!(classify(&press(KeyCode::Char('k'))), Some(KeyAction::TogglePause));
        assert_eq!(classify(&press(KeyCode::Esc)), Some(KeyAction::TogglePause));
    }

    #[test]
    fn test_other_and_quit() {
        assert_eq!(classify(&press(KeyCode::Char('x'))), Some(KeyAction::Other));
        assert_eq!(classify(&press(KeyCode::Enter)), Some(KeyAction::Other));
        // Plain 'c' is just another key
        assert_eq!(classify(&press(KeyCode::Char('c'))), Some(KeyAction::Other));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(classify(&ctrl_c), Some(KeyAction::Quit));
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(classify(&release), None);
    }
}
