use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Intent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Intent(Intent),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Intent(Intent::Direction(Direction::Up)),
            KeyCode::Down => KeyAction::Intent(Intent::Direction(Direction::Down)),
            KeyCode::Left => KeyAction::Intent(Intent::Direction(Direction::Left)),
            KeyCode::Right => KeyAction::Intent(Intent::Direction(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::Intent(Intent::Direction(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::Intent(Intent::Direction(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Intent(Intent::Direction(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Intent(Intent::Direction(Direction::Right))
            }

            // Session controls
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
                KeyAction::Intent(Intent::PauseToggle)
            }
            KeyCode::Enter => KeyAction::Intent(Intent::Confirm),
            KeyCode::Esc => KeyAction::Intent(Intent::Cancel),

            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_arrows_and_wasd_map_to_directions() {
        let handler = InputHandler::new();
        let cases = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('w'), Direction::Up),
            (KeyCode::Char('s'), Direction::Down),
            (KeyCode::Char('a'), Direction::Left),
            (KeyCode::Char('d'), Direction::Right),
            (KeyCode::Char('W'), Direction::Up),
        ];
        for (code, dir) in cases {
            assert_eq!(
                handler.handle_key_event(key(code)),
                KeyAction::Intent(Intent::Direction(dir))
            );
        }
    }

    #[test]
    fn test_session_controls() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('p'))),
            KeyAction::Intent(Intent::PauseToggle)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char(' '))),
            KeyAction::Intent(Intent::PauseToggle)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Enter)),
            KeyAction::Intent(Intent::Confirm)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Esc)),
            KeyAction::Intent(Intent::Cancel)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key_event(key(KeyCode::Char('q'))), KeyAction::Quit);

        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_unbound_key_is_none() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key_event(key(KeyCode::Char('x'))), KeyAction::None);
    }
}
