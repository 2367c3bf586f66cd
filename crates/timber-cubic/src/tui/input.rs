//! Keyboard input handling
//!
//! Terminal keys are mapped onto the same commands the on-screen keypad
//! issues, so typing and clicking are interchangeable.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Field, KeyCommand};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad key
    Press(KeyCommand),
    /// Activate a field directly
    Select(Field),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('u') => KeyAction::Press(KeyCommand::Reset),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c @ '0'..='9') => KeyCommand::from_glyph(c)
                .map(KeyAction::Press)
                .unwrap_or(KeyAction::None),
            KeyCode::Char('l' | 'L') | KeyCode::Up => KeyAction::Select(Field::Length),
            KeyCode::Char('c' | 'C') | KeyCode::Down => KeyAction::Select(Field::Circumference),
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Backspace => KeyAction::Press(KeyCommand::Backspace),
            KeyCode::Enter | KeyCode::Tab | KeyCode::Right => KeyAction::Press(KeyCommand::Advance),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(KeyCommand::Reset),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_input_handler_new() {
        let handler = InputHandler::new();
        let _ = format!("{:?}", handler);
    }

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for d in 0..=9u8 {
            let c = char::from_digit(u32::from(d), 10).unwrap();
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Press(KeyCommand::Digit(d))
            );
        }
    }

    #[test]
    fn test_handle_backspace() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Press(KeyCommand::Backspace)
        );
    }

    #[test]
    fn test_handle_advance_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::Enter, KeyCode::Tab, KeyCode::Right] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                KeyAction::Press(KeyCommand::Advance)
            );
        }
    }

    #[test]
    fn test_handle_reset_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::Esc, KeyCode::Delete] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                KeyAction::Press(KeyCommand::Reset)
            );
        }
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('u'))),
            KeyAction::Press(KeyCommand::Reset)
        );
    }

    #[test]
    fn test_handle_field_selection() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('l'))),
            KeyAction::Select(Field::Length)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Up)),
            KeyAction::Select(Field::Length)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('c'))),
            KeyAction::Select(Field::Circumference)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Down)),
            KeyAction::Select(Field::Circumference)
        );
    }

    #[test]
    fn test_handle_quit() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_unknown() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_non_keypad_characters_ignored() {
        let handler = InputHandler::new();
        for c in ['.', '+', '-', 'a', ' '] {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::None,
                "{c:?}"
            );
        }
        assert_eq!(handler.handle_key(key_event(KeyCode::F(1))), KeyAction::None);
    }
}
