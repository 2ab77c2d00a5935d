//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::Input;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an input to the calculator
    Press(Input),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Key that toggles the sign of the current number
    pub const NEGATE_KEY: char = '~';

    /// Creates a new input handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(Self::NEGATE_KEY) => KeyAction::Press(Input::Negate),
            KeyCode::Char(c) => Input::from_key_char(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(Input::Evaluate),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(Input::Clear),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for (d, c) in ('0'..='9').enumerate() {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Press(Input::Digit(d as u8))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for op in Operation::ALL {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(op.symbol()))),
                KeyAction::Press(Input::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_control_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Press(Input::Decimal)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Press(Input::Evaluate)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Press(Input::Evaluate)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::Press(Input::Clear)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Delete)),
            KeyAction::Press(Input::Clear)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('~'))),
            KeyAction::Press(Input::Negate)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_ignored_keys() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::Char('a'),
            KeyCode::Char('q'),
            KeyCode::Char('('),
            KeyCode::Char(' '),
            KeyCode::Backspace,
            KeyCode::Left,
            KeyCode::Up,
            KeyCode::Tab,
            KeyCode::F(1),
        ] {
            assert_eq!(handler.handle_key(key_event(code)), KeyAction::None, "{code:?}");
        }
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = InputHandler::new();
        let event = KeyEvent::new_with_kind(
            KeyCode::Char('5'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }

    #[test]
    fn test_shifted_symbols() {
        let handler = InputHandler::new();
        let event = KeyEvent::new(KeyCode::Char('*'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key(event),
            KeyAction::Press(Input::Operator(Operation::Multiply))
        );
    }
}
