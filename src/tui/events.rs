//! TUI event handling with crossterm.
//!
//! # Overview
//!
//! Key presses are translated into [`Action`]s:
//! - Any printable character: typed into the guess field (non-digits are
//!   dropped by the field itself, never rejected here)
//! - Backspace: delete the last character
//! - Enter: Check
//! - Ctrl+R or F5: Reset
//! - Esc, Ctrl+C or Ctrl+Q: Quit
//!
//! Key releases and repeats reported by some terminals are ignored.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;

use super::app::Action;

/// Error type for event polling.
#[derive(Debug, Error)]
pub enum EventError {
    /// Reading from the terminal failed.
    #[error("failed to read terminal event: {0}")]
    Io(#[from] std::io::Error),
}

/// Polls crossterm for key events and maps them to actions.
#[derive(Debug, Default, Clone, Copy)]
pub struct EventHandler;

impl EventHandler {
    /// Create a new event handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Wait up to `timeout` for an event and translate it.
    ///
    /// Returns `Ok(None)` on timeout or for events that map to no action.
    pub fn poll(&self, timeout: Duration) -> Result<Option<Action>, EventError> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(key_to_action(&key)),
            _ => Ok(None),
        }
    }
}

/// Translate one key event into an action.
#[must_use]
pub fn key_to_action(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'q') if ctrl => Some(Action::Quit),
        KeyCode::Char('r') if ctrl => Some(Action::Reset),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Action::Input(c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Enter => Some(Action::Check),
        KeyCode::F(5) => Some(Action::Reset),
        KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_characters_are_input() {
        assert_eq!(key_to_action(&press(KeyCode::Char('7'))), Some(Action::Input('7')));
        assert_eq!(key_to_action(&press(KeyCode::Char('x'))), Some(Action::Input('x')));
        assert_eq!(key_to_action(&press(KeyCode::Char('q'))), Some(Action::Input('q')));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(key_to_action(&press(KeyCode::Enter)), Some(Action::Check));
        assert_eq!(key_to_action(&press(KeyCode::Backspace)), Some(Action::Backspace));
        assert_eq!(key_to_action(&press(KeyCode::F(5))), Some(Action::Reset));
        assert_eq!(key_to_action(&ctrl('r')), Some(Action::Reset));
        assert_eq!(key_to_action(&press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(key_to_action(&ctrl('c')), Some(Action::Quit));
        assert_eq!(key_to_action(&ctrl('q')), Some(Action::Quit));
        assert_eq!(key_to_action(&ctrl('x')), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_action(&key), None);
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(key_to_action(&press(KeyCode::Tab)), None);
        assert_eq!(key_to_action(&press(KeyCode::Up)), None);
    }
}
