//! Key classification shared by every screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Terminal key predicates.
pub struct EventHandler;

impl EventHandler {
    /// Whether the event is a press or repeat. Releases are ignored.
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind != KeyEventKind::Release
    }

    /// Ctrl+C or Ctrl+Q.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c' | 'q'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    #[must_use]
    pub fn is_back_event(key: &KeyEvent) -> bool {
        key.code == KeyCode::Esc
    }

    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        key.code == KeyCode::Enter
    }

    /// F5 or Ctrl+R.
    #[must_use]
    pub fn is_refresh_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::F(5),
                ..
            } | KeyEvent {
                code: KeyCode::Char('r'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_quit_events() {
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn test_typing_is_not_quit() {
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_refresh_events() {
        assert!(EventHandler::is_refresh_event(&make_key_event(
            KeyCode::F(5),
            KeyModifiers::NONE
        )));
        assert!(EventHandler::is_refresh_event(&make_key_event(
            KeyCode::Char('r'),
            KeyModifiers::CONTROL
        )));
        assert!(!EventHandler::is_refresh_event(&make_key_event(
            KeyCode::Char('r'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_release_ignored() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert!(!EventHandler::is_press(&release));
        assert!(EventHandler::is_submit_event(&release));
    }
}
