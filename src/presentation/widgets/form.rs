//! Vertical stack of text inputs with keyboard focus.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use super::TextInput;

/// Height of one bordered input.
pub const FIELD_HEIGHT: u16 = 3;

/// Result of a key press inside a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Key was used for editing or focus movement.
    Consumed,
    /// Enter on the last field.
    Submit,
    /// Key means nothing to the form.
    Ignored,
}

/// Inputs navigated with Tab/Shift+Tab/arrows; Enter advances, then submits.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<TextInput>,
    focus: usize,
}

impl Form {
    #[must_use]
    pub fn new(mut fields: Vec<TextInput>) -> Self {
        if let Some(first) = fields.first_mut() {
            first.set_focused(true);
        }
        Self { fields, focus: 0 }
    }

    #[must_use]
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", TextInput::value)
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.set_value(value);
        }
    }

    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total rows needed to draw every field.
    #[must_use]
    pub fn height(&self) -> u16 {
        u16::try_from(self.fields.len())
            .unwrap_or(u16::MAX)
            .saturating_mul(FIELD_HEIGHT)
    }

    fn set_focus(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.set_focused(false);
        }
        self.focus = index;
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.set_focused(true);
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.set_focus((self.focus + 1) % self.fields.len());
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            let len = self.fields.len();
            self.set_focus((self.focus + len - 1) % len);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                FormAction::Consumed
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_previous();
                FormAction::Consumed
            }
            KeyCode::Enter if self.focus + 1 < self.fields.len() => {
                self.focus_next();
                FormAction::Consumed
            }
            KeyCode::Enter => FormAction::Submit,
            _ => {
                let consumed = self
                    .fields
                    .get_mut(self.focus)
                    .is_some_and(|field| field.handle_key(key));
                if consumed {
                    FormAction::Consumed
                } else {
                    FormAction::Ignored
                }
            }
        }
    }
}

impl Widget for &Form {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical(
            self.fields
                .iter()
                .map(|_| Constraint::Length(FIELD_HEIGHT)),
        )
        .split(area);

        for (field, row) in self.fields.iter().zip(rows.iter()) {
            field.render(*row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn login_form() -> Form {
        Form::new(vec![TextInput::new("Apelido"), TextInput::new("Senha").password()])
    }

    #[test]
    fn test_enter_advances_then_submits() {
        let mut form = login_form();

        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormAction::Consumed);
        assert_eq!(form.focus(), 1);
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormAction::Submit);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = login_form();
        form.handle_key(key(KeyCode::Char('a')));
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Char('x')));

        assert_eq!(form.value(0), "a");
        assert_eq!(form.value(1), "x");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = login_form();
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus(), 1);
        form.handle_key(key(KeyCode::Down));
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn test_esc_ignored() {
        let mut form = login_form();
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormAction::Ignored);
    }

    #[test]
    fn test_field_edit_reports_consumed() {
        let mut form = login_form();

        assert_eq!(form.handle_key(key(KeyCode::Char('a'))), FormAction::Consumed);
        assert_eq!(form.handle_key(key(KeyCode::Backspace)), FormAction::Consumed);
        assert_eq!(form.handle_key(key(KeyCode::F(7))), FormAction::Ignored);
        assert_eq!(form.value(0), "");
    }
}
