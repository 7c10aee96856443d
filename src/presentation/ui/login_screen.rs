//! Login screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::screen::{Screen, ScreenAction};
use super::utils::centered_box;
use crate::application::LoginRequest;
use crate::application::controllers::{Controller, Effect, FetchOutcome, LoginController};
use crate::application::fetch::FetchRunner;
use crate::application::navigation::Route;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Form, FormAction, KeyHint, TextInput};

const NICKNAME: usize = 0;
const PASSWORD: usize = 1;

const HINTS: &[KeyHint] = &[
    KeyHint::new("Tab", "Próximo campo"),
    KeyHint::new("Enter", "Entrar"),
    KeyHint::new("F3", "Criar conta"),
    KeyHint::new("Esc", "Voltar"),
];

/// Login screen UI.
pub struct LoginScreen {
    form: Form,
    controller: LoginController,
}

impl LoginScreen {
    /// Creates new login screen.
    #[must_use]
    pub fn new() -> Self {
        let form = Form::new(vec![
            TextInput::new("Apelido").placeholder("Digite seu apelido"),
            TextInput::new("Senha")
                .password()
                .placeholder("Digite sua senha"),
        ]);

        Self {
            form,
            controller: LoginController::new(),
        }
    }

    /// Returns the typed request.
    #[must_use]
    pub fn request(&self) -> LoginRequest {
        LoginRequest::new(self.form.value(NICKNAME), self.form.value(PASSWORD))
    }

    fn status_line(&self, theme: &Theme) -> Line<'_> {
        if self.controller.is_submitting() {
            Line::from(Span::styled(
                "Entrando...",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else if let Some(error) = self.controller.error() {
            Line::from(Span::styled(error, theme.error_style))
        } else {
            Line::from(Span::styled(
                "Não tem conta? Pressione F3",
                theme.dimmed_style,
            ))
        }
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for LoginScreen {
    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        self.controller.apply(outcome)
    }

    fn handle_key(&mut self, key: KeyEvent, runner: &FetchRunner) -> ScreenAction {
        if key.code == KeyCode::F(3) {
            return ScreenAction::Navigate(Route::Register);
        }

        match self.form.handle_key(key) {
            FormAction::Consumed => ScreenAction::None,
            FormAction::Ignored => ScreenAction::Ignored,
            FormAction::Submit => {
                ScreenAction::from_submission(self.controller.submit(runner, self.request()))
            }
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let card = centered_box(52, self.form.height() + 5, area);
        Clear.render(card, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Login ");
        let inner = block.inner(card);
        block.render(card, buf);

        let [title, form, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(self.form.height()),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new("Acesse sua conta").render(title, buf);
        (&self.form).render(form, buf);
        Paragraph::new(self.status_line(theme)).render(status, buf);
    }

    fn key_hints(&self) -> &'static [KeyHint] {
        HINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::controllers::testing::anonymous_runner;
    use crate::application::notice::NoticeLevel;
    use crate::domain::ports::mocks::MockBankApiPort;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut LoginScreen, runner: &FetchRunner, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)), runner);
        }
    }

    #[test]
    fn test_typing_fills_fields() {
        let runner = anonymous_runner(MockBankApiPort::new());
        let mut screen = LoginScreen::new();

        type_text(&mut screen, &runner, "ana");
        screen.handle_key(key(KeyCode::Tab), &runner);
        type_text(&mut screen, &runner, "segredo");

        let request = screen.request();
        assert_eq!(request.nickname, "ana");
        assert_eq!(request.password.as_str(), "segredo");
    }

    #[test]
    fn test_blank_submit_warns() {
        let runner = anonymous_runner(MockBankApiPort::new());
        let mut screen = LoginScreen::new();

        screen.handle_key(key(KeyCode::Enter), &runner);
        let action = screen.handle_key(key(KeyCode::Enter), &runner);

        assert!(matches!(
            action,
            ScreenAction::Notify(notice) if notice.level == NoticeLevel::Warning
        ));
    }

    #[test]
    fn test_filled_submit_spawns_login() {
        let runner = anonymous_runner(MockBankApiPort::new());
        let mut screen = LoginScreen::new();

        type_text(&mut screen, &runner, "ana");
        screen.handle_key(key(KeyCode::Enter), &runner);
        type_text(&mut screen, &runner, "x");
        let action = screen.handle_key(key(KeyCode::Enter), &runner);

        assert!(matches!(action, ScreenAction::Spawn(fetches) if fetches.len() == 1));
    }

    #[test]
    fn test_f3_opens_register() {
        let runner = anonymous_runner(MockBankApiPort::new());
        let mut screen = LoginScreen::new();

        let action = screen.handle_key(key(KeyCode::F(3)), &runner);
        assert!(matches!(action, ScreenAction::Navigate(Route::Register)));
    }
}
