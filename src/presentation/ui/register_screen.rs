//! Account registration screen.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use zeroize::Zeroizing;

use super::screen::{Screen, ScreenAction};
use super::utils::centered_box;
use crate::application::controllers::{Controller, Effect, FetchOutcome, RegisterController};
use crate::application::dto::RegisterForm;
use crate::application::fetch::FetchRunner;
use crate::domain::masks;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Form, FormAction, KeyHint, TextInput};

const NAME: usize = 0;
const CPF: usize = 1;
const NICKNAME: usize = 2;
const PASSWORD: usize = 3;
const CONFIRMATION: usize = 4;

const HINTS: &[KeyHint] = &[
    KeyHint::new("Tab", "Próximo campo"),
    KeyHint::new("Enter", "Cadastrar"),
    KeyHint::new("Esc", "Voltar"),
];

pub struct RegisterScreen {
    form: Form,
    controller: RegisterController,
}

impl RegisterScreen {
    /// `confirm_password` adds the password confirmation field.
    #[must_use]
    pub fn new(confirm_password: bool) -> Self {
        let mut fields = vec![
            TextInput::new("Nome").placeholder("Nome completo"),
            TextInput::new("CPF")
                .placeholder("000.000.000-00")
                .with_mask(masks::format_cpf),
            TextInput::new("Apelido").placeholder("Como quer ser chamado"),
            TextInput::new("Senha").password(),
        ];
        if confirm_password {
            fields.push(TextInput::new("Confirmar senha").password());
        }

        Self {
            form: Form::new(fields),
            controller: RegisterController::new(confirm_password),
        }
    }

    /// Returns the typed form.
    #[must_use]
    pub fn values(&self) -> RegisterForm {
        RegisterForm {
            name: self.form.value(NAME).to_string(),
            cpf: self.form.value(CPF).to_string(),
            nickname: self.form.value(NICKNAME).to_string(),
            password: Zeroizing::new(self.form.value(PASSWORD).to_string()),
            confirmation: self
                .controller
                .confirm_password()
                .then(|| Zeroizing::new(self.form.value(CONFIRMATION).to_string())),
        }
    }
}

impl Screen for RegisterScreen {
    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        self.controller.apply(outcome)
    }

    fn handle_key(&mut self, key: KeyEvent, runner: &FetchRunner) -> ScreenAction {
        match self.form.handle_key(key) {
            FormAction::Consumed => ScreenAction::None,
            FormAction::Ignored => ScreenAction::Ignored,
            FormAction::Submit => {
                let values = self.values();
                ScreenAction::from_submission(self.controller.submit(runner, values))
            }
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let card = centered_box(56, self.form.height() + 5, area);
        Clear.render(card, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Criar conta ");
        let inner = block.inner(card);
        block.render(card, buf);

        let [title, form, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(self.form.height()),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new("Preencha seus dados").render(title, buf);
        (&self.form).render(form, buf);

        if self.controller.is_submitting() {
            Paragraph::new(Line::from(Span::styled(
                "Cadastrando...",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::ITALIC),
            )))
            .render(status, buf);
        }
    }

    fn key_hints(&self) -> &'static [KeyHint] {
        HINTS
    }
}
