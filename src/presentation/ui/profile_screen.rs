//! Profile view and profile edit screens.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::screen::{Screen, ScreenAction};
use super::utils::{cycle_option, field_line};
use crate::application::controllers::{
    Controller, Effect, FetchOutcome, PendingFetch, ProfileController, ProfileEditController,
};
use crate::application::dto::ProfileForm;
use crate::application::fetch::FetchRunner;
use crate::application::navigation::Route;
use crate::domain::entities::{AccountType, Profile};
use crate::domain::masks;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{BACK_HOME, Form, FormAction, KeyHint, TextInput, placeholder};

const VIEW_HINTS: &[KeyHint] = &[KeyHint::new("e", "Editar"), BACK_HOME];

const EDIT_HINTS: &[KeyHint] = &[
    KeyHint::new("Tab", "Próximo campo"),
    KeyHint::new("←/→", "Tipo de conta"),
    KeyHint::new("Enter", "Salvar"),
    KeyHint::new("Esc", "Voltar"),
];

const EMAIL: usize = 0;
const PHONE: usize = 1;
const BIRTH_DATE: usize = 2;
const ADDRESS: usize = 3;
const ACCOUNT_TYPE: usize = 4;

const NOT_INFORMED: &str = "Não informado";

fn or_missing(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_INFORMED.to_string()
    } else {
        value.to_string()
    }
}

fn bordered<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(title)
}

pub struct ProfileScreen {
    controller: ProfileController,
}

impl ProfileScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: ProfileController::new(),
        }
    }

    fn lines(profile: &Profile, theme: &Theme) -> Vec<Line<'static>> {
        let label = theme.dimmed_style;
        vec![
            Line::from(Span::styled(
                profile.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(format!("@{}", profile.nickname), theme.title_style)),
            Line::default(),
            field_line("Email", or_missing(&profile.email), label),
            field_line("CPF", masks::format_cpf(&profile.cpf), label),
            field_line("Telefone", or_missing(&masks::format_phone(&profile.phone)), label),
            field_line(
                "Data de nascimento",
                or_missing(&masks::to_display_date(&profile.birth_date)),
                label,
            ),
            field_line("Endereço", or_missing(&profile.address), label),
            field_line(
                "Tipo de conta",
                profile
                    .account_type
                    .as_ref()
                    .map_or_else(|| NOT_INFORMED.to_string(), ToString::to_string),
                label,
            ),
        ]
    }
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ProfileScreen {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        self.controller.mount(runner)
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        self.controller.apply(outcome)
    }

    fn handle_key(&mut self, key: KeyEvent, _runner: &FetchRunner) -> ScreenAction {
        match key.code {
            KeyCode::Char('e') => ScreenAction::Navigate(Route::ProfileEdit),
            _ => ScreenAction::Ignored,
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = bordered(" Perfil ", theme);
        let state = self.controller.state();

        match state.value() {
            Some(profile) => Paragraph::new(Self::lines(profile, theme))
                .block(block)
                .render(area, buf),
            None => {
                if let Some(paragraph) = placeholder(state, theme) {
                    paragraph.block(block).render(area, buf);
                }
            }
        }
    }

    fn key_hints(&self) -> &'static [KeyHint] {
        VIEW_HINTS
    }
}

pub struct ProfileEditScreen {
    form: Form,
    controller: ProfileEditController,
}

impl ProfileEditScreen {
    #[must_use]
    pub fn new() -> Self {
        let form = Form::new(vec![
            TextInput::new("Email").placeholder("nome@exemplo.com"),
            TextInput::new("Telefone")
                .placeholder("(00) 00000-0000")
                .with_mask(masks::format_phone),
            TextInput::new("Data de nascimento")
                .placeholder("DD/MM/AAAA")
                .with_mask(masks::format_date_input),
            TextInput::new("Endereço"),
            TextInput::new("Tipo de conta (←/→)"),
        ]);

        Self {
            form,
            controller: ProfileEditController::new(),
        }
    }

    /// Returns the typed form.
    #[must_use]
    pub fn values(&self) -> ProfileForm {
        let account_type = self.form.value(ACCOUNT_TYPE).trim();
        ProfileForm {
            email: self.form.value(EMAIL).to_string(),
            phone: self.form.value(PHONE).to_string(),
            birth_date: self.form.value(BIRTH_DATE).to_string(),
            address: self.form.value(ADDRESS).to_string(),
            account_type: (!account_type.is_empty()).then(|| AccountType::parse(account_type)),
        }
    }

    fn fill(&mut self, form: ProfileForm) {
        self.form.set_value(EMAIL, form.email);
        self.form.set_value(PHONE, form.phone);
        self.form.set_value(BIRTH_DATE, form.birth_date);
        self.form.set_value(ADDRESS, form.address);
        self.form.set_value(
            ACCOUNT_TYPE,
            form.account_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
        );
    }

    fn cycle_account_type(&mut self, forward: bool) {
        let labels = AccountType::SELECTABLE.map(|t| t.as_str().to_string());
        let options: Vec<&str> = labels.iter().map(String::as_str).collect();
        let index = cycle_option(&options, self.form.value(ACCOUNT_TYPE), forward);
        self.form.set_value(ACCOUNT_TYPE, options[index]);
    }
}

impl Default for ProfileEditScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ProfileEditScreen {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        self.controller.mount(runner)
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        let effect = self.controller.apply(outcome);
        if let Some(form) = self.controller.take_form() {
            self.fill(form);
        }
        effect
    }

    fn handle_key(&mut self, key: KeyEvent, runner: &FetchRunner) -> ScreenAction {
        if !self.controller.state().is_loaded() {
            return ScreenAction::Ignored;
        }

        if self.form.focus() == ACCOUNT_TYPE {
            match key.code {
                KeyCode::Left => {
                    self.cycle_account_type(false);
                    return ScreenAction::None;
                }
                KeyCode::Right => {
                    self.cycle_account_type(true);
                    return ScreenAction::None;
                }
                KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete => {
                    return ScreenAction::None;
                }
                _ => {}
            }
        }

        match self.form.handle_key(key) {
            FormAction::Consumed => ScreenAction::None,
            FormAction::Ignored => ScreenAction::Ignored,
            FormAction::Submit => {
                let values = self.values();
                ScreenAction::from_submission(self.controller.submit(runner, &values))
            }
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = bordered(" Atualizar perfil ", theme);
        let state = self.controller.state();
        if !state.is_loaded() {
            if let Some(paragraph) = placeholder(state, theme) {
                paragraph.block(block).render(area, buf);
            }
            return;
        }

        let [form, status] = Layout::vertical([
            Constraint::Length(self.form.height() + 2),
            Constraint::Length(1),
        ])
        .areas(area);

        let inner = block.inner(form);
        block.render(form, buf);
        (&self.form).render(inner, buf);

        if self.controller.is_submitting() {
            Paragraph::new(Line::from(Span::styled(
                "Salvando...",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::ITALIC),
            )))
            .render(status, buf);
        }
    }

    fn key_hints(&self) -> &'static [KeyHint] {
        EDIT_HINTS
    }
}
