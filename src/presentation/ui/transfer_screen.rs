//! Transfer order screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::balance_screen::TOGGLE_KEY;
use super::screen::{Screen, ScreenAction};
use super::utils::cycle_option;
use crate::application::controllers::{
    Controller, Effect, FetchOutcome, PendingFetch, TransferController,
};
use crate::application::dto::{DEFAULT_CATEGORY, TRANSFER_CATEGORIES, TransferForm};
use crate::application::fetch::FetchRunner;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    BACK_HOME, BALANCE_CARD_HEIGHT, BalanceCard, Form, FormAction, KeyHint, TextInput,
};

const DESTINATION: usize = 0;
const AMOUNT: usize = 1;
const DESCRIPTION: usize = 2;
const CATEGORY: usize = 3;

const HINTS: &[KeyHint] = &[
    KeyHint::new("Tab", "Próximo campo"),
    KeyHint::new("←/→", "Categoria"),
    KeyHint::new("F4", "Saldo"),
    KeyHint::new("Enter", "Transferir"),
    BACK_HOME,
];

pub struct TransferScreen {
    form: Form,
    controller: TransferController,
}

impl TransferScreen {
    #[must_use]
    pub fn new() -> Self {
        let mut form = Form::new(vec![
            TextInput::new("Destinatário").placeholder("Apelido de quem vai receber"),
            TextInput::new("Valor (R$)").placeholder("0,00"),
            TextInput::new("Descrição").placeholder("Transferência"),
            TextInput::new("Categoria (←/→)"),
        ]);
        form.set_value(CATEGORY, DEFAULT_CATEGORY);

        Self {
            form,
            controller: TransferController::new(),
        }
    }

    /// Returns the typed order.
    #[must_use]
    pub fn values(&self) -> TransferForm {
        TransferForm {
            destination: self.form.value(DESTINATION).to_string(),
            amount: self.form.value(AMOUNT).to_string(),
            description: self.form.value(DESCRIPTION).to_string(),
            category: self.form.value(CATEGORY).to_string(),
        }
    }

    fn cycle_category(&mut self, forward: bool) {
        let index = cycle_option(&TRANSFER_CATEGORIES, self.form.value(CATEGORY), forward);
        self.form.set_value(CATEGORY, TRANSFER_CATEGORIES[index]);
    }
}

impl Default for TransferScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TransferScreen {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        self.controller.mount(runner)
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        self.controller.apply(outcome)
    }

    fn handle_key(&mut self, key: KeyEvent, runner: &FetchRunner) -> ScreenAction {
        if key.code == TOGGLE_KEY {
            self.controller.toggle_balance();
            return ScreenAction::None;
        }

        if self.form.focus() == CATEGORY {
            match key.code {
                KeyCode::Left => {
                    self.cycle_category(false);
                    return ScreenAction::None;
                }
                KeyCode::Right => {
                    self.cycle_category(true);
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
        let [card, form, status] = Layout::vertical([
            Constraint::Length(BALANCE_CARD_HEIGHT),
            Constraint::Length(self.form.height() + 2),
            Constraint::Length(1),
        ])
        .areas(area);

        BalanceCard::new(
            self.controller.balance(),
            self.controller.balance_display(),
            theme,
        )
        .toggle_hint("F4 para mostrar/ocultar")
        .render(card, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Nova transferência ");
        let inner = block.inner(form);
        block.render(form, buf);
        (&self.form).render(inner, buf);

        if self.controller.is_submitting() {
            Paragraph::new(Line::from(Span::styled(
                "Enviando transferência...",
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
