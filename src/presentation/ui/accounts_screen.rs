//! Accounts list screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

use super::screen::{Screen, ScreenAction};
use crate::application::controllers::{
    AccountsController, Controller, Effect, FetchOutcome, PendingFetch,
};
use crate::application::fetch::FetchRunner;
use crate::application::services::format_brl;
use crate::domain::entities::Account;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{BACK_HOME, KeyHint, placeholder};

const HINTS: &[KeyHint] = &[
    KeyHint::new("↑/↓", "Navegar"),
    KeyHint::new("F5", "Atualizar"),
    BACK_HOME,
];

pub struct AccountsScreen {
    controller: AccountsController,
    list: ListState,
}

impl AccountsScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: AccountsController::new(),
            list: ListState::default(),
        }
    }

    fn account_item(account: &Account, theme: &Theme) -> ListItem<'static> {
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(
                    account.name().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(format!("({})", account.kind()), theme.dimmed_style),
            ]),
            Line::from(vec![
                Span::raw(format!("Nº {}  ", account.number())),
                Span::styled(
                    format_brl(account.balance()),
                    Style::default().fg(theme.accent),
                ),
            ]),
        ])
    }
}

impl Default for AccountsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for AccountsScreen {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        self.controller.mount(runner)
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        self.controller.apply(outcome)
    }

    fn handle_key(&mut self, key: KeyEvent, runner: &FetchRunner) -> ScreenAction {
        if EventHandler::is_refresh_event(&key) {
            return ScreenAction::Spawn(self.controller.mount(runner));
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.controller.select_next();
                ScreenAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.controller.select_previous();
                ScreenAction::None
            }
            _ => ScreenAction::Ignored,
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Contas ");

        let state = self.controller.state();
        let Some(accounts) = state.value() else {
            if let Some(paragraph) = placeholder(state, theme) {
                paragraph.block(block).render(area, buf);
            }
            return;
        };

        if accounts.is_empty() {
            let empty = ListItem::new(Span::styled("Nenhuma conta encontrada", theme.dimmed_style));
            Widget::render(List::new(vec![empty]).block(block), area, buf);
            return;
        }

        let items: Vec<ListItem> = accounts
            .iter()
            .map(|a| Self::account_item(a, theme))
            .collect();
        self.list.select(Some(self.controller.selected()));

        let list = List::new(items)
            .block(block)
            .highlight_style(theme.selection_style)
            .highlight_symbol("▶ ");
        StatefulWidget::render(list, area, buf, &mut self.list);
    }

    fn key_hints(&self) -> &'static [KeyHint] {
        HINTS
    }
}
