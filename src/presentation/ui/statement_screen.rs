//! Statement screen: balance plus paginated transactions.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{ListState, Paragraph, StatefulWidget, Widget},
};

use super::screen::{Screen, ScreenAction};
use crate::application::controllers::{
    Controller, Effect, FetchOutcome, PendingFetch, StatementController,
};
use crate::application::fetch::FetchRunner;
use crate::application::services::format_brl;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    BACK_HOME, BALANCE_CARD_HEIGHT, BalanceCard, KeyHint, TransactionList, placeholder,
};

const HINTS: &[KeyHint] = &[
    KeyHint::new("↑/↓", "Rolar"),
    KeyHint::new("F5", "Atualizar"),
    BACK_HOME,
];

pub struct StatementScreen {
    controller: StatementController,
    list: ListState,
}

impl StatementScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: StatementController::new(),
            list: ListState::default(),
        }
    }

    #[must_use]
    pub const fn controller(&self) -> &StatementController {
        &self.controller
    }

    fn select_next(&mut self) {
        let shown = self.controller.feed().items().len();
        let next = self.list.selected().map_or(0, |i| i + 1);
        if next >= shown {
            self.controller.load_more();
        }
        if next < self.controller.feed().items().len() {
            self.list.select(Some(next));
        }
    }

    fn select_previous(&mut self) {
        let previous = self.list.selected().map_or(0, |i| i.saturating_sub(1));
        self.list.select(Some(previous));
    }

    fn sync_selection(&mut self) {
        let len = self.controller.feed().items().len();
        match self.list.selected() {
            _ if len == 0 => self.list.select(None),
            Some(i) if i >= len => self.list.select(Some(len - 1)),
            None => self.list.select(Some(0)),
            Some(_) => {}
        }
    }
}

impl Default for StatementScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for StatementScreen {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        self.controller.mount(runner)
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        let effect = self.controller.apply(outcome);
        self.sync_selection();
        effect
    }

    fn handle_key(&mut self, key: KeyEvent, runner: &FetchRunner) -> ScreenAction {
        if EventHandler::is_refresh_event(&key) {
            return ScreenAction::Spawn(self.controller.refresh(runner));
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                ScreenAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                ScreenAction::None
            }
            _ => ScreenAction::Ignored,
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let [card, status, list] = Layout::vertical([
            Constraint::Length(BALANCE_CARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        let balance = self.controller.balance();
        BalanceCard::new(balance, balance.value().map(|b| format_brl(*b)), theme)
            .render(card, buf);

        let feed = self.controller.feed();
        if feed.is_refreshing() {
            Paragraph::new(Line::from(Span::styled("Atualizando...", theme.dimmed_style)))
                .render(status, buf);
        } else if let Some(error) = feed.error()
            && !feed.items().is_empty()
        {
            Paragraph::new(Line::from(Span::styled(error, theme.error_style))).render(status, buf);
        }

        let phase = feed.status();
        if feed.items().is_empty()
            && let Some(paragraph) = placeholder(&phase, theme)
        {
            paragraph.render(list, buf);
            return;
        }

        let title = format!(" Transações ({} de {}) ", feed.items().len(), feed.total());
        TransactionList::new(feed.items(), theme)
            .title(&title)
            .has_more(feed.has_more())
            .render(list, buf, &mut self.list);
    }

    fn key_hints(&self) -> &'static [KeyHint] {
        HINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::controllers::testing::signed_in_runner;
    use crate::domain::entities::{Transaction, TransferKind};
    use crate::domain::ports::mocks::MockBankApiPort;
    use chrono::{TimeZone, Utc};
    use crossterm::event::KeyModifiers;
    use rust_decimal::Decimal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn history(n: usize) -> Vec<Transaction> {
        (0..n)
            .map(|i| {
                Transaction::new(
                    TransferKind::Sent,
                    format!("Pix {i}"),
                    Decimal::ONE,
                    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                )
            })
            .collect()
    }

    async fn mounted(n: usize) -> (StatementScreen, FetchRunner) {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_balance()
            .returning(|_| Ok(Decimal::from(50)));
        api.expect_fetch_statement()
            .returning(move |_| Ok(history(n)));
        let runner = signed_in_runner(api).await;
        let mut screen = StatementScreen::new();
        for fetch in screen.mount(&runner) {
            screen.apply(fetch.await);
        }
        (screen, runner)
    }

    #[tokio::test]
    async fn test_scrolling_past_end_loads_more() {
        let (mut screen, runner) = mounted(15).await;
        assert_eq!(screen.controller().feed().items().len(), 10);
        assert_eq!(screen.list.selected(), Some(0));

        for _ in 0..10 {
            screen.handle_key(key(KeyCode::Down), &runner);
        }

        assert_eq!(screen.controller().feed().items().len(), 15);
        assert_eq!(screen.list.selected(), Some(10));
    }

    #[tokio::test]
    async fn test_refresh_spawns_balance_and_statement() {
        let (mut screen, runner) = mounted(3).await;

        let action = screen.handle_key(key(KeyCode::F(5)), &runner);
        assert!(matches!(action, ScreenAction::Spawn(fetches) if fetches.len() == 2));
        assert!(screen.controller().feed().is_refreshing());
    }
}
