//! Transfer history and transfer detail screens.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListState, Paragraph, StatefulWidget, Widget},
};

use super::screen::{Screen, ScreenAction};
use super::utils::field_line;
use crate::application::controllers::{
    Controller, Effect, FetchOutcome, PendingFetch, TransferDetailController, TransfersController,
};
use crate::application::fetch::FetchRunner;
use crate::domain::entities::Transaction;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{KeyHint, TransactionList, placeholder};

const LIST_HINTS: &[KeyHint] = &[
    KeyHint::new("↑/↓", "Navegar"),
    KeyHint::new("Enter", "Detalhes"),
    KeyHint::new("F5", "Atualizar"),
    KeyHint::new("Esc", "Voltar ao início"),
];

const DETAIL_HINTS: &[KeyHint] = &[KeyHint::new("Esc", "Voltar")];

pub struct TransfersScreen {
    controller: TransfersController,
    list: ListState,
}

impl TransfersScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: TransfersController::new(),
            list: ListState::default(),
        }
    }

    #[must_use]
    pub const fn controller(&self) -> &TransfersController {
        &self.controller
    }
}

impl Default for TransfersScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TransfersScreen {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        self.controller.mount(runner)
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        self.controller.apply(outcome)
    }

    fn handle_key(&mut self, key: KeyEvent, runner: &FetchRunner) -> ScreenAction {
        if EventHandler::is_refresh_event(&key) {
            return ScreenAction::Spawn(vec![self.controller.refresh(runner)]);
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
            KeyCode::Enter => self
                .controller
                .open_selected()
                .map_or(ScreenAction::None, ScreenAction::Navigate),
            _ => ScreenAction::Ignored,
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let [status, list] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

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

        self.list.select(if feed.items().is_empty() {
            None
        } else {
            Some(self.controller.selected())
        });
        TransactionList::new(feed.items(), theme)
            .title(" Transferências ")
            .has_more(feed.has_more())
            .render(list, buf, &mut self.list);
    }

    fn key_hints(&self) -> &'static [KeyHint] {
        LIST_HINTS
    }
}

/// Read-only view of one transfer.
pub struct TransferDetailScreen {
    controller: TransferDetailController,
}

impl TransferDetailScreen {
    #[must_use]
    pub const fn new(transfer: Transaction) -> Self {
        Self {
            controller: TransferDetailController::new(transfer),
        }
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let view = self.controller.view(&Local);
        let label = theme.dimmed_style;
        let amount_style = Style::default()
            .fg(theme.amount_color(view.is_credit))
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled(view.amount.clone(), amount_style)),
            Line::from(Span::styled(view.kind_label, theme.title_style)),
            Line::default(),
            field_line("Descrição", view.description.clone(), label),
            field_line("Categoria", view.category.clone(), label),
            field_line("Data", self.controller.when(&Local), label),
            Line::from(view.counterparty.clone()),
        ];
        if let Some(id) = self.controller.transfer().id() {
            lines.push(field_line("Identificador", id.to_string(), label));
        }
        lines
    }
}

impl Screen for TransferDetailScreen {
    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        self.controller.apply(outcome)
    }

    fn handle_key(&mut self, _key: KeyEvent, _runner: &FetchRunner) -> ScreenAction {
        ScreenAction::Ignored
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        Paragraph::new(self.lines(theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent))
                    .title(" Transferência "),
            )
            .render(area, buf);
    }

    fn key_hints(&self) -> &'static [KeyHint] {
        DETAIL_HINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::controllers::testing::signed_in_runner;
    use crate::application::navigation::Route;
    use crate::domain::entities::TransferKind;
    use crate::domain::ports::mocks::MockBankApiPort;
    use chrono::{TimeZone, Utc};
    use crossterm::event::KeyModifiers;
    use rust_decimal::Decimal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn transfer(id: u64) -> Transaction {
        Transaction::new(
            TransferKind::Sent,
            format!("Aluguel {id}"),
            Decimal::from(900),
            Utc.with_ymd_and_hms(2024, 3, 10, 15, 30, 0).unwrap(),
        )
        .with_id(id)
        .with_category(Some("Moradia".to_string()))
    }

    #[tokio::test]
    async fn test_enter_opens_selected_transfer() {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_transfers()
            .returning(|_| Ok(vec![transfer(1), transfer(2)]));
        let runner = signed_in_runner(api).await;
        let mut screen = TransfersScreen::new();
        for fetch in screen.mount(&runner) {
            screen.apply(fetch.await);
        }

        screen.handle_key(key(KeyCode::Down), &runner);
        let action = screen.handle_key(key(KeyCode::Enter), &runner);

        match action {
            ScreenAction::Navigate(Route::TransferDetail(t)) => assert_eq!(t.id(), Some(2)),
            _ => panic!("expected navigation to the detail screen"),
        }
    }

    #[tokio::test]
    async fn test_enter_on_empty_history_does_nothing() {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_transfers().returning(|_| Ok(Vec::new()));
        let runner = signed_in_runner(api).await;
        let mut screen = TransfersScreen::new();
        for fetch in screen.mount(&runner) {
            screen.apply(fetch.await);
        }

        let action = screen.handle_key(key(KeyCode::Enter), &runner);
        assert!(matches!(action, ScreenAction::None));
    }

    #[test]
    fn test_detail_lists_fields() {
        let screen = TransferDetailScreen::new(transfer(7));
        let text: Vec<String> = screen
            .lines(&Theme::default())
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(text[0], "- R$ 900,00");
        assert!(text.contains(&"Categoria: Moradia".to_string()));
        assert!(text.contains(&"Identificador: 7".to_string()));
        assert!(text.contains(&"Para: Conta de destino não encontrada".to_string()));
    }
}
