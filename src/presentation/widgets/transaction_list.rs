//! Scrollable list of statement entries.

use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

use crate::application::services::TransactionView;
use crate::domain::entities::Transaction;
use crate::presentation::theme::Theme;

const EMPTY_TEXT: &str = "Nenhuma transação encontrada";
const MORE_TEXT: &str = "↓ para carregar mais";

/// Transactions rendered three lines each, newest first as received.
pub struct TransactionList<'a> {
    transactions: &'a [Transaction],
    has_more: bool,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> TransactionList<'a> {
    #[must_use]
    pub const fn new(transactions: &'a [Transaction], theme: &'a Theme) -> Self {
        Self {
            transactions,
            has_more: false,
            title: " Transações ",
            theme,
        }
    }

    #[must_use]
    pub const fn has_more(mut self, has_more: bool) -> Self {
        self.has_more = has_more;
        self
    }

    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    fn item(&self, view: TransactionView) -> ListItem<'static> {
        let amount_style = Style::default()
            .fg(self.theme.amount_color(view.is_credit))
            .add_modifier(Modifier::BOLD);

        ListItem::new(vec![
            Line::from(vec![
                Span::styled(view.amount, amount_style),
                Span::raw("  "),
                Span::styled(view.kind_label, self.theme.dimmed_style),
            ]),
            Line::from(format!("{} · {}", view.description, view.category)),
            Line::from(Span::styled(
                format!("{} · {} {}", view.counterparty, view.date, view.time),
                self.theme.dimmed_style,
            )),
        ])
    }

    fn items(&self) -> Vec<ListItem<'static>> {
        if self.transactions.is_empty() {
            return vec![ListItem::new(Line::from(Span::styled(
                EMPTY_TEXT,
                self.theme.dimmed_style,
            )))];
        }

        let mut items: Vec<ListItem<'static>> = self
            .transactions
            .iter()
            .map(|t| self.item(TransactionView::new(t, &Local)))
            .collect();

        if self.has_more {
            items.push(ListItem::new(Line::from(Span::styled(
                MORE_TEXT,
                self.theme.dimmed_style.add_modifier(Modifier::ITALIC),
            ))));
        }
        items
    }
}

impl StatefulWidget for TransactionList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(self.title);

        let list = List::new(self.items())
            .block(block)
            .highlight_style(self.theme.selection_style)
            .highlight_symbol("▶ ");

        StatefulWidget::render(list, area, buf, state);
    }
}
