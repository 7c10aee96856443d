//! Financial summary screen.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use super::screen::{Screen, ScreenAction};
use crate::application::controllers::{
    Controller, Effect, FetchOutcome, PendingFetch, SummaryController,
};
use crate::application::fetch::FetchRunner;
use crate::application::services::format_brl;
use crate::domain::entities::FinancialSummary;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{BACK_HOME, KeyHint, placeholder};

const HINTS: &[KeyHint] = &[KeyHint::new("F5", "Atualizar"), BACK_HOME];

pub struct SummaryScreen {
    controller: SummaryController,
}

impl SummaryScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: SummaryController::new(),
        }
    }

    fn totals(summary: &FinancialSummary, theme: &Theme) -> Vec<Line<'static>> {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        vec![
            Line::from(vec![
                Span::raw("Total recebido: "),
                Span::styled(
                    format!("+ {}", format_brl(summary.total_received)),
                    bold.fg(theme.credit),
                ),
            ]),
            Line::from(vec![
                Span::raw("Total enviado:  "),
                Span::styled(
                    format!("- {}", format_brl(summary.total_sent)),
                    bold.fg(theme.debit),
                ),
            ]),
            Line::from(vec![
                Span::raw("Saldo:          "),
                Span::styled(format_brl(summary.balance), bold),
            ]),
        ]
    }

    fn categories(summary: &FinancialSummary, theme: &Theme) -> Table<'static> {
        let header = Row::new(["Categoria", "Enviado", "Recebido"]).style(theme.title_style);
        let rows = summary.categories.iter().map(|c| {
            Row::new(vec![
                Cell::from(c.name.clone()),
                Cell::from(format_brl(c.sent)).style(Style::default().fg(theme.debit)),
                Cell::from(format_brl(c.received)).style(Style::default().fg(theme.credit)),
            ])
        });

        Table::new(
            rows,
            [
                Constraint::Fill(2),
                Constraint::Fill(1),
                Constraint::Fill(1),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Por categoria "),
        )
    }
}

impl Default for SummaryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SummaryScreen {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        self.controller.mount(runner)
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        self.controller.apply(outcome)
    }

    fn handle_key(&mut self, key: KeyEvent, runner: &FetchRunner) -> ScreenAction {
        if EventHandler::is_refresh_event(&key) {
            ScreenAction::Spawn(self.controller.mount(runner))
        } else {
            ScreenAction::Ignored
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let state = self.controller.state();
        let Some(summary) = state.value() else {
            if let Some(paragraph) = placeholder(state, theme) {
                paragraph.render(area, buf);
            }
            return;
        };

        let [totals, categories] =
            Layout::vertical([Constraint::Length(5), Constraint::Fill(1)]).areas(area);

        Paragraph::new(Self::totals(summary, theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent))
                    .title(" Resumo "),
            )
            .render(totals, buf);

        if !summary.categories.is_empty() {
            Widget::render(Self::categories(summary, theme), categories, buf);
        }
    }

    fn key_hints(&self) -> &'static [KeyHint] {
        HINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CategorySummary;
    use rust_decimal::Decimal;

    fn summary() -> FinancialSummary {
        FinancialSummary {
            total_received: Decimal::from(300),
            total_sent: Decimal::from(120),
            balance: Decimal::from(180),
            categories: vec![CategorySummary {
                name: "Lazer".to_string(),
                sent: Decimal::from(20),
                received: Decimal::ZERO,
            }],
        }
    }

    #[test]
    fn test_totals_signed() {
        let lines = SummaryScreen::totals(&summary(), &Theme::default());
        let text: Vec<String> = lines.iter().map(ToString::to_string).collect();

        assert_eq!(text[0], "Total recebido: + R$ 300,00");
        assert_eq!(text[1], "Total enviado:  - R$ 120,00");
        assert_eq!(text[2], "Saldo:          R$ 180,00");
    }
}
