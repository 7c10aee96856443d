use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use rust_decimal::Decimal;

use crate::domain::LoadState;
use crate::presentation::theme::Theme;

/// Rows used by the card.
pub const BALANCE_CARD_HEIGHT: u16 = 4;

const BALANCE_LOADING: &str = "Carregando saldo...";

/// Balance box with an optional visibility hint.
pub struct BalanceCard<'a> {
    state: &'a LoadState<Decimal>,
    text: Option<String>,
    toggle_hint: Option<&'static str>,
    theme: &'a Theme,
}

impl<'a> BalanceCard<'a> {
    /// `text` is the formatted (possibly hidden) balance once loaded.
    #[must_use]
    pub const fn new(state: &'a LoadState<Decimal>, text: Option<String>, theme: &'a Theme) -> Self {
        Self {
            state,
            text,
            toggle_hint: None,
            theme,
        }
    }

    /// Shows which key reveals or hides the amount.
    #[must_use]
    pub const fn toggle_hint(mut self, hint: &'static str) -> Self {
        self.toggle_hint = Some(hint);
        self
    }

    fn body(&self) -> Line<'_> {
        match (self.state, &self.text) {
            (LoadState::Failed(message), _) => {
                Line::from(Span::styled(message.as_str(), self.theme.error_style))
            }
            (LoadState::Loaded(_), Some(text)) => Line::from(Span::styled(
                text.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            _ => Line::from(Span::styled(BALANCE_LOADING, self.theme.dimmed_style)),
        }
    }
}

impl Widget for BalanceCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(" Saldo disponível ");

        let mut lines = vec![self.body()];
        if let Some(hint) = self.toggle_hint {
            lines.push(Line::from(Span::styled(hint, self.theme.dimmed_style)));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
