//! Placeholders for data that is not loaded yet.

use ratatui::{
    layout::Alignment,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::domain::LoadState;
use crate::presentation::theme::Theme;

pub const LOADING_TEXT: &str = "Carregando...";

/// Paragraph to show instead of the data, `None` once loaded.
#[must_use]
pub fn placeholder<'a, T>(state: &'a LoadState<T>, theme: &Theme) -> Option<Paragraph<'a>> {
    let line = match state {
        LoadState::Loaded(_) => return None,
        LoadState::Idle | LoadState::Loading => Line::from(Span::styled(
            LOADING_TEXT,
            theme.dimmed_style.add_modifier(Modifier::ITALIC),
        )),
        LoadState::Failed(message) => Line::from(Span::styled(message.as_str(), theme.error_style)),
    };

    Some(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
    )
}
