//! First screen for signed-out users.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::screen::{Screen, ScreenAction};
use super::utils::centered_box;
use crate::application::fetch::FetchRunner;
use crate::application::navigation::Route;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::KeyHint;

const OPTIONS: [(&str, Route); 2] = [("Entrar", Route::Login), ("Criar conta", Route::Register)];

const HINTS: &[KeyHint] = &[
    KeyHint::new("←/→", "Escolher"),
    KeyHint::new("Enter", "Confirmar"),
    KeyHint::new("q", "Sair"),
];

#[derive(Debug, Default)]
pub struct WelcomeScreen {
    selected: usize,
}

impl WelcomeScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }
}

impl Screen for WelcomeScreen {
    fn handle_key(&mut self, key: KeyEvent, _runner: &FetchRunner) -> ScreenAction {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.selected = (self.selected + 1) % OPTIONS.len();
                ScreenAction::None
            }
            KeyCode::Enter => ScreenAction::Navigate(OPTIONS[self.selected].1.clone()),
            KeyCode::Char('q') => ScreenAction::Quit,
            _ => ScreenAction::Ignored,
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let card = centered_box(44, 11, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent));
        let inner = block.inner(card);
        block.render(card, buf);

        let [title, subtitle, _, buttons] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::from(Span::styled("MockBank", theme.title_style)))
            .alignment(Alignment::Center)
            .render(title, buf);
        Paragraph::new(Line::from(Span::styled(
            "Seu banco na palma da mão",
            theme.dimmed_style,
        )))
        .alignment(Alignment::Center)
        .render(subtitle, buf);

        let mut spans = Vec::new();
        for (i, (label, _)) in OPTIONS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let style = if i == self.selected {
                theme.selection_style.add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {label} "), style));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(buttons, buf);
    }

    fn key_hints(&self) -> &'static [KeyHint] {
        HINTS
    }
}
