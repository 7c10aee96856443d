//! Feature list shown after login.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::screen::{Screen, ScreenAction};
use crate::application::fetch::FetchRunner;
use crate::application::navigation::Route;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::KeyHint;

const HINTS: &[KeyHint] = &[
    KeyHint::new("↑/↓", "Navegar"),
    KeyHint::new("Enter", "Abrir"),
    KeyHint::new("1-6", "Atalho"),
    KeyHint::new("F2", "Menu"),
];

pub struct HomeScreen {
    list: ListState,
}

impl HomeScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            list: ListState::default().with_selected(Some(0)),
        }
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.list.selected().unwrap_or(0)
    }

    fn open(&self, index: usize) -> ScreenAction {
        Route::FEATURES
            .get(index)
            .map_or(ScreenAction::None, |(route, _)| {
                ScreenAction::Navigate(route.clone())
            })
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for HomeScreen {
    fn handle_key(&mut self, key: KeyEvent, _runner: &FetchRunner) -> ScreenAction {
        let len = Route::FEATURES.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.list.select(Some((self.selected() + 1) % len));
                ScreenAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list.select(Some((self.selected() + len - 1) % len));
                ScreenAction::None
            }
            KeyCode::Enter => self.open(self.selected()),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.open(index)
            }
            _ => ScreenAction::Ignored,
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let [title, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);

        Paragraph::new(Line::from(Span::styled(
            "O que você deseja fazer hoje?",
            theme.title_style,
        )))
        .render(title, buf);

        let items: Vec<ListItem> = Route::FEATURES
            .iter()
            .enumerate()
            .map(|(i, (_, label))| ListItem::new(format!("{}. {label}", i + 1)))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent))
                    .title(" Serviços "),
            )
            .highlight_style(theme.selection_style)
            .highlight_symbol("▶ ");

        StatefulWidget::render(list, body, buf, &mut self.list);
    }

    fn key_hints(&self) -> &'static [KeyHint] {
        HINTS
    }
}
