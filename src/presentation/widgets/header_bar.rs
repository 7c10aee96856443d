use crate::application::navigation::Route;
use crate::presentation::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Key that opens the header menu.
pub const MENU_KEY: KeyCode = KeyCode::F(2);

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub greeting: Style,
    pub menu_hint: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            greeting: Style::default().fg(Color::White),
            menu_hint: Style::default().fg(Color::White).bg(Color::DarkGray),
        }
    }
}

/// Top bar greeting the signed-in holder.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    nickname: &'a str,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, nickname: &'a str) -> Self {
        Self {
            app_name,
            nickname,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn greeting(&self) -> String {
        format!(" Bem-vindo, {} ", self.nickname)
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let left_line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::styled(self.greeting(), self.style.greeting),
        ]);
        Paragraph::new(left_line).render(Rect::new(area.x, area.y, area.width, 1), buf);

        let hint = " F2 Menu ";
        let hint_width = u16::try_from(hint.chars().count()).unwrap_or(u16::MAX);
        let left_width =
            u16::try_from(self.app_name.len() + 2 + self.greeting().chars().count()).unwrap_or(0);

        if hint_width < area.width.saturating_sub(left_width) {
            let right_area = Rect::new(
                area.right().saturating_sub(hint_width),
                area.y,
                hint_width,
                1,
            );
            Paragraph::new(Span::styled(hint, self.style.menu_hint)).render(right_area, buf);
        }
    }
}

/// Entry of the header menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    ViewProfile,
    EditProfile,
    Logout,
}

impl MenuItem {
    pub const ALL: [Self; 3] = [Self::ViewProfile, Self::EditProfile, Self::Logout];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ViewProfile => "Ver perfil",
            Self::EditProfile => "Atualizar perfil",
            Self::Logout => "Sair",
        }
    }

    /// Route opened by the item; `None` for logout.
    #[must_use]
    pub const fn route(self) -> Option<Route> {
        match self {
            Self::ViewProfile => Some(Route::Profile),
            Self::EditProfile => Some(Route::ProfileEdit),
            Self::Logout => None,
        }
    }
}

/// Result of a key press while the menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMenuAction {
    None,
    Close,
    Select(MenuItem),
}

/// Drop-down menu state.
#[derive(Debug, Default)]
pub struct HeaderMenuState {
    open: bool,
    list: ListState,
}

impl HeaderMenuState {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.list.select(Some(0));
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> HeaderMenuAction {
        match key.code {
            KeyCode::Esc | MENU_KEY => {
                self.close();
                HeaderMenuAction::Close
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.list.selected().unwrap_or(0);
                self.list
                    .select(Some((i + MenuItem::ALL.len() - 1) % MenuItem::ALL.len()));
                HeaderMenuAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let i = self.list.selected().unwrap_or(0);
                self.list.select(Some((i + 1) % MenuItem::ALL.len()));
                HeaderMenuAction::None
            }
            KeyCode::Enter => {
                self.close();
                let item = MenuItem::ALL[self.list.selected().unwrap_or(0) % MenuItem::ALL.len()];
                HeaderMenuAction::Select(item)
            }
            _ => HeaderMenuAction::None,
        }
    }
}

/// Menu popup anchored under the right end of the header.
pub struct HeaderMenu<'a> {
    theme: &'a Theme,
}

impl<'a> HeaderMenu<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl StatefulWidget for HeaderMenu<'_> {
    type State = HeaderMenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if !state.open {
            return;
        }

        let width = 22.min(area.width);
        let height = (u16::try_from(MenuItem::ALL.len()).unwrap_or(0) + 2).min(area.height);
        let popup = Rect::new(
            area.right().saturating_sub(width),
            area.y.saturating_add(1),
            width,
            height,
        )
        .intersection(area);

        let items: Vec<ListItem> = MenuItem::ALL
            .iter()
            .map(|item| ListItem::new(item.label()))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent)),
            )
            .highlight_style(self.theme.selection_style)
            .highlight_symbol("> ");

        Clear.render(popup, buf);
        StatefulWidget::render(list, popup, buf, &mut state.list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_header_bar_greeting() {
        let header = HeaderBar::new("mockbank", "ana");
        assert_eq!(header.greeting(), " Bem-vindo, ana ");
    }

    #[test]
    fn test_menu_selects_logout() {
        let mut menu = HeaderMenuState::default();
        menu.open();
        menu.handle_key(key(KeyCode::Up));

        assert_eq!(
            menu.handle_key(key(KeyCode::Enter)),
            HeaderMenuAction::Select(MenuItem::Logout)
        );
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_routes() {
        assert_eq!(MenuItem::ViewProfile.route(), Some(Route::Profile));
        assert_eq!(MenuItem::Logout.route(), None);
    }

    #[test]
    fn test_escape_closes() {
        let mut menu = HeaderMenuState::default();
        menu.open();
        assert_eq!(menu.handle_key(key(KeyCode::Esc)), HeaderMenuAction::Close);
        assert!(!menu.is_open());
    }
}
