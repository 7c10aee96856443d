use ratatui::style::{Color, Modifier, Style};

/// Colors shared by every screen.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub credit: Color,
    pub debit: Color,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub title_style: Style,
    pub error_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            credit: Color::Green,
            debit: Color::Red,
            selection_style: Style::default().bg(Color::DarkGray).fg(Color::White),
            dimmed_style: Style::default().fg(Color::DarkGray),
            title_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            error_style: Style::default().fg(Color::Red),
        }
    }
}

impl Theme {
    /// Color of a movement amount.
    #[must_use]
    pub const fn amount_color(&self, is_credit: bool) -> Color {
        if is_credit { self.credit } else { self.debit }
    }
}
