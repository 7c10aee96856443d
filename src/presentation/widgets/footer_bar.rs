use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A key and what it does on the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}

impl KeyHint {
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Back-to-home affordance shared by every feature screen.
pub const BACK_HOME: KeyHint = KeyHint::new("Esc", "Voltar ao início");

pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
    pub info: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Bottom bar with the screen's key hints and the app branding.
pub struct FooterBar<'a> {
    hints: &'a [KeyHint],
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(hints: &'a [KeyHint]) -> Self {
        Self {
            hints,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn hint_spans(&self) -> Vec<Span<'_>> {
        self.hints
            .iter()
            .enumerate()
            .flat_map(|(i, hint)| {
                let gap = (i > 0).then(|| Span::raw(" "));
                gap.into_iter().chain([
                    Span::styled(format!(" {} ", hint.key), self.style.key_style),
                    Span::styled(format!(" {} ", hint.label), self.style.label_style),
                ])
            })
            .collect()
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.style.background);

        let info_width = self
            .right_info
            .map_or(0, |s| u16::try_from(s.chars().count()).unwrap_or(u16::MAX));
        let [hints_area, info_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(info_width)])
                .spacing(1)
                .areas(Rect { height: 1, ..area });

        Paragraph::new(Line::from(self.hint_spans())).render(hints_area, buf);

        if let Some(info) = self.right_info {
            Paragraph::new(Span::styled(info, self.style.info)).render(info_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_spans() {
        let hints = [KeyHint::new("r", "Atualizar"), BACK_HOME];
        let footer = FooterBar::new(&hints);

        let text: String = footer
            .hint_spans()
            .iter()
            .map(|s| s.content.as_ref())
            .collect();

        assert_eq!(text, " r  Atualizar   Esc  Voltar ao início ");
    }
}
