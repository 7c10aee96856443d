use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::application::notice::{Notice, NoticeLevel};
use crate::presentation::theme::Theme;

const MAX_WIDTH: u16 = 60;
const DISMISS_HINT: &str = "Enter para fechar";

/// Blocking alert centered over the screen.
pub struct AlertPopup<'a> {
    notice: &'a Notice,
    theme: &'a Theme,
}

impl<'a> AlertPopup<'a> {
    #[must_use]
    pub const fn new(notice: &'a Notice, theme: &'a Theme) -> Self {
        Self { notice, theme }
    }

    fn color(&self) -> Color {
        match self.notice.level {
            NoticeLevel::Success => self.theme.credit,
            NoticeLevel::Warning => Color::Yellow,
            NoticeLevel::Error => self.theme.debit,
        }
    }

    /// Rows needed for the message at `inner_width`, one per wrapped line.
    fn message_rows(&self, inner_width: u16) -> u16 {
        let width = usize::from(inner_width.max(1));
        let rows: usize = self
            .notice
            .message
            .lines()
            .map(|line| line.chars().count().div_ceil(width).max(1))
            .sum();
        u16::try_from(rows).unwrap_or(u16::MAX)
    }
}

impl Widget for AlertPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.notice.title);
        let longest = self
            .notice
            .message
            .lines()
            .map(|l| l.chars().count())
            .chain([title.chars().count(), DISMISS_HINT.len()])
            .max()
            .unwrap_or(0);

        let width = u16::try_from(longest)
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(MAX_WIDTH)
            .min(area.width);
        let inner_width = width.saturating_sub(2);
        let height = self
            .message_rows(inner_width)
            .saturating_add(4)
            .min(area.height);

        let popup_area = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        );

        let color = self.color();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(color));

        let mut lines: Vec<Line> = self
            .notice
            .message
            .lines()
            .map(|l| Line::from(Span::styled(l, Style::default().add_modifier(Modifier::BOLD))))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            DISMISS_HINT,
            self.theme.dimmed_style,
        )));

        Clear.render(popup_area, buf);
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_message_rows() {
        let notice = Notice::error("Erro", "email inválido\ntelefone vazio");
        let theme = Theme::default();
        let popup = AlertPopup::new(&notice, &theme);

        assert_eq!(popup.message_rows(40), 2);
        assert_eq!(popup.message_rows(7), 4);
    }

    #[test]
    fn test_renders_title_in_small_area() {
        let notice = Notice::success("Sucesso", "Perfil atualizado com sucesso!");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 50, 10);
        let mut buf = Buffer::empty(area);

        AlertPopup::new(&notice, &theme).render(area, &mut buf);

        let rendered: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(rendered.contains("Sucesso"));
    }
}
