use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Centers a fixed-size box, shrinking it to fit `r`.
#[must_use]
pub fn centered_box(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

/// Index of the option after (or before) `current` in `options`, wrapping.
///
/// An unknown `current` selects the first option.
#[must_use]
pub fn cycle_option(options: &[&str], current: &str, forward: bool) -> usize {
    let len = options.len();
    if len == 0 {
        return 0;
    }
    match options.iter().position(|o| *o == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    }
}

/// `Label: value` line for read-only detail views.
#[must_use]
pub fn field_line<'a>(label: &'a str, value: impl Into<String>, label_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::raw(value.into()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_box_fits() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_box(50, 10, area), Rect::new(25, 15, 50, 10));
        assert_eq!(centered_box(200, 80, area), area);
    }

    #[test]
    fn test_cycle_option_wraps() {
        let options = ["a", "b", "c"];
        assert_eq!(cycle_option(&options, "c", true), 0);
        assert_eq!(cycle_option(&options, "a", false), 2);
        assert_eq!(cycle_option(&options, "b", true), 2);
        assert_eq!(cycle_option(&options, "zzz", true), 0);
    }
}
