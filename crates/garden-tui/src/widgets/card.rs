use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Card};

/// Bordered frame shared by every demo card: title, description, call-to-action
pub struct CardWidget;

impl CardWidget {
    /// Render the frame and description; returns the area left for the demo
    pub fn render(frame: &mut Frame, area: Rect, app: &App, card: Card) -> Rect {
        let inner = Self::render_frame(frame, area, app, card);

        let description_height = wrapped_height(card.description(), inner.width).min(inner.height);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(description_height), Constraint::Min(0)])
            .split(inner);

        let description = Paragraph::new(card.description())
            .style(Style::default().fg(app.theme.muted))
            .wrap(Wrap { trim: true });
        frame.render_widget(description, chunks[0]);

        chunks[1]
    }

    /// Border, title and call-to-action only; returns the inner area
    pub fn render_frame(frame: &mut Frame, area: Rect, app: &App, card: Card) -> Rect {
        let theme = &app.theme;
        let is_focused = app.focus == card;

        let border_style = if is_focused {
            Style::default().fg(theme.focus)
        } else {
            Style::default().fg(theme.pale)
        };
        let title_style = if is_focused {
            Style::default().fg(theme.ink).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dark)
        };

        let mut block = Block::default()
            .title(Span::styled(format!(" {} ", card.title()), title_style))
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.surface));

        if let Some(cta) = card.cta_label() {
            let cta_style = if is_focused {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            block = block.title_bottom(Line::from(Span::styled(format!(" {} ", cta), cta_style)).right_aligned());
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    }
}

/// Rows a wrapped paragraph needs at `width` (approximate: ignores word breaks)
pub(crate) fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let cols = text.width() as u16;
    cols.div_ceil(width).max(1)
}

/// Truncate a string to a display width, with ellipsis
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("abcdef", 3), 2);
        assert_eq!(wrapped_height("abcdefg", 3), 3);
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("abc", 0), 0);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Minimal Chair", 20), "Minimal Chair");
        assert_eq!(truncate_str("Minimal Chair", 8), "Minimal…");
    }
}
