use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::card::CardWidget;
use crate::app::{App, Card};

/// Footer with the configured contact links
pub struct ContactWidget;

impl ContactWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let inner = CardWidget::render_frame(frame, area, app, Card::Contact);
        if inner.height == 0 {
            return;
        }
        let row = Rect { height: 1, ..inner };
        let theme = &app.theme;
        let is_focused = app.focus == Card::Contact;

        let lead = format!("{}  ", Card::Contact.description());
        let mut x = row.x + lead.width() as u16;
        let mut spans = vec![Span::styled(lead, Style::default().fg(theme.muted))];
        let mut recorded = Vec::new();

        for (i, link) in app.config.contact.links.iter().enumerate() {
            let label = format!("[{}]", link.label);
            let width = label.width() as u16;
            if x + width > row.right() {
                break;
            }
            recorded.push(Rect::new(x, row.y, width, 1));
            x += width + 1;

            let style = if is_focused && i == app.selected_link {
                Style::default()
                    .fg(theme.base)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.accent).add_modifier(Modifier::UNDERLINED)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), row);
        for rect in recorded {
            app.layout.record_contact_link(rect);
        }
    }
}
