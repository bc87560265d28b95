use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::card::CardWidget;
use crate::app::{App, Card};

const PRINCIPLES: [(&str, &str); 3] = [
    (
        "Provide feedback.",
        "Motion communicates system status and helps prevent errors during critical actions such as form validation and transaction confirmation.",
    ),
    (
        "Create seamless experiences.",
        "Motion reduces friction by connecting interaction states, including direct gestures like swiping.",
    ),
    (
        "Guide attention.",
        "Motion directs focus, clarifies what changed, and helps users understand what matters next.",
    ),
];

pub struct IntroWidget;

impl IntroWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let body = CardWidget::render(frame, area, app, Card::Intro);
        if body.height == 0 {
            return;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(body);

        for ((title, text), column) in PRINCIPLES.iter().zip(columns.iter()) {
            let paragraph = Paragraph::new(vec![
                Line::from(Span::styled(
                    *title,
                    Style::default()
                        .fg(app.theme.ink)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(*text, Style::default().fg(app.theme.muted))),
            ])
            .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, *column);
        }
    }
}
