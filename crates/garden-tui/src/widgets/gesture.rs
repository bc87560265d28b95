use std::time::Instant;

use garden_core::geometry::Element;
use garden_core::swipe::SwipeMetrics;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::card::{truncate_str, CardWidget};
use crate::app::{App, Card};
use crate::layout::ActionButton;

/// Rows of the list item, borders included
const ITEM_HEIGHT: u16 = 4;

/// List item that reveals Save / Remove when dragged left
pub struct GestureWidget;

impl GestureWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
        let body = CardWidget::render(frame, area, app, Card::Gesture);
        if body.height < ITEM_HEIGHT + 1 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(ITEM_HEIGHT),
                Constraint::Min(0),
            ])
            .split(body);

        let theme = &app.theme;
        frame.render_widget(
            Paragraph::new(Span::styled(
                "LIST OF ITEMS",
                Style::default().fg(theme.dark).add_modifier(Modifier::BOLD),
            )),
            chunks[0],
        );

        let item = chunks[1];
        let opacity = app.garden.actions().opacity(now);
        let fg = |color| theme.fade(color, theme.surface, opacity);

        // Action buttons sit under the item, as wide as the reveal distance
        let metrics = SwipeMetrics::from_width(item.width as f64);
        let reveal = (metrics.max_reveal.round() as u16).min(item.width);
        let actions_area = Rect::new(item.right() - reveal, item.y, reveal, item.height);
        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(actions_area);
        let state = app.garden.actions().state();
        let buttons = [
            (ActionButton::Save, state.save_label(), buttons[0]),
            (ActionButton::Remove, state.remove_label(), buttons[1]),
        ];
        for (_, label, rect) in buttons {
            let button = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    label.to_uppercase(),
                    Style::default().fg(fg(theme.dark)).add_modifier(Modifier::BOLD),
                )),
            ])
            .centered()
            .block(
                Block::default()
                    .borders(Borders::LEFT)
                    .border_style(Style::default().fg(fg(theme.pale)))
                    .style(Style::default().bg(theme.raised)),
            );
            frame.render_widget(button, rect);
        }

        // The sliding panel covers the buttons while closed
        let offset = app.garden.swipe().offset().round() as i32;
        let panel_x = (item.x as i32 + offset).max(item.x as i32) as u16;
        let panel_right = (item.right() as i32 + offset).clamp(item.x as i32, item.right() as i32) as u16;
        let panel = Rect::new(panel_x, item.y, panel_right - panel_x, item.height);

        if panel.width > 0 {
            let max = panel.width.saturating_sub(4) as usize;
            let content = Paragraph::new(vec![
                Line::from(vec![
                    Span::styled("← ", Style::default().fg(fg(theme.dark))),
                    Span::styled(
                        truncate_str("Minimal Chair", max),
                        Style::default().fg(fg(theme.ink)).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", app.garden.actions().item_label().to_uppercase()),
                    Style::default().fg(fg(theme.dark)),
                )),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(fg(theme.pale)))
                    .style(Style::default().bg(theme.base)),
            );
            frame.render_widget(Clear, panel);
            frame.render_widget(content, panel);
        }

        app.layout.record(Element::SwipeItem, item);
        // Clickable only once the panel has slid out of the way
        if app.garden.swipe().is_open() {
            for (button, _, rect) in buttons {
                app.layout.record_action(button, rect);
            }
        }
    }
}
