use std::time::Instant;

use garden_core::geometry::Element;
use garden_core::navigation::NavigationTab;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::card::{truncate_str, CardWidget};
use super::detail::DetailWidget;
use crate::app::{App, Card};

/// Tallest a tile is drawn, borders included
const TILE_HEIGHT: u16 = 5;

/// Tab bar plus the panel of the selected tab
pub struct NavigationWidget;

impl NavigationWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
        let body = CardWidget::render(frame, area, app, Card::Navigation);
        if body.height < 3 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tabs
                Constraint::Length(1), // Spacer
                Constraint::Min(1),    // Stage
            ])
            .split(body);

        Self::render_tabs(frame, chunks[0], app);

        let stage = chunks[2];
        app.layout.record(Element::NavigationStage, stage);
        Self::render_panel(frame, stage, app, now);

        DetailWidget::render(frame, stage, app, now);
    }

    fn render_tabs(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &app.theme;
        let current = app.garden.navigation().tab();

        let mut spans = Vec::new();
        let mut x = area.x;
        let mut recorded = Vec::new();
        for (i, tab) in NavigationTab::ALL.iter().enumerate() {
            let label = format!(" {} {} ", i + 1, tab.label());
            let width = (label.width() as u16).min(area.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            recorded.push((*tab, Rect::new(x, area.y, width, 1)));
            x += width;

            let style = if *tab == current {
                Style::default()
                    .fg(theme.base)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.dark)
            };
            spans.push(Span::styled(label, style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
        for (tab, rect) in recorded {
            app.layout.record_tab(tab, rect);
        }
    }

    fn render_panel(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
        let navigation = app.garden.navigation();
        let items = navigation.tab().items();
        if items.is_empty() {
            return;
        }
        let cursor = navigation.cursor();
        let opacity = navigation.panel_opacity(now);
        let is_focused = app.focus == Card::Navigation;
        let theme = &app.theme;

        let tile_area = Rect {
            height: area.height.min(TILE_HEIGHT),
            ..area
        };
        let count = items.len() as u32;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, count); items.len()])
            .split(tile_area);

        let mut recorded = Vec::with_capacity(items.len());
        for (i, (item, rect)) in items.iter().zip(columns.iter()).enumerate() {
            let selected = is_focused && i == cursor;
            let border = if selected {
                theme.focus
            } else if item.opens_detail {
                theme.pale
            } else {
                theme.surface
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.fade(border, theme.surface, opacity)))
                .style(Style::default().bg(theme.raised));

            let inner = block.inner(*rect);
            let max = inner.width as usize;
            let title_style = Style::default()
                .fg(theme.fade(theme.ink, theme.raised, opacity))
                .add_modifier(Modifier::BOLD);
            let caption_style = Style::default().fg(theme.fade(theme.muted, theme.raised, opacity));
            let text = Paragraph::new(vec![
                Line::from(Span::styled(truncate_str(item.title, max), title_style)),
                Line::from(Span::styled(truncate_str(item.caption, max), caption_style)),
            ])
            .alignment(Alignment::Center)
            .block(block);

            frame.render_widget(text, *rect);
            recorded.push(*rect);
        }

        for (i, rect) in recorded.into_iter().enumerate() {
            app.layout.record(Element::NavigationItem(i), rect);
        }
    }
}
