use garden_core::stage::DepthStages;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::card::CardWidget;
use crate::app::{App, Card};
use crate::theme::Theme;

/// Height in pixels the layer offsets were designed against
const DESIGN_HEIGHT_PX: f64 = 288.0;
/// Width of the progress bar in cells
const BAR_WIDTH: u16 = 20;
/// Background grid spacing (columns, content rows)
const GRID_COLS: u16 = 6;
const GRID_ROWS: u64 = 4;

/// Nested scroller whose sticky layers reveal themselves with scroll progress
pub struct DepthWidget;

impl DepthWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let body = CardWidget::render(frame, area, app, Card::Depth);
        if body.height < 4 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(body);

        let stages = app.garden.depth_stages();
        render_header(frame, chunks[0], &app.theme, &stages);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.pale))
            .style(Style::default().bg(app.theme.base));
        let viewport = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);
        if viewport.height == 0 || viewport.width == 0 {
            return;
        }
        app.layout.set_depth_viewport(viewport);

        let scroll_top = app.depth_scroll.current();
        render_grid(frame.buffer_mut(), viewport, &app.theme, scroll_top);
        render_layers(frame, viewport, &app.theme, &stages);
    }
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme, stages: &DepthStages) {
    let filled = ((stages.bar_fill() * BAR_WIDTH as f64).round() as u16).min(BAR_WIDTH);
    let label = "NESTED SCROLL";
    let padding = area
        .width
        .saturating_sub(label.len() as u16 + BAR_WIDTH) as usize;

    let line = Line::from(vec![
        Span::styled(label, Style::default().fg(theme.dark).add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(padding)),
        Span::styled("█".repeat(filled as usize), Style::default().fg(theme.dark)),
        Span::styled(
            "░".repeat((BAR_WIDTH - filled) as usize),
            Style::default().fg(theme.pale),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Dotted grid on the scrolling content; moves with the scroll offset
fn render_grid(buf: &mut Buffer, viewport: Rect, theme: &Theme, scroll_top: f64) {
    let first_row = scroll_top.max(0.0).floor() as u64;
    let style = Style::default().fg(theme.pale);
    for dy in 0..viewport.height {
        let content_row = first_row + dy as u64;
        let y = viewport.y + dy;
        if content_row % GRID_ROWS == 0 {
            for x in viewport.left()..viewport.right() {
                buf[(x, y)].set_symbol("┄").set_style(style);
            }
        } else {
            for x in (viewport.left()..viewport.right()).step_by(GRID_COLS as usize) {
                buf[(x, y)].set_symbol("·").set_style(style);
            }
        }
    }
}

/// Rectangle centered at a fraction of the viewport, shifted by whole cells
fn centered(viewport: Rect, cx: f64, cy: f64, width: u16, height: u16, dx: i32, dy: i32) -> Rect {
    let x = viewport.x as i32 + (viewport.width as f64 * cx).round() as i32 - width as i32 / 2 + dx;
    let y = viewport.y as i32 + (viewport.height as f64 * cy).round() as i32 - height as i32 / 2 + dy;
    clip(viewport, x, y, width, height)
}

fn clip(viewport: Rect, x: i32, y: i32, width: u16, height: u16) -> Rect {
    let left = x.max(viewport.left() as i32);
    let top = y.max(viewport.top() as i32);
    let right = (x + width as i32).min(viewport.right() as i32);
    let bottom = (y + height as i32).min(viewport.bottom() as i32);
    if right <= left || bottom <= top {
        return Rect::default();
    }
    Rect::new(left as u16, top as u16, (right - left) as u16, (bottom - top) as u16)
}

fn render_layers(frame: &mut Frame, viewport: Rect, theme: &Theme, stages: &DepthStages) {
    // Cells are about twice as tall as they are wide
    let rows_per_px = viewport.height as f64 / DESIGN_HEIGHT_PX;
    let cols_per_px = rows_per_px * 2.0;
    let rows = |px: f64| (px * rows_per_px).round() as i32;
    let cols = |px: f64| (px * cols_per_px).round() as i32;
    let wide = (viewport.width as f64 * 0.85).round() as u16;
    let narrow = (cols(160.0).max(10) as u16).min(viewport.width);
    let h = viewport.height as f64;

    let hero_height = ((h / 3.0).round() as u16).max(2);
    let x = viewport.x as i32 + (viewport.width as i32 - wide as i32) / 2;
    let hero = clip(viewport, x, viewport.y as i32 + rows(stages.hero_rise()), wide, hero_height);
    render_layer(frame, hero, theme, stages.hero, "Hero");

    let small_height = ((h * 0.22).round() as u16).max(2);
    let right = centered(viewport, 0.5, 0.48, narrow, small_height, cols(stages.right_shift()), 0);
    render_layer(frame, right, theme, stages.right, "Layer");
    let second = centered(viewport, 0.5, 0.62, narrow, small_height, cols(stages.second_shift()), 0);
    render_layer(frame, second, theme, stages.second, "Layer");

    let footer_height = ((h * 0.28).round() as u16).max(3);
    let footer = centered(viewport, 0.5, 0.82, wide, footer_height, 0, rows(stages.footer_rise()));
    render_layer(frame, footer, theme, stages.footer, "");

    let inner = centered(
        footer,
        0.5,
        0.5,
        narrow.min(footer.width.saturating_sub(2)),
        1,
        0,
        rows(stages.footer_inner_rise()),
    );
    if stages.footer > 0.0 && stages.footer_inner > 0.0 && inner.area() > 0 {
        let style = Style::default()
            .fg(theme.fade(theme.ink, theme.raised, stages.footer_inner.min(stages.footer)))
            .bg(theme.fade(theme.surface, theme.raised, stages.footer_inner));
        frame.render_widget(Clear, inner);
        frame.render_widget(Paragraph::new("Footer").style(style).centered(), inner);
    }
}

fn render_layer(frame: &mut Frame, area: Rect, theme: &Theme, stage: f64, label: &str) {
    if stage <= 0.0 || area.width < 2 || area.height < 2 {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.fade(theme.dark, theme.base, stage)))
        .style(Style::default().bg(theme.fade(theme.raised, theme.base, stage)));
    let text = Paragraph::new(label)
        .style(Style::default().fg(theme.fade(theme.muted, theme.raised, stage)))
        .centered()
        .block(block);
    frame.render_widget(Clear, area);
    frame.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_inside_and_outside() {
        let viewport = Rect::new(10, 5, 40, 12);
        assert_eq!(clip(viewport, 12, 6, 10, 3), Rect::new(12, 6, 10, 3));
        assert_eq!(clip(viewport, 45, 6, 10, 3), Rect::new(45, 6, 5, 3));
        assert_eq!(clip(viewport, 60, 6, 10, 3), Rect::default());
        assert_eq!(clip(viewport, 0, 0, 5, 3), Rect::default());
    }

    #[test]
    fn test_centered_layer_shifts() {
        let viewport = Rect::new(0, 0, 40, 12);
        let rest = centered(viewport, 0.5, 0.5, 10, 2, 0, 0);
        assert_eq!(rest, Rect::new(15, 5, 10, 2));
        let shifted = centered(viewport, 0.5, 0.5, 10, 2, 20, 0);
        assert_eq!(shifted, Rect::new(35, 5, 5, 2));
    }
}
