use std::time::Instant;

use garden_core::detail::OverlayFrame;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

const CLOSE_LABEL: &str = "×";

/// Overlay that grows out of a navigation tile into the whole stage
pub struct DetailWidget;

impl DetailWidget {
    pub fn render(frame: &mut Frame, stage: Rect, app: &mut App, now: Instant) {
        let detail = app.garden.detail();
        let Some(overlay) = detail.frame(now) else {
            return;
        };
        let area = overlay_rect(stage, &overlay);
        if area.width < 2 || area.height < 2 {
            return;
        }

        let theme = &app.theme;
        let item = detail
            .item()
            .and_then(|i| app.garden.navigation().tab().items().get(i));
        let (title, caption) = item.map(|i| (i.title, i.caption)).unwrap_or(("", ""));

        let fg = |color| theme.fade(color, theme.surface, overlay.opacity);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", title),
                Style::default().fg(fg(theme.ink)).add_modifier(Modifier::BOLD),
            ))
            .title(
                Line::from(Span::styled(
                    format!(" {} ", CLOSE_LABEL),
                    Style::default().fg(fg(theme.ink)).add_modifier(Modifier::BOLD),
                ))
                .right_aligned(),
            )
            .title_bottom(
                Line::from(Span::styled(" Esc to close ", Style::default().fg(fg(theme.muted))))
                    .right_aligned(),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(fg(theme.accent)))
            .style(Style::default().bg(theme.raised));

        let body = Paragraph::new(vec![
            Line::from(Span::styled(caption, Style::default().fg(fg(theme.dark)))),
            Line::from(""),
            Line::from(Span::styled(
                "The view expands from the tile you picked, so you never lose your place.",
                Style::default().fg(fg(theme.muted)),
            )),
        ])
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .block(block);

        let is_open = detail.is_open();
        frame.render_widget(Clear, area);
        frame.render_widget(body, area);

        if is_open {
            app.layout.set_detail_close(close_button_rect(area));
        }
    }
}

/// Cells of the right-aligned " × " title, inside the top-right corner
pub(crate) fn close_button_rect(area: Rect) -> Rect {
    let width = (CLOSE_LABEL.chars().count() as u16 + 2).min(area.width.saturating_sub(2));
    Rect::new(area.right().saturating_sub(1 + width), area.y, width, 1)
}

/// Terminal rectangle of the overlay: the stage scaled from its top-left
/// corner and translated, clipped to the stage
pub(crate) fn overlay_rect(stage: Rect, overlay: &OverlayFrame) -> Rect {
    let x = stage.x as f64 + overlay.x;
    let y = stage.y as f64 + overlay.y;
    let width = stage.width as f64 * overlay.scale_x;
    let height = stage.height as f64 * overlay.scale_y;

    let left = x.round().clamp(stage.x as f64, stage.right() as f64) as u16;
    let top = y.round().clamp(stage.y as f64, stage.bottom() as f64) as u16;
    let right = (x + width).round().clamp(left as f64, stage.right() as f64) as u16;
    let bottom = (y + height).round().clamp(top as f64, stage.bottom() as f64) as u16;
    Rect::new(left, top, right - left, bottom - top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_covers_stage() {
        let stage = Rect::new(4, 10, 40, 8);
        assert_eq!(overlay_rect(stage, &OverlayFrame::IDENTITY), stage);
    }

    #[test]
    fn test_collapsed_matches_tile() {
        let stage = Rect::new(4, 10, 40, 8);
        let frame = OverlayFrame {
            x: 10.0,
            y: 0.0,
            scale_x: 0.25,
            scale_y: 0.5,
            opacity: 0.6,
        };
        assert_eq!(overlay_rect(stage, &frame), Rect::new(14, 10, 10, 4));
    }

    #[test]
    fn test_close_button_in_top_right_corner() {
        let rect = close_button_rect(Rect::new(4, 10, 40, 8));
        assert_eq!(rect, Rect::new(40, 10, 3, 1));
    }

    #[test]
    fn test_clipped_to_stage() {
        let stage = Rect::new(0, 0, 20, 5);
        let frame = OverlayFrame {
            x: 15.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
        };
        assert_eq!(overlay_rect(stage, &frame), Rect::new(15, 0, 5, 5));
    }
}
