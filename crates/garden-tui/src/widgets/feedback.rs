use std::time::{Duration, Instant};

use garden_core::feedback::FeedbackState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::card::{truncate_str, CardWidget};
use crate::app::{App, Card, Mode};

/// One pulse of a loading dot
const DOT_PERIOD: Duration = Duration::from_millis(750);
/// Stagger between neighbouring dots
const DOT_STAGGER: Duration = Duration::from_millis(100);
/// Opacity of the send button while it is disabled
const DISABLED_OPACITY: f64 = 0.4;

/// Text input that only accepts one word, with a simulated send
pub struct FeedbackWidget;

impl FeedbackWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let body = CardWidget::render(frame, area, app, Card::Feedback);
        if body.height < 6 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input
                Constraint::Length(1), // Hint
                Constraint::Length(1), // Button
                Constraint::Min(1),    // Status
            ])
            .split(body);

        let theme = &app.theme;
        let feedback = app.garden.feedback();
        let opacity = feedback.content_opacity(now);
        let fg = |color| theme.fade(color, theme.surface, opacity);
        let typing = app.focus == Card::Feedback && app.mode == Mode::Typing;
        let hint = feedback.hint();

        // Input
        let border = if hint.is_some() {
            theme.warning
        } else if typing {
            theme.focus
        } else {
            theme.pale
        };
        let max = chunks[0].width.saturating_sub(3) as usize;
        let mut spans = if feedback.input().is_empty() && !typing {
            vec![Span::styled("Type: Love", Style::default().fg(fg(theme.muted)))]
        } else {
            vec![Span::styled(
                truncate_str(feedback.input(), max),
                Style::default().fg(fg(theme.ink)),
            )]
        };
        if typing {
            spans.push(Span::styled("▏", Style::default().fg(theme.focus)));
        }
        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(fg(border)))
                .style(Style::default().bg(theme.raised)),
        );
        frame.render_widget(input, chunks[0]);

        if let Some(hint) = hint {
            frame.render_widget(
                Paragraph::new(Span::styled(hint.message(), Style::default().fg(fg(theme.dark)))),
                chunks[1],
            );
        }

        // Send button
        let button_opacity = if feedback.can_submit() {
            opacity
        } else {
            opacity * DISABLED_OPACITY
        };
        let button = Paragraph::new(Line::from(vec![Span::styled(
            format!("[ {} ↗ ]", feedback.button_label()),
            Style::default()
                .fg(theme.fade(theme.ink, theme.surface, button_opacity))
                .add_modifier(Modifier::BOLD),
        )]))
        .centered();
        frame.render_widget(button, chunks[2]);

        // Status
        let mut status = vec![Span::styled(
            feedback.status_label(),
            Style::default().fg(fg(theme.dark)),
        )];
        if feedback.state() == FeedbackState::Loading && !app.garden.motion().is_reduced() {
            let elapsed = now.saturating_duration_since(app.started_at);
            for dot in 0..3u32 {
                let pulse = dot_opacity(elapsed, dot);
                status.push(Span::raw(" "));
                status.push(Span::styled(
                    "■",
                    Style::default().fg(theme.fade(theme.dark, theme.raised, pulse * opacity)),
                ));
            }
        } else if feedback.state() == FeedbackState::Success {
            status.push(Span::styled("  ✓", Style::default().fg(fg(theme.success))));
        }
        let status_box = Paragraph::new(Line::from(status)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(fg(theme.pale)))
                .style(Style::default().bg(theme.raised)),
        );
        frame.render_widget(status_box, chunks[3]);
    }
}

/// Opacity of a loading dot: 0.3 -> 1 -> 0.3 over one period, eased in and out
pub(crate) fn dot_opacity(elapsed: Duration, dot: u32) -> f64 {
    let delay = DOT_STAGGER * dot;
    let Some(t) = elapsed.checked_sub(delay) else {
        return 0.3;
    };
    let period = DOT_PERIOD.as_secs_f64();
    let phase = (t.as_secs_f64() % period) / period;
    let tri = 1.0 - (2.0 * phase - 1.0).abs();
    let eased = tri * tri * (3.0 - 2.0 * tri);
    0.3 + 0.7 * eased
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_pulse() {
        assert!((dot_opacity(Duration::ZERO, 0) - 0.3).abs() < 1e-9);
        assert!((dot_opacity(Duration::from_millis(375), 0) - 1.0).abs() < 1e-9);
        assert!((dot_opacity(Duration::from_millis(750), 0) - 0.3).abs() < 1e-9);
        // Later dots lag behind
        assert!((dot_opacity(Duration::from_millis(50), 1) - 0.3).abs() < 1e-9);
        assert!(dot_opacity(Duration::from_millis(475), 1) > 0.99);
    }
}
