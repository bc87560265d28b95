use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Typing => "INSERT",
            Mode::Help => "HELP",
        };
        let motion_str = if app.garden.motion().is_reduced() {
            " | reduced motion"
        } else {
            ""
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {} | Tab: {} | Depth: {:>3.0}%{}",
                mode_str,
                app.focus.title(),
                app.current_tab(),
                app.garden.scroll().progress() * 100.0,
                motion_str
            )
        };

        let help_hint = " Tab:cards Enter:activate ?:help q:quit ";
        let padding_len = area
            .width
            .saturating_sub(status_text.width() as u16 + help_hint.width() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.ink).bg(theme.raised)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.raised)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.raised)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
