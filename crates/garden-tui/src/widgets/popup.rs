use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::input::Action;
use crate::keymap::Keymap;
use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key help overlay, listing the keys currently bound
    pub fn render_help(frame: &mut Frame, keymap: &Keymap, theme: &Theme) {
        let rows: Vec<(String, &str)> = [
            (Action::NextCard, "Next card"),
            (Action::PrevCard, "Previous card"),
            (Action::Activate, "Run the card's action"),
            (Action::MoveDown, "Move / scroll down"),
            (Action::MoveUp, "Move / scroll up"),
            (Action::ScrollHalfPageDown, "Half page down (depth)"),
            (Action::ScrollHalfPageUp, "Half page up (depth)"),
            (Action::OpenItem, "Open tile or link"),
            (Action::SwipeOpen, "Reveal actions (gesture)"),
            (Action::SwipeClose, "Hide actions (gesture)"),
            (Action::Save, "Save item"),
            (Action::Remove, "Remove item"),
            (Action::ToggleHelp, "Toggle this help"),
            (Action::Quit, "Quit"),
        ]
        .into_iter()
        .filter_map(|(action, text)| keymap.key_for(&action).map(|key| (key, text)))
        .chain([
            ("1-4".to_string(), "Select tab (navigation)"),
            ("i".to_string(), "Type feedback"),
            ("<Esc>".to_string(), "Close detail / stop typing"),
        ])
        .collect();

        let area = frame.area();
        let popup_width = 48u16.min(area.width.saturating_sub(4));
        let popup_height = (rows.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.raised));

        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(key, text)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<8}", key),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(text, Style::default().fg(theme.ink)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
