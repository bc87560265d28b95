use std::time::Instant;

use ratatui::{style::Style, widgets::Block, Frame};

use crate::app::{App, Mode};
use crate::keymap::Keymap;
use crate::layout::ScreenLayout;
use crate::widgets::{
    ContactWidget, DepthWidget, FeedbackWidget, GestureWidget, IntroWidget, NavigationWidget,
    PopupWidget, StatusBarWidget,
};

/// Draw one frame and record the geometry the interaction core measures
pub fn draw(frame: &mut Frame, app: &mut App, keymap: &Keymap, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(app.theme.base)), area);

    let screen = ScreenLayout::compute(area);
    app.layout.clear();
    app.layout.set_screen(screen);

    IntroWidget::render(frame, screen.intro, app);
    NavigationWidget::render(frame, screen.navigation, app, now);
    DepthWidget::render(frame, screen.depth, app);
    GestureWidget::render(frame, screen.gesture, app, now);
    FeedbackWidget::render(frame, screen.feedback, app, now);
    ContactWidget::render(frame, screen.contact, app);
    StatusBarWidget::render(frame, screen.status, app);

    if app.mode == Mode::Help {
        PopupWidget::render_help(frame, keymap, &app.theme);
    }
}
