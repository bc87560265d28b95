use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use garden_core::feedback::FeedbackEvent;
use garden_core::geometry::{Element, MeasurePort};
use garden_core::navigation::NavigationTab;
use garden_core::scroll::ScrollMetrics;
use garden_core::{AppConfig, Garden, MotionPreference};
use tracing::{debug, info, warn};

use crate::input::Action;
use crate::layout::{ActionButton, LayoutCache};
use crate::scroll::{ScrollAnimator, ScrollSettings};
use crate::theme::Theme;

/// Pointer id used for mouse drags
const MOUSE_POINTER: u64 = 1;
/// Pointer id used for keyboard drag emulation
const KEYBOARD_POINTER: u64 = 2;
/// Rows scrolled per wheel notch
const WHEEL_STEP: f64 = 3.0;
/// Virtual content height of the depth viewport, as a multiple of its height
const DEPTH_CONTENT_FACTOR: f64 = 14.0 / 3.0;

/// Cards of the garden, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    Intro,
    Navigation,
    Depth,
    Gesture,
    Feedback,
    Contact,
}

impl Card {
    pub const ALL: [Card; 6] = [
        Card::Intro,
        Card::Navigation,
        Card::Depth,
        Card::Gesture,
        Card::Feedback,
        Card::Contact,
    ];

    fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    pub fn next(&self) -> Card {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Card {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Card::Intro => "Motion Garden",
            Card::Navigation => "State & Navigation",
            Card::Depth => "Scroll & Depth",
            Card::Gesture => "Gesture-based Motion",
            Card::Feedback => "Feedback & Microinteractions",
            Card::Contact => "Contact",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Card::Intro => "Motion is part of interface language. It explains change, confirms intent, and helps users stay oriented without adding visual noise.",
            Card::Navigation => "Motion preserves context as states change, keeping wayfinding clear across views.",
            Card::Depth => "Scroll-driven motion preserves hierarchy while guiding attention through layers of depth as content unfolds.",
            Card::Gesture => "Gestures surface contextual actions, enabling state changes without interrupting flow.",
            Card::Feedback => "Microinteractions provide immediate feedback, guiding users through errors, success and recovery without breaking flow.",
            Card::Contact => "Let's talk about motion.",
        }
    }

    /// Label of the card's call-to-action
    pub fn cta_label(&self) -> Option<&'static str> {
        match self {
            Card::Intro => None,
            Card::Navigation => Some("Explore states →"),
            Card::Depth => Some("Scroll to explore →"),
            Card::Gesture => Some("Swipe to reveal actions →"),
            Card::Feedback => Some("Test feedback →"),
            Card::Contact => Some("Open link →"),
        }
    }
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// The feedback input has keyboard focus
    Typing,
    Help,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub garden: Garden,
    pub focus: Card,
    pub mode: Mode,
    /// Geometry from the last draw
    pub layout: LayoutCache,
    /// Scroll offset of the depth viewport, in rows
    pub depth_scroll: ScrollAnimator,
    /// Last scroll position handed to the garden
    reported_scroll: Option<(f64, f64)>,
    /// Highlighted contact link
    pub selected_link: usize,
    /// Mouse drag captured by the swipe item
    dragging: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Origin for purely decorative animations
    pub started_at: Instant,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, motion: MotionPreference, now: Instant) -> Self {
        let settings = ScrollSettings::from_config(&config.ui, motion);
        Self {
            config,
            theme,
            garden: Garden::new(motion, now),
            focus: Card::Intro,
            mode: Mode::Normal,
            layout: LayoutCache::default(),
            depth_scroll: ScrollAnimator::new(settings),
            reported_scroll: None,
            selected_link: 0,
            dragging: false,
            status_message: None,
            should_quit: false,
            started_at: now,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn is_input_mode(&self) -> bool {
        self.mode == Mode::Typing
    }

    /// Apply an input action
    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextCard => self.set_focus(self.focus.next(), now),
            Action::PrevCard => self.set_focus(self.focus.prev(), now),
            Action::Activate => self.activate(now),
            Action::MoveDown => self.move_down(now),
            Action::MoveUp => self.move_up(now),
            Action::ScrollHalfPageDown => self.scroll_half_page(1.0),
            Action::ScrollHalfPageUp => self.scroll_half_page(-1.0),
            Action::OpenItem => self.open_item(now),
            Action::SelectTab(tab) => self.garden.select_tab(tab, now),
            Action::Save => self.save(now),
            Action::Remove => self.remove(now),
            Action::SwipeOpen => self.keyboard_swipe(true, now),
            Action::SwipeClose => self.keyboard_swipe(false, now),
            Action::CloseDetail => {
                self.garden.on_escape(now);
            }
            Action::ToggleHelp => {
                self.mode = if self.mode == Mode::Help {
                    Mode::Normal
                } else {
                    Mode::Help
                };
            }
            Action::StartTyping => self.mode = Mode::Typing,
            Action::StopTyping => self.mode = Mode::Normal,
            Action::InputChar(c) => self.garden.feedback_mut().push_char(c),
            Action::Backspace => self.garden.feedback_mut().backspace(),
            Action::ExitMode => {
                if self.mode == Mode::Help {
                    self.mode = Mode::Normal;
                } else {
                    self.clear_status();
                }
            }
            Action::None => {}
        }
    }

    /// Move focus, releasing anything the old card was holding
    pub fn set_focus(&mut self, card: Card, now: Instant) {
        if card == self.focus {
            return;
        }
        if self.focus == Card::Gesture {
            self.release_drag(now);
        }
        self.focus = card;
        self.mode = if card == Card::Feedback {
            Mode::Typing
        } else {
            Mode::Normal
        };
        debug!(?card, "focus changed");
    }

    /// Call-to-action of the focused card
    pub fn activate(&mut self, now: Instant) {
        match self.focus {
            Card::Intro => self.set_focus(Card::Navigation, now),
            Card::Navigation => self.garden.cycle_tab(now),
            Card::Depth => self.nudge_depth(now),
            Card::Gesture => {
                if !self.garden.swipe_hint(&self.layout, now) {
                    self.set_status("Gesture demo is not on screen");
                }
            }
            Card::Feedback => {
                if self.garden.submit_feedback(now) {
                    info!("feedback sent");
                } else if let Some(hint) = self.garden.feedback().hint() {
                    self.set_status(hint.message());
                }
            }
            Card::Contact => self.open_contact_link(),
        }
    }

    fn move_down(&mut self, now: Instant) {
        match self.focus {
            Card::Navigation => self.garden.navigation_mut().move_cursor_down(),
            Card::Depth => self.scroll_depth(1.0),
            Card::Contact => {
                let count = self.config.contact.links.len();
                if count > 0 {
                    self.selected_link = (self.selected_link + 1).min(count - 1);
                }
            }
            Card::Intro | Card::Gesture | Card::Feedback => self.set_focus(self.focus.next(), now),
        }
    }

    fn move_up(&mut self, now: Instant) {
        match self.focus {
            Card::Navigation => self.garden.navigation_mut().move_cursor_up(),
            Card::Depth => self.scroll_depth(-1.0),
            Card::Contact => self.selected_link = self.selected_link.saturating_sub(1),
            Card::Intro | Card::Gesture | Card::Feedback => self.set_focus(self.focus.prev(), now),
        }
    }

    fn open_item(&mut self, now: Instant) {
        match self.focus {
            Card::Navigation => {
                let cursor = self.garden.navigation().cursor();
                if !self.garden.open_detail(cursor, &self.layout, now) {
                    let item = self.garden.navigation().current_item();
                    if item.is_some_and(|i| !i.opens_detail) {
                        self.set_status("Settings rows have no detail view");
                    }
                }
            }
            Card::Contact => self.open_contact_link(),
            _ => {}
        }
    }

    fn save(&mut self, now: Instant) {
        if self.focus != Card::Gesture {
            return;
        }
        if !self.garden.save(now) {
            self.set_status("Reveal the actions first");
        }
    }

    fn remove(&mut self, now: Instant) {
        if self.focus != Card::Gesture {
            return;
        }
        if !self.garden.remove(now) {
            self.set_status("Reveal the actions first");
        }
    }

    /// Drive the swipe item with a synthetic full-width drag
    fn keyboard_swipe(&mut self, open: bool, now: Instant) {
        if self.focus != Card::Gesture || self.dragging {
            return;
        }
        let Some(rect) = self.layout.rect(Element::SwipeItem) else {
            return;
        };
        let (from, to) = if open {
            (rect.right(), rect.x)
        } else {
            (rect.x, rect.right())
        };
        if self.garden.pointer_down(KEYBOARD_POINTER, from, &self.layout, now) {
            self.garden.pointer_move(KEYBOARD_POINTER, to);
            self.garden.pointer_up(now);
        }
    }

    fn release_drag(&mut self, now: Instant) {
        if self.dragging {
            self.dragging = false;
            self.garden.pointer_up(now);
        }
    }

    /// Mouse input: drag the swipe item, click its buttons, tabs and tiles, wheel the depth viewport
    pub fn handle_mouse(&mut self, event: MouseEvent, now: Instant) {
        if self.mode == Mode::Help {
            return;
        }
        let (column, row) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.mouse_down(column, row, now),
            MouseEventKind::Drag(MouseButton::Left) => {
                if !self.dragging {
                    return;
                }
                // The drag stays captured until it leaves the gesture card
                if self.layout.card_at(column, row) == Some(Card::Gesture) {
                    self.garden.pointer_move(MOUSE_POINTER, column as f64);
                } else {
                    self.release_drag(now);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.release_drag(now),
            MouseEventKind::ScrollDown if self.layout.in_depth_viewport(column, row) => {
                self.scroll_depth(WHEEL_STEP)
            }
            MouseEventKind::ScrollUp if self.layout.in_depth_viewport(column, row) => {
                self.scroll_depth(-WHEEL_STEP)
            }
            _ => {}
        }
    }

    fn mouse_down(&mut self, column: u16, row: u16, now: Instant) {
        if let Some(card) = self.layout.card_at(column, row) {
            self.set_focus(card, now);
        }

        if self.garden.detail().is_open() && self.layout.in_detail_close(column, row) {
            self.garden.close_detail(now);
        } else if let Some(button) = self
            .layout
            .action_at(column, row)
            .filter(|_| self.garden.swipe().is_open())
        {
            match button {
                ActionButton::Save => self.garden.save(now),
                ActionButton::Remove => self.garden.remove(now),
            };
        } else if self.layout.in_element(Element::SwipeItem, column, row) {
            self.dragging = self
                .garden
                .pointer_down(MOUSE_POINTER, column as f64, &self.layout, now);
        } else if let Some(tab) = self.layout.tab_at(column, row) {
            self.garden.select_tab(tab, now);
        } else if self.garden.detail().is_visible() {
            // The overlay covers the tiles
        } else if let Some(item) = self.layout.navigation_item_at(column, row) {
            self.garden.navigation_mut().set_cursor(item);
            self.garden.open_detail(item, &self.layout, now);
        } else if let Some(link) = self.layout.contact_link_at(column, row) {
            self.selected_link = link;
        }
    }

    /// Terminal window lost focus: end any drag
    pub fn on_focus_lost(&mut self, now: Instant) {
        self.release_drag(now);
    }

    /// Layout changed; geometry is re-recorded on the next draw
    pub fn on_resize(&mut self) {
        self.layout.clear();
        self.reported_scroll = None;
    }

    fn depth_dimensions(&self) -> (f64, f64) {
        let viewport = self
            .layout
            .depth_viewport()
            .map(|r| r.height as f64)
            .unwrap_or(0.0);
        (viewport * DEPTH_CONTENT_FACTOR, viewport)
    }

    fn depth_max_scroll(&self) -> f64 {
        let (content, viewport) = self.depth_dimensions();
        (content - viewport).max(0.0)
    }

    fn scroll_depth(&mut self, rows: f64) {
        let max = self.depth_max_scroll();
        self.depth_scroll.scroll_by(rows, max);
    }

    fn scroll_half_page(&mut self, direction: f64) {
        if self.focus != Card::Depth {
            return;
        }
        let (_, viewport) = self.depth_dimensions();
        self.scroll_depth(direction * (viewport / 2.0).max(1.0));
    }

    /// "Scroll to explore": move a bit under half a viewport further down
    fn nudge_depth(&mut self, now: Instant) {
        let (content, viewport) = self.depth_dimensions();
        let metrics = ScrollMetrics::new(self.depth_scroll.current(), content, viewport);
        self.depth_scroll
            .scroll_to(metrics.nudge_target(), metrics.range(), now);
    }

    /// Depth viewport metrics at the current scroll position
    pub fn depth_metrics(&self) -> ScrollMetrics {
        let (content, viewport) = self.depth_dimensions();
        ScrollMetrics::new(self.depth_scroll.current(), content, viewport)
    }

    fn open_contact_link(&mut self) {
        let Some(link) = self.config.contact.links.get(self.selected_link).cloned() else {
            return;
        };
        match open::that(&link.url) {
            Ok(()) => {
                info!(url = %link.url, "opened contact link");
                self.set_status(format!("Opened {}", link.label));
            }
            Err(e) => {
                warn!(url = %link.url, error = %e, "failed to open contact link");
                self.set_status(format!("Could not open {}: {}", link.label, e));
            }
        }
    }

    /// Advance scrolling, timers and animations to `now`
    pub fn update(&mut self, now: Instant) {
        let max = self.depth_max_scroll();
        let top = self.depth_scroll.update(max, now);
        let (content, viewport) = self.depth_dimensions();
        if viewport > 0.0 && self.reported_scroll != Some((top, viewport)) {
            self.reported_scroll = Some((top, viewport));
            self.garden
                .on_scroll(ScrollMetrics::new(top, content, viewport));
        }

        let report = self.garden.tick(now);
        for event in &report.feedback {
            match event {
                FeedbackEvent::Succeeded => self.set_status("Feedback sent"),
                FeedbackEvent::ResetFinished => self.clear_status(),
                FeedbackEvent::ResetStarted => {}
            }
        }
        if report.action_reset {
            self.set_status("Item restored");
        }
    }

    /// Whether the event loop should poll at the animation frame rate
    pub fn needs_fast_update(&self, now: Instant) -> bool {
        self.dragging || self.depth_scroll.needs_update() || self.garden.needs_frame(now)
    }

    /// Cancel every timer and animation before the terminal is restored
    pub fn shutdown(&mut self) {
        self.depth_scroll.cancel();
        self.garden.dispose();
    }

    /// Current tab, for the status bar
    pub fn current_tab(&self) -> NavigationTab {
        self.garden.navigation().tab()
    }
}
