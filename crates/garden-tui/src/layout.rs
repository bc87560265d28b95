//! Screen layout and the geometry recorded while drawing
//!
//! Widgets write the rectangles they rendered into a `LayoutCache`; the
//! interaction core reads them back through `MeasurePort`, with one terminal
//! cell as the pixel unit.

use garden_core::geometry::{Element, LayoutSnapshot, MeasurePort};
use garden_core::navigation::NavigationTab;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::Card;

/// Areas of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub intro: Rect,
    pub navigation: Rect,
    pub depth: Rect,
    pub gesture: Rect,
    pub feedback: Rect,
    pub contact: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Min(12),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let grid = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(rows[1]);
        let halves = |area: Rect| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .split(area)
        };
        let top = halves(grid[0]);
        let bottom = halves(grid[1]);

        Self {
            intro: rows[0],
            navigation: top[0],
            depth: top[1],
            gesture: bottom[0],
            feedback: bottom[1],
            contact: rows[2],
            status: rows[3],
        }
    }

    pub fn card(&self, card: Card) -> Rect {
        match card {
            Card::Intro => self.intro,
            Card::Navigation => self.navigation,
            Card::Depth => self.depth,
            Card::Gesture => self.gesture,
            Card::Feedback => self.feedback,
            Card::Contact => self.contact,
        }
    }
}

/// Convert a terminal rectangle into core geometry
pub fn to_core(rect: Rect) -> garden_core::Rect {
    garden_core::Rect::new(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    )
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Buttons revealed behind the swipe item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionButton {
    Save,
    Remove,
}

/// Rectangles from the last draw
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    snapshot: LayoutSnapshot,
    screen: Option<ScreenLayout>,
    tabs: Vec<(NavigationTab, Rect)>,
    contact_links: Vec<Rect>,
    action_buttons: Vec<(ActionButton, Rect)>,
    detail_close: Option<Rect>,
    depth_viewport: Option<Rect>,
}

impl LayoutCache {
    /// Forget everything; called at the start of each draw and on resize
    pub fn clear(&mut self) {
        self.snapshot.clear();
        self.screen = None;
        self.tabs.clear();
        self.contact_links.clear();
        self.action_buttons.clear();
        self.detail_close = None;
        self.depth_viewport = None;
    }

    pub fn set_screen(&mut self, screen: ScreenLayout) {
        self.screen = Some(screen);
    }

    pub fn record(&mut self, element: Element, rect: Rect) {
        self.snapshot.set(element, to_core(rect));
    }

    pub fn record_tab(&mut self, tab: NavigationTab, rect: Rect) {
        self.tabs.push((tab, rect));
    }

    pub fn record_contact_link(&mut self, rect: Rect) {
        self.contact_links.push(rect);
    }

    pub fn record_action(&mut self, button: ActionButton, rect: Rect) {
        self.action_buttons.push((button, rect));
    }

    pub fn set_detail_close(&mut self, rect: Rect) {
        self.detail_close = Some(rect);
    }

    pub fn set_depth_viewport(&mut self, rect: Rect) {
        self.depth_viewport = Some(rect);
    }

    pub fn depth_viewport(&self) -> Option<Rect> {
        self.depth_viewport
    }

    pub fn card_at(&self, column: u16, row: u16) -> Option<Card> {
        let screen = self.screen?;
        Card::ALL
            .into_iter()
            .find(|card| contains(screen.card(*card), column, row))
    }

    pub fn tab_at(&self, column: u16, row: u16) -> Option<NavigationTab> {
        self.tabs
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(tab, _)| *tab)
    }

    pub fn contact_link_at(&self, column: u16, row: u16) -> Option<usize> {
        self.contact_links
            .iter()
            .position(|rect| contains(*rect, column, row))
    }

    pub fn action_at(&self, column: u16, row: u16) -> Option<ActionButton> {
        self.action_buttons
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(button, _)| *button)
    }

    pub fn in_detail_close(&self, column: u16, row: u16) -> bool {
        self.detail_close
            .is_some_and(|rect| contains(rect, column, row))
    }

    pub fn navigation_item_at(&self, column: u16, row: u16) -> Option<usize> {
        self.snapshot
            .navigation_item_at(column as f64, row as f64)
    }

    pub fn in_element(&self, element: Element, column: u16, row: u16) -> bool {
        self.snapshot
            .rect(element)
            .is_some_and(|r| r.contains(column as f64, row as f64))
    }

    pub fn in_depth_viewport(&self, column: u16, row: u16) -> bool {
        self.depth_viewport
            .is_some_and(|rect| contains(rect, column, row))
    }
}

impl MeasurePort for LayoutCache {
    fn rect(&self, element: Element) -> Option<garden_core::Rect> {
        self.snapshot.rect(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_layout_covers_area() {
        let screen = ScreenLayout::compute(Rect::new(0, 0, 120, 40));
        assert_eq!(screen.intro.height, 6);
        assert_eq!(screen.status.y, 39);
        assert_eq!(screen.navigation.y, screen.depth.y);
        assert!(screen.gesture.y > screen.navigation.y);
        assert_eq!(screen.navigation.width + screen.depth.width, 120);
    }

    #[test]
    fn test_cache_hit_testing() {
        let mut cache = LayoutCache::default();
        cache.set_screen(ScreenLayout::compute(Rect::new(0, 0, 120, 40)));
        cache.record(Element::SwipeItem, Rect::new(2, 30, 50, 3));
        cache.record_tab(NavigationTab::Cart, Rect::new(20, 8, 6, 1));
        cache.record_action(ActionButton::Remove, Rect::new(40, 30, 12, 3));
        cache.set_detail_close(Rect::new(50, 10, 3, 1));

        assert_eq!(cache.card_at(1, 1), Some(Card::Intro));
        assert!(cache.in_element(Element::SwipeItem, 10, 31));
        assert!(!cache.in_element(Element::SwipeItem, 10, 33));
        assert_eq!(cache.tab_at(22, 8), Some(NavigationTab::Cart));
        assert_eq!(cache.width(Element::SwipeItem), Some(50.0));
        assert_eq!(cache.action_at(45, 32), Some(ActionButton::Remove));
        assert_eq!(cache.action_at(30, 31), None);
        assert!(cache.in_detail_close(51, 10));

        cache.clear();
        assert_eq!(cache.card_at(1, 1), None);
        assert_eq!(cache.action_at(45, 32), None);
        assert!(!cache.in_detail_close(51, 10));
        assert_eq!(cache.rect(Element::SwipeItem), None);
    }
}
