//! Tab state of the navigation demo

use std::fmt;
use std::time::{Duration, Instant};

use crate::motion::{MotionPreference, Tween};

/// Cross-fade when the visible tab panel changes
pub const PANEL_FADE_DURATION: Duration = Duration::from_millis(240);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavigationTab {
    Home,
    #[default]
    Favorites,
    Cart,
    Settings,
}

impl NavigationTab {
    pub const ALL: [NavigationTab; 4] = [
        NavigationTab::Home,
        NavigationTab::Favorites,
        NavigationTab::Cart,
        NavigationTab::Settings,
    ];

    pub fn index(&self) -> usize {
        match self {
            NavigationTab::Home => 0,
            NavigationTab::Favorites => 1,
            NavigationTab::Cart => 2,
            NavigationTab::Settings => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next tab, wrapping after Settings
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::Home => "Home",
            NavigationTab::Favorites => "Favorites",
            NavigationTab::Cart => "Cart",
            NavigationTab::Settings => "Settings",
        }
    }

    /// Tiles shown in this tab's panel
    pub fn items(&self) -> &'static [PanelItem] {
        match self {
            NavigationTab::Home => HOME_ITEMS,
            NavigationTab::Favorites => FAVORITE_ITEMS,
            NavigationTab::Cart => CART_ITEMS,
            NavigationTab::Settings => SETTINGS_ITEMS,
        }
    }
}

impl fmt::Display for NavigationTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelItem {
    pub title: &'static str,
    pub caption: &'static str,
    /// Tiles open the detail view; settings rows do not
    pub opens_detail: bool,
}

impl PanelItem {
    const fn tile(title: &'static str, caption: &'static str) -> Self {
        Self {
            title,
            caption,
            opens_detail: true,
        }
    }

    const fn row(title: &'static str, caption: &'static str) -> Self {
        Self {
            title,
            caption,
            opens_detail: false,
        }
    }
}

const HOME_ITEMS: &[PanelItem] = &[
    PanelItem::tile("Featured", "New this week"),
    PanelItem::tile("Lamp", "Warm light"),
    PanelItem::tile("Chair", "Minimal"),
];

const FAVORITE_ITEMS: &[PanelItem] = &[
    PanelItem::tile("Shoe", "Saved 2d ago"),
    PanelItem::tile("Watch", "Saved 5d ago"),
    PanelItem::tile("Bottle", "Saved 1w ago"),
];

const CART_ITEMS: &[PanelItem] = &[
    PanelItem::tile("Item A", "x1  $64"),
    PanelItem::tile("Item B", "x1  $65"),
    PanelItem::row("Total", "$129"),
];

const SETTINGS_ITEMS: &[PanelItem] = &[
    PanelItem::row("Notifications", "On"),
    PanelItem::row("Shipping", "Standard"),
    PanelItem::row("Payment", "Card"),
];

#[derive(Debug, Clone)]
pub struct NavigationState {
    motion: MotionPreference,
    tab: NavigationTab,
    cursor: usize,
    panel_fade: Tween,
}

impl NavigationState {
    pub fn new(motion: MotionPreference, now: Instant) -> Self {
        Self {
            motion,
            tab: NavigationTab::default(),
            cursor: 0,
            panel_fade: Tween::resting(1.0, now),
        }
    }

    #[inline]
    pub fn tab(&self) -> NavigationTab {
        self.tab
    }

    /// Highlighted item in the current panel
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_item(&self) -> Option<&'static PanelItem> {
        self.tab.items().get(self.cursor)
    }

    /// Select a tab; re-selecting the current tab changes nothing
    pub fn select(&mut self, tab: NavigationTab, now: Instant) {
        if tab == self.tab {
            return;
        }
        self.tab = tab;
        self.cursor = 0;
        self.panel_fade = Tween::settle(0.0, 1.0, now, self.motion.animation(PANEL_FADE_DURATION));
    }

    /// Advance to the next tab (call-to-action of the navigation card)
    pub fn cycle(&mut self, now: Instant) {
        self.select(self.tab.next(), now);
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.tab.items().len();
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < self.tab.items().len() {
            self.cursor = index;
        }
    }

    pub fn panel_opacity(&self, now: Instant) -> f64 {
        self.panel_fade.value_at(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.panel_fade.is_finished(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_is_favorites() {
        let nav = NavigationState::new(MotionPreference::full(), Instant::now());
        assert_eq!(nav.tab(), NavigationTab::Favorites);
        assert_eq!(nav.current_item().map(|i| i.title), Some("Shoe"));
    }

    #[test]
    fn test_cycle_wraps() {
        let t0 = Instant::now();
        let mut nav = NavigationState::new(MotionPreference::full(), t0);
        let seen: Vec<_> = (0..5)
            .map(|_| {
                nav.cycle(t0);
                nav.tab()
            })
            .collect();
        assert_eq!(
            seen,
            vec![
                NavigationTab::Cart,
                NavigationTab::Settings,
                NavigationTab::Home,
                NavigationTab::Favorites,
                NavigationTab::Cart
            ]
        );
    }

    #[test]
    fn test_select_resets_cursor_and_fades() {
        let t0 = Instant::now();
        let mut nav = NavigationState::new(MotionPreference::full(), t0);
        nav.move_cursor_down();
        nav.move_cursor_down();
        nav.move_cursor_down();
        assert_eq!(nav.cursor(), 2);

        nav.select(NavigationTab::Settings, t0);
        assert_eq!(nav.cursor(), 0);
        assert_eq!(nav.panel_opacity(t0), 0.0);
        assert!(nav.is_animating(t0 + Duration::from_millis(100)));
        assert_eq!(nav.panel_opacity(t0 + PANEL_FADE_DURATION), 1.0);
        assert!(!nav.current_item().map(|i| i.opens_detail).unwrap_or(true));
    }

    #[test]
    fn test_reselect_is_noop() {
        let t0 = Instant::now();
        let mut nav = NavigationState::new(MotionPreference::full(), t0);
        nav.move_cursor_down();
        nav.select(NavigationTab::Favorites, t0);
        assert_eq!(nav.cursor(), 1);
        assert_eq!(nav.panel_opacity(t0), 1.0);
    }

    #[test]
    fn test_index_round_trip() {
        for tab in NavigationTab::ALL {
            assert_eq!(NavigationTab::from_index(tab.index()), Some(tab));
        }
        assert_eq!(NavigationTab::from_index(4), None);
    }
}
