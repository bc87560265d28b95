//! Detail view that grows out of the tile that opened it
//!
//! The captured rectangle outlives the close request: it is cleared only when
//! the exit animation completes, so the reverse animation always has geometry
//! to shrink back into.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::geometry::{Element, MeasurePort};
use crate::motion::timing::lerp;
use crate::motion::{MotionPreference, Tween};

pub const TRANSITION_DURATION: Duration = Duration::from_millis(450);
/// Overlay opacity when it starts growing from the tile
pub const ENTRY_OPACITY: f64 = 0.6;
/// Overlay opacity when it has shrunk back into the tile
pub const EXIT_OPACITY: f64 = 0.0;

/// Tile geometry relative to the container, captured when the view opens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub container_width: f64,
    pub container_height: f64,
}

impl DetailRect {
    /// Overlay transform that makes the full-size overlay cover the tile
    pub fn collapsed(&self, opacity: f64) -> OverlayFrame {
        OverlayFrame {
            x: self.x,
            y: self.y,
            scale_x: self.width / self.container_width,
            scale_y: self.height / self.container_height,
            opacity,
        }
    }
}

/// Transform of the overlay (origin top-left) and its opacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub opacity: f64,
}

impl OverlayFrame {
    pub const IDENTITY: OverlayFrame = OverlayFrame {
        x: 0.0,
        y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        opacity: 1.0,
    };

    pub fn lerp(&self, to: &OverlayFrame, t: f64) -> OverlayFrame {
        OverlayFrame {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            scale_x: lerp(self.scale_x, to.scale_x, t),
            scale_y: lerp(self.scale_y, to.scale_y, t),
            opacity: lerp(self.opacity, to.opacity, t),
        }
    }
}

#[derive(Debug, Clone)]
enum Transition {
    Entering { from: OverlayFrame, tween: Tween },
    Exiting { from: OverlayFrame, tween: Tween },
}

#[derive(Debug, Clone)]
pub struct DetailTransition {
    motion: MotionPreference,
    rect: Option<DetailRect>,
    item: Option<usize>,
    is_open: bool,
    transition: Option<Transition>,
}

impl DetailTransition {
    pub fn new(motion: MotionPreference) -> Self {
        Self {
            motion,
            rect: None,
            item: None,
            is_open: false,
            transition: None,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Captured geometry; present from open until the exit animation completes
    #[inline]
    pub fn rect(&self) -> Option<DetailRect> {
        self.rect
    }

    /// Navigation item shown in the overlay
    pub fn item(&self) -> Option<usize> {
        self.item
    }

    /// Whether the overlay is on screen (open or still closing)
    pub fn is_visible(&self) -> bool {
        self.rect.is_some()
    }

    /// Escape is only listened for while the view is open
    #[inline]
    pub fn listens_for_escape(&self) -> bool {
        self.is_open
    }

    fn tween(&self, now: Instant) -> Tween {
        Tween::settle(0.0, 1.0, now, self.motion.animation(TRANSITION_DURATION))
    }

    /// Open the detail of a navigation tile.
    ///
    /// No-op while already open or when the tile or its container is not laid out.
    pub fn open(&mut self, item: usize, measure: &impl MeasurePort, now: Instant) -> bool {
        if self.is_open {
            return false;
        }
        let (Some(container), Some(target)) = (
            measure.rect(Element::NavigationStage),
            measure.rect(Element::NavigationItem(item)),
        ) else {
            return false;
        };
        if container.width <= 0.0 || container.height <= 0.0 {
            return false;
        }

        let rect = DetailRect {
            x: target.x - container.x,
            y: target.y - container.y,
            width: target.width,
            height: target.height,
            container_width: container.width,
            container_height: container.height,
        };
        // Reopening mid-close continues from wherever the overlay is
        let from = match self.frame(now) {
            Some(current) if self.rect.is_some() => current,
            _ => rect.collapsed(ENTRY_OPACITY),
        };

        self.rect = Some(rect);
        self.item = Some(item);
        self.is_open = true;
        self.transition = Some(Transition::Entering {
            from,
            tween: self.tween(now),
        });
        debug!(item, ?rect, "detail opened");
        true
    }

    /// Start the exit animation. The rectangle stays until it completes.
    pub fn close(&mut self, now: Instant) -> bool {
        if !self.is_open {
            return false;
        }
        let from = self.frame(now).unwrap_or(OverlayFrame::IDENTITY);
        self.is_open = false;
        self.transition = Some(Transition::Exiting {
            from,
            tween: self.tween(now),
        });
        debug!("detail closing");
        true
    }

    /// Escape key handler; returns whether the key was consumed
    pub fn on_escape(&mut self, now: Instant) -> bool {
        self.listens_for_escape() && self.close(now)
    }

    /// Advance the transition. Returns true when an exit animation completed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.transition {
            Some(Transition::Entering { tween, .. }) if tween.is_finished(now) => {
                self.transition = None;
                false
            }
            Some(Transition::Exiting { tween, .. }) if tween.is_finished(now) => {
                self.transition = None;
                self.on_exit_complete();
                true
            }
            _ => false,
        }
    }

    fn on_exit_complete(&mut self) {
        self.rect = None;
        self.item = None;
        debug!("detail closed");
    }

    /// Overlay transform at `now`, `None` when nothing is on screen
    pub fn frame(&self, now: Instant) -> Option<OverlayFrame> {
        let rect = self.rect?;
        let frame = match &self.transition {
            Some(Transition::Entering { from, tween }) => {
                from.lerp(&OverlayFrame::IDENTITY, tween.value_at(now))
            }
            Some(Transition::Exiting { from, tween }) => {
                from.lerp(&rect.collapsed(EXIT_OPACITY), tween.value_at(now))
            }
            None if self.is_open => OverlayFrame::IDENTITY,
            None => rect.collapsed(EXIT_OPACITY),
        };
        Some(frame)
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Drop the overlay immediately, without an exit animation
    pub fn dispose(&mut self) {
        self.transition = None;
        self.is_open = false;
        self.rect = None;
        self.item = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LayoutSnapshot, Rect};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn layout() -> LayoutSnapshot {
        LayoutSnapshot::new()
            .with(Element::NavigationStage, Rect::new(10.0, 5.0, 40.0, 20.0))
            .with(Element::NavigationItem(0), Rect::new(14.0, 9.0, 10.0, 5.0))
            .with(Element::NavigationItem(1), Rect::new(26.0, 9.0, 10.0, 5.0))
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_captures_relative_geometry() {
        let t0 = Instant::now();
        let mut detail = DetailTransition::new(MotionPreference::full());
        assert!(detail.open(0, &layout(), t0));

        let rect = detail.rect().unwrap();
        assert_eq!(rect.x, 4.0);
        assert_eq!(rect.y, 4.0);

        let start = detail.frame(t0).unwrap();
        assert!(approx(start.scale_x, 0.25));
        assert!(approx(start.scale_y, 0.25));
        assert!(approx(start.opacity, ENTRY_OPACITY));

        detail.tick(t0 + ms(450));
        assert_eq!(detail.frame(t0 + ms(450)), Some(OverlayFrame::IDENTITY));
        assert!(!detail.is_animating());
    }

    #[test]
    fn test_rect_lifecycle() {
        let t0 = Instant::now();
        let mut detail = DetailTransition::new(MotionPreference::full());
        assert!(detail.rect().is_none());

        detail.open(1, &layout(), t0);
        detail.tick(t0 + ms(500));
        assert!(detail.close(t0 + ms(600)));
        assert!(!detail.is_open());

        for step in [0, 100, 200, 300, 449] {
            let now = t0 + ms(600 + step);
            assert!(!detail.tick(now));
            assert!(detail.rect().is_some(), "rect cleared mid-close at +{}ms", step);
            assert!(detail.frame(now).is_some());
        }

        assert!(detail.tick(t0 + ms(1050)));
        assert!(detail.rect().is_none());
        assert!(detail.frame(t0 + ms(1050)).is_none());
    }

    #[test]
    fn test_exit_returns_to_tile() {
        let t0 = Instant::now();
        let mut detail = DetailTransition::new(MotionPreference::full());
        detail.open(1, &layout(), t0);
        detail.tick(t0 + ms(450));
        detail.close(t0 + ms(450));

        let end = detail.frame(t0 + ms(900)).unwrap();
        assert!(approx(end.x, 16.0));
        assert!(approx(end.y, 4.0));
        assert!(approx(end.scale_x, 0.25));
        assert!(approx(end.opacity, EXIT_OPACITY));
    }

    #[test]
    fn test_escape_only_while_open() {
        let t0 = Instant::now();
        let mut detail = DetailTransition::new(MotionPreference::full());
        assert!(!detail.listens_for_escape());
        assert!(!detail.on_escape(t0));

        detail.open(0, &layout(), t0);
        assert!(detail.listens_for_escape());
        assert!(detail.on_escape(t0 + ms(100)));
        assert!(!detail.listens_for_escape());
        assert!(!detail.on_escape(t0 + ms(200)));
    }

    #[test]
    fn test_open_twice_is_ignored() {
        let t0 = Instant::now();
        let mut detail = DetailTransition::new(MotionPreference::full());
        detail.open(0, &layout(), t0);
        assert!(!detail.open(1, &layout(), t0 + ms(10)));
        assert_eq!(detail.item(), Some(0));
    }

    #[test]
    fn test_reopen_while_closing_keeps_rect() {
        let t0 = Instant::now();
        let mut detail = DetailTransition::new(MotionPreference::full());
        detail.open(0, &layout(), t0);
        detail.tick(t0 + ms(450));
        detail.close(t0 + ms(500));

        let mid = t0 + ms(600);
        let before = detail.frame(mid).unwrap();
        assert!(detail.open(1, &layout(), mid));
        let after = detail.frame(mid).unwrap();
        assert!(approx(before.x, after.x) && approx(before.scale_x, after.scale_x));
        assert_eq!(detail.item(), Some(1));

        // The stale exit must not clear the new rect
        assert!(!detail.tick(t0 + ms(950)));
        assert!(detail.rect().is_some());
    }

    #[test]
    fn test_missing_geometry_is_noop() {
        let t0 = Instant::now();
        let mut detail = DetailTransition::new(MotionPreference::full());
        assert!(!detail.open(0, &LayoutSnapshot::new(), t0));
        assert!(!detail.open(7, &layout(), t0));
        assert!(!detail.is_open());
        assert!(detail.rect().is_none());
    }

    #[test]
    fn test_reduced_motion_still_animates_both_ways() {
        let t0 = Instant::now();
        let mut detail = DetailTransition::new(MotionPreference::reduced());
        detail.open(0, &layout(), t0);
        assert!(detail.is_animating());
        detail.tick(t0 + ms(10));
        detail.close(t0 + ms(10));
        assert!(detail.rect().is_some());
        assert!(detail.tick(t0 + ms(20)));
        assert!(detail.rect().is_none());
    }
}
