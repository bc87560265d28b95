//! Nested scroll listener
//!
//! Converts raw scroll positions of an inner scrollable viewport into a
//! normalized progress value, coalescing bursts of scroll events into at most
//! one update per animation frame.

use tracing::trace;

use crate::motion::timing::clamp;

/// Share of the viewport height moved by the "scroll to explore" nudge
pub const NUDGE_FRACTION: f64 = 0.45;

/// Geometry of a scrollable viewport at the time of a scroll event
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Maximum scroll offset (may be non-positive when content fits)
    #[inline]
    pub fn range(&self) -> f64 {
        self.scroll_height - self.client_height
    }

    /// Normalized progress in [0, 1]; 0 when there is nothing to scroll
    pub fn progress(&self) -> f64 {
        let range = self.range();
        if range <= 0.0 {
            return 0.0;
        }
        clamp(self.scroll_top / range, 0.0, 1.0)
    }

    /// Target offset for the nudge call-to-action
    pub fn nudge_target(&self) -> f64 {
        let max = self.range().max(0.0);
        (self.scroll_top + self.client_height * NUDGE_FRACTION).min(max)
    }
}

/// Frame-coalesced scroll progress.
///
/// `on_scroll` records the latest value and requests a frame; `on_frame`
/// publishes it. Several scroll events between two frames produce a single
/// update carrying the last value.
#[derive(Debug, Clone, Default)]
pub struct ScrollListener {
    progress: f64,
    pending: f64,
    frame_requested: bool,
    disposed: bool,
}

impl ScrollListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Published progress
    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whether a frame callback is outstanding
    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.frame_requested
    }

    /// Record a scroll event
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        if self.disposed {
            return;
        }
        self.pending = metrics.progress();
        if !self.frame_requested {
            self.frame_requested = true;
            trace!(pending = self.pending, "scroll frame requested");
        }
    }

    /// Animation frame callback: publish the pending value, if any
    pub fn on_frame(&mut self) -> Option<f64> {
        if !self.frame_requested || self.disposed {
            return None;
        }
        self.frame_requested = false;
        self.progress = self.pending;
        Some(self.progress)
    }

    /// Cancel the outstanding frame request; later events are ignored
    pub fn dispose(&mut self) {
        self.frame_requested = false;
        self.disposed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        let range = 300.0;
        for i in 0..=30 {
            let top = i as f64 * 10.0;
            let p = ScrollMetrics::new(top, 500.0, 500.0 - range).progress();
            assert!((0.0..=1.0).contains(&p));
        }
        assert_eq!(ScrollMetrics::new(300.0, 500.0, 200.0).progress(), 1.0);
    }

    #[test]
    fn test_no_scroll_range_is_zero() {
        let p = ScrollMetrics::new(0.0, 200.0, 200.0).progress();
        assert_eq!(p, 0.0);
        assert!(p.is_finite());
        assert_eq!(ScrollMetrics::new(5.0, 100.0, 200.0).progress(), 0.0);
    }

    #[test]
    fn test_overscroll_is_clamped() {
        assert_eq!(ScrollMetrics::new(-20.0, 400.0, 100.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(900.0, 400.0, 100.0).progress(), 1.0);
    }

    #[test]
    fn test_coalesces_to_one_update_per_frame() {
        let mut listener = ScrollListener::new();
        listener.on_scroll(ScrollMetrics::new(10.0, 300.0, 100.0));
        listener.on_scroll(ScrollMetrics::new(50.0, 300.0, 100.0));
        listener.on_scroll(ScrollMetrics::new(100.0, 300.0, 100.0));
        assert_eq!(listener.progress(), 0.0);

        assert_eq!(listener.on_frame(), Some(0.5));
        assert_eq!(listener.on_frame(), None);
        assert_eq!(listener.progress(), 0.5);
    }

    #[test]
    fn test_dispose_cancels_pending_frame() {
        let mut listener = ScrollListener::new();
        listener.on_scroll(ScrollMetrics::new(200.0, 300.0, 100.0));
        listener.dispose();
        assert!(!listener.has_pending_frame());
        assert_eq!(listener.on_frame(), None);
        listener.on_scroll(ScrollMetrics::new(100.0, 300.0, 100.0));
        assert_eq!(listener.on_frame(), None);
        assert_eq!(listener.progress(), 0.0);
    }

    #[test]
    fn test_nudge_target() {
        let metrics = ScrollMetrics::new(0.0, 400.0, 100.0);
        assert!((metrics.nudge_target() - 45.0).abs() < 1e-9);

        let near_end = ScrollMetrics::new(280.0, 400.0, 100.0);
        assert_eq!(near_end.nudge_target(), 300.0);

        let fits = ScrollMetrics::new(0.0, 80.0, 100.0);
        assert_eq!(fits.nudge_target(), 0.0);
    }
}
