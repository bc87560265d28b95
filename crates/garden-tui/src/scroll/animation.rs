//! L3 Molecular Layer: Scroll animation controller
//!
//! Drives the scroll offset of the depth viewport. Positions are kept in
//! fractional rows so the reported scroll progress moves continuously even
//! though the terminal can only draw whole rows.

use std::time::Instant;

use garden_core::motion::Tween;

use super::config::ScrollSettings;

/// Scroll animation controller
///
/// Call `scroll_by()` / `scroll_to()` to request movement, then `update()`
/// each frame to get the current interpolated position.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    /// Current active animation (if any)
    animation: Option<Tween>,
    settings: ScrollSettings,
    /// Current scroll position (always up-to-date)
    current: f64,
    /// Pending scroll delta for batching multiple scroll events
    pending_delta: f64,
}

impl ScrollAnimator {
    pub fn new(settings: ScrollSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn settings(&self) -> &ScrollSettings {
        &self.settings
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Animation running or delta waiting for the next frame
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0.0
    }

    /// Final position after the running animation
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.target())
            .unwrap_or(self.current)
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Set scroll position immediately (no animation)
    pub fn set_position(&mut self, position: f64) {
        self.animation = None;
        self.current = position.max(0.0);
        self.pending_delta = 0.0;
    }

    /// Start a scroll animation to `target`, or jump there when smoothing is off
    pub fn scroll_to(&mut self, target: f64, max_scroll: f64, now: Instant) {
        let target = target.clamp(0.0, max_scroll.max(0.0));
        self.pending_delta = 0.0;

        if !self.settings.is_smooth() {
            self.current = target;
            self.animation = None;
            return;
        }
        if self.current == target {
            self.animation = None;
            return;
        }
        self.animation = Some(self.tween(target, now));
    }

    /// Scroll by a delta (positive = down). Deltas are batched until the next `update`.
    pub fn scroll_by(&mut self, delta: f64, max_scroll: f64) {
        if !self.settings.is_smooth() {
            self.current = (self.current + delta).clamp(0.0, max_scroll.max(0.0));
            self.animation = None;
            return;
        }
        self.pending_delta += delta;
    }

    fn tween(&self, target: f64, now: Instant) -> Tween {
        Tween::new(
            self.current,
            target,
            now,
            self.settings.animation_duration,
            self.settings.easing,
        )
    }

    /// Advance to `now` and return the current position
    pub fn update(&mut self, max_scroll: f64, now: Instant) -> f64 {
        let max_scroll = max_scroll.max(0.0);

        if self.pending_delta != 0.0 {
            let target = (self.target() + self.pending_delta).clamp(0.0, max_scroll);
            self.pending_delta = 0.0;
            if target != self.current {
                self.animation = Some(self.tween(target, now));
            }
        }

        if let Some(anim) = &self.animation {
            self.current = anim.value_at(now).min(max_scroll);
            if anim.is_finished(now) {
                self.animation = None;
            }
        }

        // The viewport may have shrunk since the last frame
        self.current = self.current.min(max_scroll);
        self.current
    }

    /// Stop at the current position
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garden_core::EasingType;
    use std::time::Duration;

    fn smooth() -> ScrollSettings {
        ScrollSettings {
            smooth_enabled: true,
            animation_duration: Duration::from_millis(100),
            easing: EasingType::Cubic,
        }
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let settings = ScrollSettings {
            smooth_enabled: false,
            ..smooth()
        };
        let mut animator = ScrollAnimator::new(settings);

        animator.scroll_to(100.0, 200.0, Instant::now());
        assert_eq!(animator.current(), 100.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_reaches_target() {
        let t0 = Instant::now();
        let mut animator = ScrollAnimator::new(smooth());

        animator.scroll_to(100.0, 200.0, t0);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 100.0);

        let mid = animator.update(200.0, t0 + Duration::from_millis(50));
        assert!(mid > 0.0 && mid < 100.0);
        assert_eq!(animator.update(200.0, t0 + Duration::from_millis(100)), 100.0);
        assert!(!animator.needs_update());
    }

    #[test]
    fn test_scroll_by_batching() {
        let t0 = Instant::now();
        let mut animator = ScrollAnimator::new(smooth());

        animator.scroll_by(10.0, 200.0);
        animator.scroll_by(10.0, 200.0);
        animator.scroll_by(10.0, 200.0);
        assert!(animator.needs_update());

        animator.update(200.0, t0);
        assert_eq!(animator.target(), 30.0);
    }

    #[test]
    fn test_scroll_clamp_max() {
        let t0 = Instant::now();
        let mut animator = ScrollAnimator::new(smooth());
        animator.set_position(50.0);
        animator.scroll_to(300.0, 100.0, t0);
        assert_eq!(animator.target(), 100.0);

        animator.scroll_by(-500.0, 100.0);
        animator.update(100.0, t0);
        assert_eq!(animator.target(), 0.0);
    }

    #[test]
    fn test_shrinking_viewport_clamps_position() {
        let mut animator = ScrollAnimator::new(smooth());
        animator.set_position(80.0);
        assert_eq!(animator.update(40.0, Instant::now()), 40.0);
    }
}
