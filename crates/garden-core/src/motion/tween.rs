//! L3 Molecular Layer: a single value animation
//!
//! A `Tween` is the handle for one running animation. Stopping it means
//! sampling the current value and dropping the handle; nothing keeps running
//! in the background.

use std::time::{Duration, Instant};

use super::easing::EasingType;
use super::timing::{is_complete_at, lerp, progress_at};

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start: Instant,
    duration: Duration,
    easing: EasingType,
}

impl Tween {
    pub fn new(from: f64, to: f64, start: Instant, duration: Duration, easing: EasingType) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Tween on the shared settle curve
    pub fn settle(from: f64, to: f64, start: Instant, duration: Duration) -> Self {
        Self::new(from, to, start, duration, EasingType::Settle)
    }

    /// A tween that is already at rest on `value`
    pub fn resting(value: f64, now: Instant) -> Self {
        Self::new(value, value, now, Duration::ZERO, EasingType::Linear)
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Interpolated value at `now`
    pub fn value_at(&self, now: Instant) -> f64 {
        if self.is_finished(now) {
            return self.to;
        }
        let t = progress_at(self.start, now, self.duration);
        lerp(self.from, self.to, self.easing.apply(t))
    }

    /// Eased progress in [0, 1] at `now`
    pub fn progress(&self, now: Instant) -> f64 {
        self.easing.apply(progress_at(self.start, now, self.duration))
    }

    #[inline]
    pub fn is_finished(&self, now: Instant) -> bool {
        is_complete_at(self.start, now, self.duration)
    }

    /// Instant at which the tween reaches its target
    pub fn end(&self) -> Instant {
        self.start + self.duration
    }

    /// Start a new tween from wherever this one currently is
    pub fn retarget(&self, to: f64, now: Instant, duration: Duration) -> Self {
        Self::new(self.value_at(now), to, now, duration, self.easing)
    }
}
