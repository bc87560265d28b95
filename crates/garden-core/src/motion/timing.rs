//! L4 Atomic Layer: Time calculation utilities for animations
//!
//! Every function takes the current instant explicitly so callers (and tests)
//! control the clock.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) at `now`
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]; 1.0 for a zero duration
#[inline]
pub fn progress_at(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation started at `start` has run its course
#[inline]
pub fn is_complete_at(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Clamp to [min, max], mapping NaN to `min`
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(-160.0, 0.0, 1.0) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress_at(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_before_start_is_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let now = start - Duration::from_millis(500);
        assert_eq!(progress_at(start, now, Duration::from_millis(300)), 0.0);
    }

    #[test]
    fn test_progress_midway() {
        let start = Instant::now();
        let now = start + Duration::from_millis(150);
        assert!((progress_at(start, now, Duration::from_millis(300)) - 0.5).abs() < 1e-9);
        assert!(!is_complete_at(start, now, Duration::from_millis(300)));
        assert!(is_complete_at(start, start + Duration::from_millis(300), Duration::from_millis(300)));
    }
}
