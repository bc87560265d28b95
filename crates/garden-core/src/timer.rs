//! One-shot deadline timers driven by an injected clock

use std::time::{Duration, Instant};

/// A single pending deadline.
///
/// Scheduling replaces whatever was pending, so an owner holding one `Timer`
/// per logical timeout can never have two of them in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Schedule the timer `delay` after `from`, cancelling any pending deadline
    pub fn schedule(&mut self, from: Instant, delay: Duration) {
        self.deadline = Some(from + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the deadline and disarms the timer if it has passed at `now`
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                Some(deadline)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.schedule(t0, Duration::from_millis(100));

        assert!(timer.fire(t0 + Duration::from_millis(99)).is_none());
        assert_eq!(
            timer.fire(t0 + Duration::from_millis(150)),
            Some(t0 + Duration::from_millis(100))
        );
        assert!(timer.fire(t0 + Duration::from_millis(200)).is_none());
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.schedule(t0, Duration::from_millis(100));
        timer.schedule(t0 + Duration::from_millis(50), Duration::from_millis(100));

        assert!(timer.fire(t0 + Duration::from_millis(120)).is_none());
        assert!(timer.fire(t0 + Duration::from_millis(150)).is_some());
    }

    #[test]
    fn test_zero_delay_fires_immediately() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.schedule(t0, Duration::ZERO);
        assert!(timer.fire(t0).is_some());
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.schedule(t0, Duration::ZERO);
        timer.cancel();
        assert!(!timer.is_pending());
        assert!(timer.fire(t0 + Duration::from_secs(1)).is_none());
    }
}
