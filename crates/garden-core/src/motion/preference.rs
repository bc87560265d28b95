//! L4 Atomic Layer: reduced-motion preference

use std::time::Duration;

/// Shortest animation used when reduced motion is requested.
///
/// Kept above zero so every animation still produces a start and an end frame.
pub const REDUCED_ANIMATION: Duration = Duration::from_millis(10);

/// Whether the user asked for reduced motion.
///
/// Passed to every controller at construction; all durations are derived from
/// it so timing decisions stay pure functions of (preference, inputs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionPreference {
    reduced: bool,
}

impl MotionPreference {
    pub const fn new(reduced: bool) -> Self {
        Self { reduced }
    }

    pub const fn full() -> Self {
        Self::new(false)
    }

    pub const fn reduced() -> Self {
        Self::new(true)
    }

    #[inline]
    pub const fn is_reduced(&self) -> bool {
        self.reduced
    }

    /// Duration of a visual animation
    #[inline]
    pub fn animation(&self, nominal: Duration) -> Duration {
        if self.reduced {
            REDUCED_ANIMATION
        } else {
            nominal
        }
    }

    /// Delay of a timer step
    #[inline]
    pub fn delay(&self, nominal: Duration) -> Duration {
        if self.reduced {
            Duration::ZERO
        } else {
            nominal
        }
    }
}
