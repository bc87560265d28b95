//! Swipe-to-reveal gesture controller
//!
//! Phases: idle → dragging → settling → idle, with a resting open/closed flag.
//! The panel offset is always within `[-max_reveal, 0]`.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::geometry::{Element, MeasurePort};
use crate::motion::{MotionPreference, Tween};

/// Settle after a drag is released
pub const SETTLE_DURATION: Duration = Duration::from_millis(300);
/// Hint: reveal the actions
pub const HINT_OPEN_DURATION: Duration = Duration::from_millis(320);
/// Hint: hide the actions again after the reveal finished
pub const HINT_CLOSE_DURATION: Duration = Duration::from_millis(320);
/// Hint pressed while the panel is already open
pub const HINT_DISMISS_DURATION: Duration = Duration::from_millis(260);

/// Reveal distance and open/close threshold for one item width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeMetrics {
    pub width: f64,
    pub max_reveal: f64,
    pub threshold: f64,
}

impl SwipeMetrics {
    pub fn from_width(width: f64) -> Self {
        let width = width.max(0.0);
        let max_reveal = (width * 0.6).min((width * 0.55).max(160.0));
        let threshold = (max_reveal * 0.6).min(width * 0.4);
        Self {
            width,
            max_reveal,
            threshold,
        }
    }

    fn measure(measure: &impl MeasurePort) -> Option<Self> {
        measure.width(Element::SwipeItem).map(Self::from_width)
    }

    #[inline]
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(-self.max_reveal, 0.0)
    }

    /// Whether a released offset should settle open
    #[inline]
    pub fn should_open(&self, offset: f64) -> bool {
        offset.abs() > self.threshold && offset < 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    Dragging,
    Settling,
}

#[derive(Debug, Clone)]
struct Drag {
    pointer_id: u64,
    start_x: f64,
    start_offset: f64,
    metrics: SwipeMetrics,
}

/// What happens once the running settle animation completes
#[derive(Debug, Clone, Copy, PartialEq)]
enum AfterSettle {
    Rest,
    /// Second step of the discovery hint
    AutoClose,
}

#[derive(Debug, Clone)]
struct Settle {
    tween: Tween,
    then: AfterSettle,
}

#[derive(Debug, Clone)]
pub struct SwipeController {
    motion: MotionPreference,
    offset: f64,
    is_open: bool,
    drag: Option<Drag>,
    settle: Option<Settle>,
}

impl SwipeController {
    pub fn new(motion: MotionPreference) -> Self {
        Self {
            motion,
            offset: 0.0,
            is_open: false,
            drag: None,
            settle: None,
        }
    }

    /// Current horizontal translation of the panel
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Resting state decided by the last gesture or programmatic action
    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn phase(&self) -> SwipePhase {
        if self.drag.is_some() {
            SwipePhase::Dragging
        } else if self.settle.is_some() {
            SwipePhase::Settling
        } else {
            SwipePhase::Idle
        }
    }

    /// Target of the running settle animation, if any
    pub fn settle_target(&self) -> Option<f64> {
        self.settle.as_ref().map(|s| s.tween.target())
    }

    /// Freeze the running settle animation at its current value
    fn stop_settle(&mut self, now: Instant) {
        if let Some(settle) = self.settle.take() {
            self.offset = settle.tween.value_at(now);
        }
    }

    fn start_settle(&mut self, to: f64, duration: Duration, then: AfterSettle, now: Instant) {
        self.stop_settle(now);
        self.settle = Some(Settle {
            tween: Tween::settle(self.offset, to, now, self.motion.animation(duration)),
            then,
        });
    }

    /// Pointer pressed on the item. No-op when the item has no geometry yet.
    pub fn pointer_down(
        &mut self,
        pointer_id: u64,
        x: f64,
        measure: &impl MeasurePort,
        now: Instant,
    ) -> bool {
        let Some(metrics) = SwipeMetrics::measure(measure) else {
            return false;
        };
        self.stop_settle(now);

        let start_offset = if self.is_open {
            -metrics.max_reveal
        } else {
            metrics.clamp_offset(self.offset)
        };
        self.drag = Some(Drag {
            pointer_id,
            start_x: x,
            start_offset,
            metrics,
        });
        debug!(pointer_id, x, start_offset, "swipe drag started");
        true
    }

    /// Pointer moved. Events from a pointer other than the captured one are ignored.
    pub fn pointer_move(&mut self, pointer_id: u64, x: f64) -> bool {
        let Some(drag) = self.drag.as_ref() else {
            return false;
        };
        if drag.pointer_id != pointer_id {
            return false;
        }
        self.offset = drag.metrics.clamp_offset(drag.start_offset + (x - drag.start_x));
        true
    }

    /// Pointer released, cancelled or left the item.
    ///
    /// Returns the open/closed classification, or `None` when no drag was active.
    pub fn pointer_up(&mut self, now: Instant) -> Option<bool> {
        let drag = self.drag.take()?;
        let should_open = drag.metrics.should_open(self.offset);
        let target = if should_open {
            -drag.metrics.max_reveal
        } else {
            0.0
        };
        debug!(
            offset = self.offset,
            threshold = drag.metrics.threshold,
            should_open,
            "swipe released"
        );
        self.is_open = should_open;
        self.start_settle(target, SETTLE_DURATION, AfterSettle::Rest, now);
        Some(should_open)
    }

    /// Play the discovery hint: reveal, then hide again once the reveal finishes.
    ///
    /// When already open the hint just closes the panel. Under reduced motion
    /// the panel stays revealed.
    pub fn hint(&mut self, measure: &impl MeasurePort, now: Instant) -> bool {
        let Some(metrics) = SwipeMetrics::measure(measure) else {
            return false;
        };
        self.drag = None;

        if self.is_open {
            self.is_open = false;
            self.start_settle(0.0, HINT_DISMISS_DURATION, AfterSettle::Rest, now);
            return true;
        }

        let then = if self.motion.is_reduced() {
            AfterSettle::Rest
        } else {
            AfterSettle::AutoClose
        };
        self.is_open = true;
        self.start_settle(-metrics.max_reveal, HINT_OPEN_DURATION, then, now);
        debug!(max_reveal = metrics.max_reveal, "swipe hint started");
        true
    }

    /// Reveal the actions without a gesture
    pub fn open(&mut self, measure: &impl MeasurePort, now: Instant) -> bool {
        let Some(metrics) = SwipeMetrics::measure(measure) else {
            return false;
        };
        self.drag = None;
        self.is_open = true;
        self.start_settle(-metrics.max_reveal, SETTLE_DURATION, AfterSettle::Rest, now);
        true
    }

    /// Animate the panel closed over `duration`
    pub fn close(&mut self, duration: Duration, now: Instant) {
        self.drag = None;
        self.is_open = false;
        self.start_settle(0.0, duration, AfterSettle::Rest, now);
    }

    /// Advance the settle animation
    pub fn tick(&mut self, now: Instant) {
        while let Some(settle) = self.settle.as_ref() {
            self.offset = settle.tween.value_at(now);
            if !settle.tween.is_finished(now) {
                return;
            }

            let finished = settle.tween.clone();
            let then = settle.then;
            self.settle = None;
            if then == AfterSettle::AutoClose {
                // Chained on completion, timed from the moment the reveal ended
                self.is_open = false;
                self.settle = Some(Settle {
                    tween: Tween::settle(
                        finished.target(),
                        0.0,
                        finished.end(),
                        self.motion.animation(HINT_CLOSE_DURATION),
                    ),
                    then: AfterSettle::Rest,
                });
            }
        }
    }

    /// Whether frames are still needed to finish an animation
    pub fn is_animating(&self) -> bool {
        self.settle.is_some()
    }

    /// Stop every animation and release the pointer
    pub fn dispose(&mut self) {
        self.settle = None;
        self.drag = None;
    }
}
