//! Save / remove actions revealed by the swipe gesture

use std::time::{Duration, Instant};

use tracing::debug;

use crate::motion::{MotionPreference, Tween};
use crate::swipe::SwipeController;
use crate::timer::Timer;

pub const SAVE_CLOSE_DURATION: Duration = Duration::from_millis(280);
pub const REMOVE_CLOSE_DURATION: Duration = Duration::from_millis(200);
pub const FADE_DURATION: Duration = Duration::from_millis(200);
/// How long "removed" stays before the item comes back
pub const REMOVE_RESET_DELAY: Duration = Duration::from_millis(1800);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionState {
    #[default]
    Default,
    Saved,
    Removed,
}

impl ActionState {
    pub fn save_label(&self) -> &'static str {
        match self {
            ActionState::Saved => "Saved",
            _ => "Save",
        }
    }

    pub fn remove_label(&self) -> &'static str {
        match self {
            ActionState::Removed => "Removed",
            _ => "Remove",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActionResolver {
    motion: MotionPreference,
    state: ActionState,
    is_saved: bool,
    opacity: Tween,
    reset: Timer,
}

impl ActionResolver {
    pub fn new(motion: MotionPreference, now: Instant) -> Self {
        Self {
            motion,
            state: ActionState::Default,
            is_saved: false,
            opacity: Tween::resting(1.0, now),
            reset: Timer::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> ActionState {
        self.state
    }

    /// Whether the item carries the saved mark; survives a later reset to Default
    #[inline]
    pub fn is_saved(&self) -> bool {
        self.is_saved
    }

    /// Caption above the item title
    pub fn item_label(&self) -> &'static str {
        if self.is_saved {
            "Saved item"
        } else {
            "Item"
        }
    }

    pub fn opacity(&self, now: Instant) -> f64 {
        self.opacity.value_at(now)
    }

    pub fn reset_pending(&self) -> bool {
        self.reset.is_pending()
    }

    pub fn save(&mut self, swipe: &mut SwipeController, now: Instant) {
        self.state = ActionState::Saved;
        self.is_saved = true;
        swipe.close(SAVE_CLOSE_DURATION, now);
        debug!("item saved");
    }

    /// Mark removed, fade the item out and schedule its return.
    ///
    /// A second remove before the reset fires replaces the pending reset.
    pub fn remove(&mut self, swipe: &mut SwipeController, now: Instant) {
        self.state = ActionState::Removed;
        self.is_saved = false;
        swipe.close(REMOVE_CLOSE_DURATION, now);
        self.opacity = self
            .opacity
            .retarget(0.0, now, self.motion.animation(FADE_DURATION));
        self.reset.schedule(now, self.motion.delay(REMOVE_RESET_DELAY));
        debug!(delay_ms = self.motion.delay(REMOVE_RESET_DELAY).as_millis() as u64, "item removed");
    }

    /// Fire the reset timer when due. Returns true when the state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(fired_at) = self.reset.fire(now) else {
            return false;
        };
        self.state = ActionState::Default;
        self.opacity = self
            .opacity
            .retarget(1.0, fired_at, self.motion.animation(FADE_DURATION));
        debug!("removed item restored");
        true
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.reset.is_pending() || !self.opacity.is_finished(now)
    }

    pub fn dispose(&mut self) {
        self.reset.cancel();
    }
}
