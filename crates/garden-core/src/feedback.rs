//! Feedback micro-interaction
//!
//! A one-word form: the send action unlocks only for the exact word "Love",
//! then a simulated request runs through loading → success → resetting → idle
//! on chained timers.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::motion::{MotionPreference, Tween};
use crate::timer::Timer;

/// The only accepted input
pub const EXPECTED_WORD: &str = "Love";

pub const LOADING_DELAY: Duration = Duration::from_millis(1050);
pub const SUCCESS_HOLD: Duration = Duration::from_millis(850);
pub const RESET_FADE_DELAY: Duration = Duration::from_millis(360);
/// Content fade while resetting
pub const CONTENT_FADE_DURATION: Duration = Duration::from_millis(350);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackHint {
    /// Looks like the word with a lowercase first letter
    CapitalL,
    Generic,
}

impl FeedbackHint {
    pub fn message(&self) -> &'static str {
        match self {
            FeedbackHint::CapitalL => "Use a capital L: type 'Love'.",
            FeedbackHint::Generic => "Please type 'Love'.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub hint: Option<FeedbackHint>,
}

/// Check the input. Empty input is invalid but shows no hint.
pub fn validate(input: &str) -> Validation {
    if input == EXPECTED_WORD {
        return Validation {
            valid: true,
            hint: None,
        };
    }
    if input.is_empty() {
        return Validation {
            valid: false,
            hint: None,
        };
    }
    let hint = if is_lowercase_l_slip(input) {
        FeedbackHint::CapitalL
    } else {
        FeedbackHint::Generic
    };
    Validation {
        valid: false,
        hint: Some(hint),
    }
}

/// The input is the start of the word typed with a lowercase first letter
/// ("l", "lo", "lov", "love").
fn is_lowercase_l_slip(input: &str) -> bool {
    match input.strip_prefix('l') {
        Some(rest) => EXPECTED_WORD[1..].starts_with(rest),
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackState {
    #[default]
    Idle,
    Loading,
    Success,
}

/// Transitions reported by `tick`, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackEvent {
    Succeeded,
    ResetStarted,
    ResetFinished,
}

/// Next link of the timer chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Succeed,
    StartReset,
    FinishReset,
}

#[derive(Debug, Clone)]
pub struct FeedbackController {
    motion: MotionPreference,
    input: String,
    state: FeedbackState,
    is_resetting: bool,
    content_opacity: Tween,
    timer: Timer,
    next: Option<Step>,
}

impl FeedbackController {
    pub fn new(motion: MotionPreference, now: Instant) -> Self {
        Self {
            motion,
            input: String::new(),
            state: FeedbackState::Idle,
            is_resetting: false,
            content_opacity: Tween::resting(1.0, now),
            timer: Timer::new(),
            next: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    #[inline]
    pub fn state(&self) -> FeedbackState {
        self.state
    }

    /// Content is fading out before the input is cleared
    #[inline]
    pub fn is_resetting(&self) -> bool {
        self.is_resetting
    }

    pub fn validation(&self) -> Validation {
        validate(&self.input)
    }

    pub fn hint(&self) -> Option<FeedbackHint> {
        self.validation().hint
    }

    /// Whether the send control is enabled
    pub fn can_submit(&self) -> bool {
        self.validation().valid && self.state != FeedbackState::Loading
    }

    pub fn content_opacity(&self, now: Instant) -> f64 {
        self.content_opacity.value_at(now)
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            FeedbackState::Idle => "Send",
            FeedbackState::Loading => "Sending…",
            FeedbackState::Success => "Sent",
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self.state {
            FeedbackState::Idle => "Awaiting input...",
            FeedbackState::Loading => "Sending…",
            FeedbackState::Success => "Sent",
        }
    }

    /// Start a simulated send. No-op while loading or for invalid input.
    ///
    /// Any chain left over from a previous send is cancelled first.
    pub fn submit(&mut self, now: Instant) -> bool {
        if !self.validation().valid || self.state == FeedbackState::Loading {
            return false;
        }
        self.timer.cancel();
        self.next = None;

        self.state = FeedbackState::Loading;
        self.schedule(now, LOADING_DELAY, Step::Succeed);
        debug!("feedback submitted");
        true
    }

    fn schedule(&mut self, from: Instant, delay: Duration, step: Step) {
        self.timer.schedule(from, self.motion.delay(delay));
        self.next = Some(step);
    }

    /// Run every chain step that is due at `now`
    pub fn tick(&mut self, now: Instant) -> Vec<FeedbackEvent> {
        let mut events = Vec::new();
        while let Some(fired_at) = self.timer.fire(now) {
            let Some(step) = self.next.take() else {
                break;
            };
            match step {
                Step::Succeed => {
                    self.state = FeedbackState::Success;
                    self.schedule(fired_at, SUCCESS_HOLD, Step::StartReset);
                    events.push(FeedbackEvent::Succeeded);
                }
                Step::StartReset => {
                    self.is_resetting = true;
                    self.content_opacity = self.content_opacity.retarget(
                        0.0,
                        fired_at,
                        self.motion.animation(CONTENT_FADE_DURATION),
                    );
                    self.schedule(fired_at, RESET_FADE_DELAY, Step::FinishReset);
                    events.push(FeedbackEvent::ResetStarted);
                }
                Step::FinishReset => {
                    self.input.clear();
                    self.state = FeedbackState::Idle;
                    self.is_resetting = false;
                    self.content_opacity = self.content_opacity.retarget(
                        1.0,
                        fired_at,
                        self.motion.animation(CONTENT_FADE_DURATION),
                    );
                    events.push(FeedbackEvent::ResetFinished);
                }
            }
            debug!(?step, "feedback step");
        }
        events
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.timer.is_pending() || !self.content_opacity.is_finished(now)
    }

    /// Cancel the pending chain
    pub fn dispose(&mut self) {
        self.timer.cancel();
        self.next = None;
    }
}
