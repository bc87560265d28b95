//! L4 Atomic Layer: scroll settings

use std::time::Duration;

use garden_core::config::UiConfig;
use garden_core::{EasingType, MotionPreference};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSettings {
    /// Animate keyboard and wheel scrolling
    pub smooth_enabled: bool,
    pub animation_duration: Duration,
    pub easing: EasingType,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self::from_config(&UiConfig::default(), MotionPreference::full())
    }
}

impl ScrollSettings {
    /// Reduced motion turns every scroll into an instant jump
    pub fn from_config(ui: &UiConfig, motion: MotionPreference) -> Self {
        Self {
            smooth_enabled: ui.smooth_scroll && !motion.is_reduced(),
            animation_duration: Duration::from_millis(ui.scroll_animation_ms),
            easing: ui.scroll_easing,
        }
    }

    #[inline]
    pub fn is_smooth(&self) -> bool {
        self.smooth_enabled && !self.animation_duration.is_zero() && self.easing != EasingType::None
    }
}

/// Frame interval for an animation frame rate; 0 falls back to ~60fps
pub fn animation_tick_duration(fps: u32) -> Duration {
    if fps == 0 {
        Duration::from_millis(16)
    } else {
        Duration::from_millis((1000 / fps as u64).max(1))
    }
}
