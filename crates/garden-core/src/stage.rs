//! Scroll progress to per-element reveal stages

use serde::Serialize;

use crate::motion::timing::clamp;

/// Map `progress` onto the ramp between `start` and `end`.
///
/// Below `start` the stage is 0, above `end` it is 1, linear in between.
/// A degenerate ramp (`start == end`) is always 0.
pub fn stage(progress: f64, start: f64, end: f64) -> f64 {
    if start == end {
        return 0.0;
    }
    clamp((progress - start) / (end - start), 0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub start: f64,
    pub end: f64,
}

impl Breakpoints {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn stage(&self, progress: f64) -> f64 {
        stage(progress, self.start, self.end)
    }
}

pub const HERO: Breakpoints = Breakpoints::new(0.05, 0.2);
pub const RIGHT: Breakpoints = Breakpoints::new(0.25, 0.4);
pub const SECOND: Breakpoints = Breakpoints::new(0.4, 0.55);
pub const FOOTER: Breakpoints = Breakpoints::new(0.6, 0.75);
pub const FOOTER_INNER: Breakpoints = Breakpoints::new(0.68, 0.84);

pub const DEPTH_BREAKPOINTS: [Breakpoints; 5] = [HERO, RIGHT, SECOND, FOOTER, FOOTER_INNER];

/// Minimum visible fill of the progress bar
pub const PROGRESS_BAR_FLOOR: f64 = 0.06;

/// The five reveal stages of the depth viewport
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DepthStages {
    pub progress: f64,
    pub hero: f64,
    pub right: f64,
    pub second: f64,
    pub footer: f64,
    pub footer_inner: f64,
}

impl DepthStages {
    pub fn from_progress(progress: f64) -> Self {
        Self {
            progress: clamp(progress, 0.0, 1.0),
            hero: HERO.stage(progress),
            right: RIGHT.stage(progress),
            second: SECOND.stage(progress),
            footer: FOOTER.stage(progress),
            footer_inner: FOOTER_INNER.stage(progress),
        }
    }

    /// Vertical rise of the hero block
    pub fn hero_rise(&self) -> f64 {
        (1.0 - self.hero) * 10.0
    }

    /// Horizontal shift of the right block; slides in from the right
    pub fn right_shift(&self) -> f64 {
        (1.0 - self.right) * 160.0
    }

    /// Horizontal shift of the second block; slides in from the left
    pub fn second_shift(&self) -> f64 {
        (1.0 - self.second) * -160.0
    }

    pub fn footer_rise(&self) -> f64 {
        (1.0 - self.footer) * 24.0
    }

    pub fn footer_inner_rise(&self) -> f64 {
        (1.0 - self.footer_inner) * 18.0
    }

    /// Fraction of the progress bar to fill
    pub fn bar_fill(&self) -> f64 {
        self.progress.max(PROGRESS_BAR_FLOOR)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_ramp() {
        assert_eq!(stage(0.0, 0.25, 0.4), 0.0);
        assert!((stage(0.325, 0.25, 0.4) - 0.5).abs() < 1e-9);
        assert_eq!(stage(0.9, 0.25, 0.4), 1.0);
    }

    #[test]
    fn test_stages_json_fields() {
        let json = DepthStages::from_progress(0.5).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["progress"], 0.5);
        assert_eq!(value["hero"], 1.0);
        assert_eq!(value["footer"], 0.0);
    }

    #[test]
    fn test_degenerate_range_is_zero() {
        assert_eq!(stage(0.5, 0.5, 0.5), 0.0);
        assert_eq!(stage(1.0, 0.3, 0.3), 0.0);
        assert_eq!(stage(-1.0, 0.3, 0.3), 0.0);
    }

    #[test]
    fn test_stage_monotonic() {
        for bp in DEPTH_BREAKPOINTS {
            let mut prev = bp.stage(-0.5);
            for i in -50..=150 {
                let p = i as f64 / 100.0;
                let s = bp.stage(p);
                assert!(s >= prev, "{:?} decreased at {}", bp, p);
                prev = s;
            }
        }
    }

    #[test]
    fn test_stage_outside_ramp_is_exact() {
        for bp in DEPTH_BREAKPOINTS {
            for p in [-10.0, 0.0, bp.start - 0.001, bp.start] {
                assert_eq!(bp.stage(p), 0.0, "{:?} at {}", bp, p);
            }
            for p in [bp.end, bp.end + 0.001, 1.0, 10.0] {
                assert_eq!(bp.stage(p), 1.0, "{:?} at {}", bp, p);
            }
        }
    }

    #[test]
    fn test_nan_progress_is_hidden() {
        assert_eq!(stage(f64::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_depth_stages_sequence() {
        let stages = DepthStages::from_progress(0.45);
        assert_eq!(stages.hero, 1.0);
        assert_eq!(stages.right, 1.0);
        assert!(stages.second > 0.0 && stages.second < 1.0);
        assert_eq!(stages.footer, 0.0);
        assert_eq!(stages.footer_inner, 0.0);
    }

    #[test]
    fn test_offsets_rest_at_zero_when_revealed() {
        let stages = DepthStages::from_progress(1.0);
        assert_eq!(stages.hero_rise(), 0.0);
        assert_eq!(stages.right_shift(), 0.0);
        assert_eq!(stages.second_shift(), 0.0);
        assert_eq!(stages.footer_rise(), 0.0);
        assert_eq!(stages.footer_inner_rise(), 0.0);

        let hidden = DepthStages::from_progress(0.0);
        assert_eq!(hidden.right_shift(), 160.0);
        assert_eq!(hidden.second_shift(), -160.0);
        assert_eq!(hidden.bar_fill(), PROGRESS_BAR_FLOOR);
    }
}
