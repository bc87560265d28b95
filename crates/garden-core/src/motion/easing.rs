//! L4 Atomic Layer: Pure easing functions
//!
//! Maps input [0, 1] to output [0, 1] with various acceleration curves.

use serde::{Deserialize, Serialize};

/// Easing curve applied to animation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump to the end at t = 1
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
    /// Cubic Bézier (0.22, 1, 0.36, 1), the settle curve shared by every garden animation
    Settle,
}

/// Control points of the settle curve
pub const SETTLE_CURVE: CubicBezier = CubicBezier::new(0.22, 1.0, 0.36, 1.0);

impl EasingType {
    /// Apply the easing function to a progress value
    ///
    /// Input is clamped to [0, 1]; output is exact at both ends.
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
            EasingType::Settle => SETTLE_CURVE.apply(t),
        }
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// CSS-style cubic Bézier timing function with endpoints (0,0) and (1,1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    const NEWTON_ITERATIONS: usize = 8;
    const EPSILON: f64 = 1e-7;

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    // Bernstein form with P0 = 0 and P3 = 1
    fn sample(t: f64, p1: f64, p2: f64) -> f64 {
        let inv = 1.0 - t;
        3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
    }

    fn slope(t: f64, p1: f64, p2: f64) -> f64 {
        let inv = 1.0 - t;
        3.0 * inv * inv * p1 + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// Find the curve parameter whose x equals `x`
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let err = Self::sample(t, self.x1, self.x2) - x;
            if err.abs() < Self::EPSILON {
                return t;
            }
            let d = Self::slope(t, self.x1, self.x2);
            if d.abs() < Self::EPSILON {
                break;
            }
            t -= err / d;
        }

        // Newton stalled or left the interval: bisect
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let v = Self::sample(t, self.x1, self.x2);
            if (v - x).abs() < Self::EPSILON {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    pub fn apply(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.solve_t(x), self.y1, self.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 6] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
        EasingType::Settle,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            if easing != EasingType::None {
                assert!((easing.apply(0.0) - 0.0).abs() < 0.001, "{:?} at t=0", easing);
            }
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in &ALL[1..] {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev - 1e-9, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_settle_curve_front_loads_motion() {
        // (0.22, 1) pulls the curve well above linear early on
        assert!(EasingType::Settle.apply(0.25) > 0.6);
        assert!(EasingType::Settle.apply(0.5) > 0.9);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(EasingType::Settle.apply(-3.0), 0.0);
        assert_eq!(EasingType::Settle.apply(7.0), 1.0);
        assert_eq!(EasingType::Linear.apply(f64::NAN), 0.0);
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let linear = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for i in 0..=10 {
            let x = i as f64 / 10.0;
            assert!((linear.apply(x) - x).abs() < 1e-4);
        }
    }
}
