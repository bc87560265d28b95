//! Motion primitives shared by every interaction controller
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (cubic, quintic, exponential, settle Bézier)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `preference` - Reduced-motion preference and duration collapsing
//!
//! ## L3 Molecular Layer
//! - `tween` - One running value animation
//!
//! # Usage
//!
//! ```ignore
//! use garden_core::motion::{MotionPreference, Tween};
//!
//! let pref = MotionPreference::full();
//! let tween = Tween::settle(0.0, -120.0, now, pref.animation(Duration::from_millis(300)));
//!
//! // Each frame
//! let offset = tween.value_at(now);
//! ```

// L4 Atomic Layer
pub mod easing;
pub mod preference;
pub mod timing;

// L3 Molecular Layer
pub mod tween;

pub use easing::{CubicBezier, EasingType, SETTLE_CURVE};
pub use preference::{MotionPreference, REDUCED_ANIMATION};
pub use tween::Tween;
