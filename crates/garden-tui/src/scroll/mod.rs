//! Smooth scrolling for the depth viewport
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `config` - Scroll settings derived from `[ui]` and the motion preference
//! - easing and timing atoms live in `garden_core::motion`
//!
//! ## L3 Molecular Layer
//! - `animation` - Animation controller combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use garden_tui::scroll::{ScrollAnimator, ScrollSettings};
//!
//! let settings = ScrollSettings::from_config(&config.ui, motion);
//! let mut animator = ScrollAnimator::new(settings);
//!
//! animator.scroll_by(3.0);
//!
//! // In main loop, update each frame and get current position
//! let top = animator.update(max_scroll, Instant::now());
//! ```

// L4 Atomic Layer
pub mod config;

// L3 Molecular Layer
pub mod animation;

pub use animation::ScrollAnimator;
pub use config::ScrollSettings;
