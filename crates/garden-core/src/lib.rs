pub mod actions;
pub mod config;
pub mod detail;
pub mod error;
pub mod feedback;
pub mod garden;
pub mod geometry;
pub mod motion;
pub mod navigation;
pub mod scroll;
pub mod stage;
pub mod swipe;
pub mod timer;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use garden::{Garden, TickReport};
pub use geometry::{Element, LayoutSnapshot, MeasurePort, Rect};
pub use motion::{EasingType, MotionPreference};
