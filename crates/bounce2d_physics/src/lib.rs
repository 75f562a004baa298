//! 2D motion for bounce2d
//!
//! This crate provides the per-tick motion rule for sprites confined to the screen:
//! - [`ScreenBounds`] - the fixed area bodies are confined to
//! - [`Body2D`] - float position, integer velocity, fixed extent
//! - [`Reflection`] - which axes bounced during a step

pub mod body;
pub mod bounds;

// Re-export commonly used types
pub use body::{Body2D, Reflection};
pub use bounds::ScreenBounds;
