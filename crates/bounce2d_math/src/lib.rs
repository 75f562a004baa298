//! 2D Mathematics Library
//!
//! Small value types shared by the bounce2d crates.
//!
//! - [`Vec2`] - floating point position in screen pixels
//! - [`IVec2`] - signed integer vector, used for per-tick velocity
//! - [`Rect`] - integer pixel rectangle (sprite clips and draw destinations)

mod vec2;
mod ivec2;
mod rect;

pub use vec2::Vec2;
pub use ivec2::IVec2;
pub use rect::Rect;
