//! Core types for bounce2d
//!
//! - [`SpriteSheet`] - frame size and current animation frame within a spritesheet
//! - [`Ball`] - a bouncing sprite: physics body plus sprite clip
//! - [`BallSpawn`] - serializable starting state for a ball
//! - [`BallWorld`] - the ordered collection of balls and the screen they bounce in

mod sprite;
mod ball;
mod spawn;
mod world;

pub use sprite::SpriteSheet;
pub use ball::Ball;
pub use spawn::BallSpawn;
pub use world::BallWorld;

// Re-export commonly used types for convenience
pub use bounce2d_math::{IVec2, Rect, Vec2};
pub use bounce2d_physics::{Body2D, Reflection, ScreenBounds};
