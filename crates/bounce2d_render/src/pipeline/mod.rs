//! Sprite rendering pipeline
//!
//! Draws textured quads given in screen pixels.

pub mod types;
pub mod sprite_pipeline;

pub use types::{ScreenUniforms, SpriteVertex};
pub use sprite_pipeline::SpritePipeline;
