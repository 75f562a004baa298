//! 2D Sprite Rendering Library
//!
//! This crate provides the wgpu-based pipeline for drawing clipped regions of a
//! spritesheet texture to screen-space rectangles.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`texture::Texture`] - Image decoding and GPU upload
//! - [`renderable::SpriteBatch`] - CPU-side quads for one frame
//! - [`pipeline::SpritePipeline`] - Textured quad rendering in pixel coordinates

pub mod context;
pub mod texture;
pub mod renderable;
pub mod pipeline;

pub use context::{ContextError, RenderContext};
pub use texture::{decode_image, png_decoding_available, Texture, TextureError};
pub use renderable::{DrawCall, SpriteBatch, TextureId};

// Re-export geometry types used in the public API
pub use bounce2d_math::Rect;
