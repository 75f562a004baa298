//! GPU-compatible data types for the sprite pipeline
//!
//! These types match the layouts in `sprite.wgsl`.

use bytemuck::{Pod, Zeroable};

/// A quad corner in screen pixels with its texture coordinate
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    /// Position in pixels, origin top-left, y down
    pub position: [f32; 2],
    /// Texture coordinate in [0, 1]
    pub tex_coords: [f32; 2],
}

impl SpriteVertex {
    pub fn new(position: [f32; 2], tex_coords: [f32; 2]) -> Self {
        Self {
            position,
            tex_coords,
        }
    }
}

/// Logical screen size used to map pixels to clip space
/// Layout: 16 bytes (must match sprite.wgsl ScreenUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ScreenUniforms {
    pub size: [f32; 2],
    pub _padding: [f32; 2],
}

impl ScreenUniforms {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: [width as f32, height as f32],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ScreenUniforms {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_sprite_vertex_size() {
        // 2 floats position + 2 floats uv = 16 bytes
        assert_eq!(size_of::<SpriteVertex>(), 16);
    }

    #[test]
    fn test_screen_uniforms_size() {
        assert_eq!(size_of::<ScreenUniforms>(), 16);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<SpriteVertex>(), 4);
        assert_eq!(std::mem::align_of::<ScreenUniforms>(), 4);
    }
}
