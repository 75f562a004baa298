//! Screen bounds

use serde::{Serialize, Deserialize};

/// The rectangle `[0, width] x [0, height]` that bodies are confined to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: i32,
    pub height: i32,
}

impl ScreenBounds {
    /// Create bounds of the given size in pixels
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Largest allowed top-left x for a body `extent_w` pixels wide
    ///
    /// Negative when the body is wider than the screen.
    pub fn max_x(&self, extent_w: u32) -> f32 {
        (self.width - extent_w as i32) as f32
    }

    /// Largest allowed top-left y for a body `extent_h` pixels tall
    pub fn max_y(&self, extent_h: u32) -> f32 {
        (self.height - extent_h as i32) as f32
    }
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self::new(800, 600)
    }
}
