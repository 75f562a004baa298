//! Integer pixel rectangle

use serde::{Serialize, Deserialize};

/// Axis-aligned rectangle in pixels: top-left corner plus size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    /// Bottom edge (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Corners in normalized [0, 1] coordinates relative to a `width` x `height` area.
    ///
    /// Returns `[left, top, right, bottom]`. Used to turn a sprite clip into texture coordinates.
    pub fn normalized(&self, width: u32, height: u32) -> [f32; 4] {
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        [
            self.x as f32 / w,
            self.y as f32 / h,
            self.right() as f32 / w,
            self.bottom() as f32 / h,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(288, 88, 512, 512);
        assert_eq!(r.right(), 800);
        assert_eq!(r.bottom(), 600);
        assert!(!r.is_empty());
        assert!(Rect::new(0, 0, 0, 10).is_empty());
    }

    #[test]
    fn test_normalized_full_texture() {
        let r = Rect::new(0, 0, 512, 512);
        assert_eq!(r.normalized(512, 512), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_normalized_second_frame() {
        let r = Rect::new(512, 0, 512, 512);
        assert_eq!(r.normalized(1024, 512), [0.5, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_normalized_zero_area_does_not_divide_by_zero() {
        let r = Rect::new(0, 0, 4, 4);
        let n = r.normalized(0, 0);
        assert!(n.iter().all(|c| c.is_finite()));
    }
}
