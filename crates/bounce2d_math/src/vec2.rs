//! 2D floating point vector

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::IVec2;

/// 2D Vector with x, y components in screen space (y grows downward)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new Vec2
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Truncate both components toward zero
    #[inline]
    pub fn truncate(self) -> IVec2 {
        IVec2::new(self.x as i32, self.y as i32)
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

/// Integer velocity is added component-wise to the float position
impl std::ops::AddAssign<IVec2> for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: IVec2) {
        self.x += other.x as f32;
        self.y += other.y as f32;
    }
}
