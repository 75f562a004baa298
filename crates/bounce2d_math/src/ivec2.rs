//! 2D signed integer vector

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct IVec2 {
    pub x: i32,
    pub y: i32,
}

impl IVec2 {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for IVec2 {
    #[inline]
    fn from(v: [i32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl std::ops::Neg for IVec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neg() {
        assert_eq!(-IVec2::new(4, -4), IVec2::new(-4, 4));
    }

    #[test]
    fn test_from_array() {
        assert_eq!(IVec2::from([4, 4]), IVec2::new(4, 4));
    }
}
