//! Points in 4D space

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// A point or offset in 4D; 3D geometry leaves `w` at 0
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// `[x, y, z, w]`, the vertex buffer layout
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Homogeneous form `[x, y, z, w, 1]` for a 5x5 transform
    #[inline]
    pub const fn to_homogeneous(self) -> [f32; 5] {
        [self.x, self.y, self.z, self.w, 1.0]
    }

    /// Euclidean length
    pub fn length(self) -> f32 {
        self.to_array().iter().map(|c| c * c).sum::<f32>().sqrt()
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl std::ops::Sub for Vec4 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z, self.w - other.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        assert!((Vec4::new(1.0, 1.0, 1.0, 1.0).length() - 2.0).abs() < 0.0001);
        assert_eq!(Vec4::ZERO.length(), 0.0);
    }

    #[test]
    fn test_array_conversion() {
        let v = Vec4::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.to_homogeneous(), [1.0, 2.0, 3.0, 4.0, 1.0]);
    }

    #[test]
    fn test_sub() {
        let a = Vec4::new(5.0, 6.0, 7.0, 8.0);
        let b = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a - b, Vec4::new(4.0, 4.0, 4.0, 4.0));
    }
}
