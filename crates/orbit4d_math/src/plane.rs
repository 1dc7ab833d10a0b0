//! Coordinate axes and rotation planes
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, YZ, XW, YW, ZW.
//! The first three are also the rotations available in 3D.

use serde::{Serialize, Deserialize};
use std::fmt;

use crate::TransformError;

/// A coordinate axis in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
    W,
}

impl Axis {
    /// Row/column index of this axis in a homogeneous matrix
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
            Axis::W => 3,
        }
    }
}

/// The 6 rotation planes in 4D space
///
/// A positive angle turns the first-named axis toward the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane - roll (rotation around Z axis in 3D)
    XY,
    /// XZ plane - yaw (rotation around Y axis in 3D)
    XZ,
    /// YZ plane - pitch (rotation around X axis in 3D)
    YZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// All six planes, 3D planes first
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::YZ,
        RotationPlane::XW,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// The two axes spanning this plane, in rotation order
    pub const fn axes(self) -> (Axis, Axis) {
        match self {
            RotationPlane::XY => (Axis::X, Axis::Y),
            RotationPlane::XZ => (Axis::X, Axis::Z),
            RotationPlane::YZ => (Axis::Y, Axis::Z),
            RotationPlane::XW => (Axis::X, Axis::W),
            RotationPlane::YW => (Axis::Y, Axis::W),
            RotationPlane::ZW => (Axis::Z, Axis::W),
        }
    }

    /// Matrix indices of the 2x2 rotation block; the first is always smaller
    #[inline]
    pub const fn indices(self) -> (usize, usize) {
        let (a, b) = self.axes();
        (a.index(), b.index())
    }

    /// Whether the plane reaches into the fourth axis (4D-only rotation)
    #[inline]
    pub const fn involves_w(self) -> bool {
        matches!(self, RotationPlane::XW | RotationPlane::YW | RotationPlane::ZW)
    }

    /// Resolve an axis pair to a plane.
    ///
    /// Returns the plane and the orientation sign: `1.0` when the pair is given
    /// in the plane's own order, `-1.0` when reversed (a positive angle in the
    /// reversed pair is a negative angle in the plane). The same axis twice does
    /// not span a plane and is rejected.
    pub fn from_axes(first: Axis, second: Axis) -> Result<(Self, f32), TransformError> {
        let (lo, hi, sign) = if first.index() < second.index() {
            (first, second, 1.0)
        } else {
            (second, first, -1.0)
        };

        let plane = match (lo, hi) {
            (Axis::X, Axis::Y) => RotationPlane::XY,
            (Axis::X, Axis::Z) => RotationPlane::XZ,
            (Axis::Y, Axis::Z) => RotationPlane::YZ,
            (Axis::X, Axis::W) => RotationPlane::XW,
            (Axis::Y, Axis::W) => RotationPlane::YW,
            (Axis::Z, Axis::W) => RotationPlane::ZW,
            _ => return Err(TransformError::UndefinedRotationPlane { first, second }),
        };

        Ok((plane, sign))
    }
}

impl fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.axes();
        write!(f, "{:?}{:?}", a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_ordered_and_distinct() {
        let mut seen = Vec::new();
        for plane in RotationPlane::ALL {
            let (a, b) = plane.indices();
            assert!(a < b, "{} should have ordered indices", plane);
            assert!(!seen.contains(&(a, b)), "{} shares a block placement", plane);
            seen.push((a, b));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_from_axes_round_trip() {
        for plane in RotationPlane::ALL {
            let (a, b) = plane.axes();
            assert_eq!(RotationPlane::from_axes(a, b).unwrap(), (plane, 1.0));
            assert_eq!(RotationPlane::from_axes(b, a).unwrap(), (plane, -1.0));
        }
    }

    #[test]
    fn test_from_axes_rejects_degenerate_pair() {
        for axis in [Axis::X, Axis::Y, Axis::Z, Axis::W] {
            let err = RotationPlane::from_axes(axis, axis).unwrap_err();
            assert_eq!(err, TransformError::UndefinedRotationPlane { first: axis, second: axis });
        }
    }

    #[test]
    fn test_involves_w() {
        let w_planes: Vec<_> = RotationPlane::ALL.into_iter().filter(|p| p.involves_w()).collect();
        assert_eq!(w_planes, vec![RotationPlane::XW, RotationPlane::YW, RotationPlane::ZW]);
    }

    #[test]
    fn test_display() {
        assert_eq!(RotationPlane::ZW.to_string(), "ZW");
    }
}
