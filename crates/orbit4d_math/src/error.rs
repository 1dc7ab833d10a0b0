//! Transform error types

use std::fmt;

use crate::{Axis, RotationPlane};

/// Error type for transform construction
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The axis pair does not span one of the six rotation planes
    UndefinedRotationPlane { first: Axis, second: Axis },
    /// The plane uses an axis the transform does not have (W plane on a 3D transform)
    PlaneOutOfRank { plane: RotationPlane, rank: usize },
    /// A translate/scale vector has the wrong number of components
    DimensionMismatch { expected: usize, actual: usize },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::UndefinedRotationPlane { first, second } => {
                write!(f, "Undefined rotation plane: {:?}{:?}", first, second)
            }
            TransformError::PlaneOutOfRank { plane, rank } => {
                write!(f, "Rotation plane {} is not available in {}D", plane, rank)
            }
            TransformError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {} components, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for TransformError {}
