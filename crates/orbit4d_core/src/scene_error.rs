//! Scene traversal error types

use std::fmt;

use orbit4d_math::TransformError;

/// Error type for TransformStack misuse
///
/// Both variants mean the push/pop pairing in the draw traversal is wrong.
/// They are never absorbed silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// Pop with nothing pushed
    Empty,
    /// Traversal started or ended with snapshots still on the stack
    Unbalanced { depth: usize },
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::Empty => write!(f, "Transform stack was empty on pop"),
            StackError::Unbalanced { depth } => {
                write!(f, "Transform stack unbalanced: {} snapshot(s) left", depth)
            }
        }
    }
}

impl std::error::Error for StackError {}

/// Error type for drawing a frame
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Push/pop mismatch
    Stack(StackError),
    /// A drawable built an invalid transform
    Transform(TransformError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Stack(err) => write!(f, "Scene stack error: {}", err),
            SceneError::Transform(err) => write!(f, "Scene transform error: {}", err),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Stack(err) => Some(err),
            SceneError::Transform(err) => Some(err),
        }
    }
}

impl From<StackError> for SceneError {
    fn from(err: StackError) -> Self {
        SceneError::Stack(err)
    }
}

impl From<TransformError> for SceneError {
    fn from(err: TransformError) -> Self {
        SceneError::Transform(err)
    }
}
