//! Transform stack for hierarchical drawing
//!
//! Drawables push the current model-view, layer their own local transform on
//! top, draw, then pop back to the parent's exact matrix. Siblings therefore
//! never see each other's adjustments.

use orbit4d_math::Transform;

use crate::StackError;

/// LIFO of model-view snapshots
///
/// Snapshots are copies: mutating the live transform after a push never
/// changes what a later pop returns.
#[derive(Clone, Debug, Default)]
pub struct TransformStack<const S: usize> {
    snapshots: Vec<Transform<S>>,
}

impl<const S: usize> TransformStack<S> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { snapshots: Vec::new() }
    }

    /// Save a copy of `transform`
    pub fn push(&mut self, transform: &Transform<S>) {
        self.snapshots.push(*transform);
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Result<Transform<S>, StackError> {
        self.snapshots.pop().ok_or(StackError::Empty)
    }

    /// Number of snapshots currently held
    #[inline]
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether nothing is pushed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Fail with [`StackError::Unbalanced`] unless the stack is empty
    pub fn ensure_empty(&self) -> Result<(), StackError> {
        if self.snapshots.is_empty() {
            Ok(())
        } else {
            Err(StackError::Unbalanced { depth: self.snapshots.len() })
        }
    }
}
