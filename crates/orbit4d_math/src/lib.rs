//! 3D/4D Transform Algebra
//!
//! This crate provides the homogeneous transform types used to orbit a camera
//! around 3D and 4D polytopes.
//!
//! ## Core Types
//!
//! - [`Transform`] - (N+1)x(N+1) affine matrix, instantiated as [`Transform3D`] (4x4)
//!   and [`Transform4D`] (5x5)
//! - [`RotationPlane`] - The 6 coordinate planes a rotation can act in
//! - [`Axis`] - The 4 coordinate axes
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`TransformError`] - Rejected constructions (bad plane, wrong vector length)

mod vec4;
mod plane;
mod error;
pub mod transform;

pub use vec4::Vec4;
pub use plane::{Axis, RotationPlane};
pub use error::TransformError;
pub use transform::{Transform, Transform3D, Transform4D};
