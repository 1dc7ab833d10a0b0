//! Core scene types for the orbit4d viewer
//!
//! This crate provides everything between the camera and the GPU:
//!
//! - [`TransformStack`] - LIFO of model-view snapshots for hierarchical drawing
//! - [`Polytope`] - Static line/square/cube/tesseract geometry
//! - [`Drawable`] / [`DrawTarget`] - The draw contract and the backend seam
//! - [`PolytopeDrawable`] - A coloured polytope with an optional local transform and spin
//! - [`SceneContext`] - The live model-view plus its stack for one frame
//! - [`DrawableSet`] - Ordered list of drawables traversed once per frame

mod scene_error;
mod stack;
mod shapes;
mod drawable;
mod scene;

pub use scene_error::{SceneError, StackError};
pub use stack::TransformStack;
pub use shapes::Polytope;
pub use drawable::{DrawTarget, Drawable, PolytopeDrawable, Spin};
pub use scene::{DrawableSet, SceneContext};

// Re-export commonly used types from orbit4d_math for convenience
pub use orbit4d_math::{RotationPlane, Transform, Transform3D, Transform4D, TransformError, Vec4};
