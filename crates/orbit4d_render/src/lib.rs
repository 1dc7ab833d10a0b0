//! Orbit Rendering Library
//!
//! This crate turns the camera state into the matrices the GPU consumes and
//! draws polytope wireframes with wgpu.
//!
//! ## Key Components
//!
//! - [`camera::CameraController`] - Live view transform, zoom/field of view and reset
//! - [`projection::ProjectionPipeline`] - Model-view composition and perspective projection
//! - [`split::ProjectionSplit`] - 5x5 model-view packed into a 4x4 and a 3x3 uniform
//! - [`recorder::FrameRecorder`] - Collects a frame's draw commands from the scene traversal
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::WireframePipeline`] - Line-list render pipeline
//! - [`mesh::PolytopeMeshes`] - GPU vertex/index buffers for every polytope

pub mod camera;
pub mod context;
pub mod mesh;
pub mod pipeline;
pub mod projection;
pub mod recorder;
pub mod split;

pub use camera::{CameraController, CameraSettings, CameraState, ZoomMode};
pub use projection::{FrameMatrices, ProjectionPipeline};
pub use recorder::{DrawCommand, FrameRecorder, ModelViewUpload};
pub use split::ProjectionSplit;

// Re-export core types for convenience
pub use orbit4d_core::{Polytope, RotationPlane, Transform, Transform3D, Transform4D, Vec4};
