//! Rendering pipeline components
//!
//! This module contains the GPU data layouts and the line-list pipeline that
//! draws polytope wireframes.

pub mod types;
pub mod wireframe_pipeline;

// Re-export types
pub use types::{FrameUniforms, ModelUniforms, Vertex4D, MODEL_UNIFORM_STRIDE};

// Re-export pipelines
pub use wireframe_pipeline::WireframePipeline;
