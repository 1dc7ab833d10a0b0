//! GPU-compatible data types for the wireframe pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

use crate::ProjectionSplit;
use orbit4d_math::Transform3D;

/// Byte distance between consecutive [`ModelUniforms`] in the dynamic-offset buffer
///
/// Matches the default `min_uniform_buffer_offset_alignment`.
pub const MODEL_UNIFORM_STRIDE: u64 = 256;

/// A polytope vertex
///
/// Every polytope shares this layout; unused axes are 0.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex4D {
    /// Position in 4D space (x, y, z, w)
    pub position: [f32; 4],
}

impl Vertex4D {
    pub fn new(position: [f32; 4]) -> Self {
        Self { position }
    }
}

/// Uniforms shared by every draw in a frame
/// Layout: 80 bytes total (must match wireframe.wgsl FrameUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    /// Column-major projection matrix (64 bytes)
    pub projection: [[f32; 4]; 4],
    /// x: focal length, y: rank (3 or 4), zw: padding (16 bytes)
    pub params: [f32; 4],
}

impl FrameUniforms {
    pub fn new(projection: &Transform3D, focal_length: f32, rank: usize) -> Self {
        Self {
            projection: projection.to_cols_array_2d(),
            params: [focal_length, rank as f32, 0.0, 0.0],
        }
    }
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self::new(&Transform3D::identity(), 5.0, 3)
    }
}

/// Per-draw uniforms
/// Layout: 128 bytes total (must match wireframe.wgsl ModelUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ModelUniforms {
    /// Column-major 4x4 model-view, or the upper block of a split 5x5 (64 bytes)
    pub linear: [[f32; 4]; 4],
    /// `mat3x3` coupling block of a split 5x5, padded columns; zero in 3D (48 bytes)
    pub coupling: [[f32; 4]; 3],
    /// RGBA line colour (16 bytes)
    pub color: [f32; 4],
}

impl ModelUniforms {
    /// Uniforms for a 3D model-view
    pub fn from_3d(model_view: &Transform3D, color: [f32; 4]) -> Self {
        Self {
            linear: model_view.to_cols_array_2d(),
            coupling: [[0.0; 4]; 3],
            color,
        }
    }

    /// Uniforms for a split 4D model-view
    pub fn from_split(split: &ProjectionSplit, color: [f32; 4]) -> Self {
        Self {
            linear: split.linear_columns(),
            coupling: split.coupling_columns(),
            color,
        }
    }
}

impl Default for ModelUniforms {
    fn default() -> Self {
        Self::from_3d(&Transform3D::identity(), [1.0; 4])
    }
}
