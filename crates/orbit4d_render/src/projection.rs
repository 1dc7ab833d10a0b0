//! Model-view composition and perspective projection
//!
//! Per frame the model-view is built as
//! `T(0, ..., 0, -focal_length) * view_transform * S(zoom_scale)`: scale first,
//! then rotate, then push the scene away from the camera. Changing the order
//! moves the pivot the scene orbits around.
//!
//! The projection is always a 4x4. In 4D the model-view's output is first
//! divided by its W coordinate (`xyz / (-w / f)`), which lands the image
//! around the origin, so the 4D projection shifts it back along -Z by `f`.

use orbit4d_math::{Transform, Transform3D, Transform4D, TransformError, Vec4};

use crate::{CameraState, ProjectionSplit};

/// Matrices for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameMatrices<const S: usize> {
    pub model_view: Transform<S>,
    pub projection: Transform3D,
}

/// Turns camera state into the matrices handed to the drawables
#[derive(Clone, Copy, Debug)]
pub struct ProjectionPipeline {
    aspect: f32,
}

impl Default for ProjectionPipeline {
    fn default() -> Self {
        Self { aspect: 1.0 }
    }
}

impl ProjectionPipeline {
    pub fn new(aspect: f32) -> Self {
        Self { aspect }
    }

    /// Track the surface's width / height
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Model-view and projection for the current camera state
    pub fn frame<const S: usize>(&self, camera: &CameraState<S>) -> Result<FrameMatrices<S>, TransformError> {
        Ok(FrameMatrices {
            model_view: compose_model_view(camera)?,
            projection: projection(S - 1, camera.fovy, self.aspect, camera.focal_length)?,
        })
    }
}

/// `T(0, ..., 0, -f) * view * S(zoom)`
pub fn compose_model_view<const S: usize>(camera: &CameraState<S>) -> Result<Transform<S>, TransformError> {
    let mut offset = vec![0.0f32; Transform::<S>::DIM];
    if let Some(last) = offset.last_mut() {
        *last = -camera.focal_length;
    }

    Ok(Transform::<S>::identity()
        .translated(&offset)?
        .multiply(&camera.view_transform)
        .scaled_uniform(camera.zoom_scale))
}

/// Perspective matrix parameterised by focal length instead of near/far planes
///
/// Reversed, infinite depth: depth is `1 / (f * -z)`, so the near plane sits at
/// distance `1 / f` and depth falls toward 0 with distance.
pub fn perspective_matrix(fovy: f32, aspect: f32, focal_length: f32) -> Transform3D {
    let s = 1.0 / (fovy / 2.0).tan();

    Transform3D::from_rows([
        [s / aspect, 0.0, 0.0, 0.0],
        [0.0, s, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0 / focal_length],
        [0.0, 0.0, -1.0, 0.0],
    ])
}

/// Projection for a viewer of the given rank (3 or 4)
pub fn projection(rank: usize, fovy: f32, aspect: f32, focal_length: f32) -> Result<Transform3D, TransformError> {
    let perspective = perspective_matrix(fovy, aspect, focal_length);
    if rank >= 4 {
        perspective.translated(&[0.0, 0.0, -focal_length])
    } else {
        Ok(perspective)
    }
}

/// CPU reference of the shader's 4D path: model-view, then the W divide
///
/// Returns the 3D eye-space point. Points with `w == 0` after the model-view
/// map to infinity.
pub fn project_point(model_view: &Transform4D, p: Vec4, focal_length: f32) -> [f32; 3] {
    let out = ProjectionSplit::split(model_view).apply(p);
    let h = out[4];
    let (x, y, z, w) = (out[0] / h, out[1] / h, out[2] / h, out[3] / h);
    let d = -w / focal_length;
    [x / d, y / d, z / d]
}

/// Clip-space position of an eye-space point
pub fn to_clip(projection: &Transform3D, eye: [f32; 3]) -> [f32; 4] {
    projection.apply([eye[0], eye[1], eye[2], 1.0])
}
