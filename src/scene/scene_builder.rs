//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for building the drawable list of a viewer.

use orbit4d_core::{DrawableSet, Polytope, PolytopeDrawable, RotationPlane, Transform, TransformError};
use orbit4d_render::mesh::MESH_SIZE;

use crate::config::ShapeConfig;

/// Builder for the drawables of an S x S viewer
///
/// # Example
/// ```ignore
/// let drawables = SceneBuilder::<5>::new()
///     .add_polytope(Polytope::Tesseract, 2.0, [1.0, 1.0, 1.0, 1.0])?
///     .add_spinning(Polytope::Cube, 1.0, [1.0, 0.5, 0.0, 1.0], RotationPlane::XZ, 0.5)?
///     .build();
/// ```
pub struct SceneBuilder<const S: usize> {
    drawables: DrawableSet<S>,
}

impl<const S: usize> Default for SceneBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const S: usize> SceneBuilder<S> {
    /// Create an empty scene
    pub fn new() -> Self {
        Self {
            drawables: DrawableSet::new(),
        }
    }

    /// Add a shape described in the config
    ///
    /// Fails when the offset or spin plane does not fit this rank.
    pub fn add_shape(mut self, shape: &ShapeConfig) -> Result<Self, TransformError> {
        let dim = Transform::<S>::DIM;
        if shape.polytope.dimension() as usize > dim {
            log::warn!(
                "{:?} has more dimensions than a {}D scene; drawing its projection",
                shape.polytope,
                dim
            );
        }

        let local = Transform::<S>::identity()
            .translated(&shape.offset[..dim])?
            .scaled_uniform(shape.size / MESH_SIZE);

        let mut drawable = PolytopeDrawable::<S>::new(shape.polytope)
            .with_color(shape.color)
            .with_local_transform(local);

        if let Some(plane) = shape.spin_plane {
            drawable = drawable.with_spin(plane, shape.spin_speed)?;
        }

        self.drawables.add(Box::new(drawable));
        log::debug!("Added {:?} (size {}) to scene", shape.polytope, shape.size);
        Ok(self)
    }

    /// Add every shape in order
    pub fn add_shapes<'a>(self, shapes: impl IntoIterator<Item = &'a ShapeConfig>) -> Result<Self, TransformError> {
        shapes.into_iter().try_fold(self, |builder, shape| builder.add_shape(shape))
    }

    /// Add a still polytope at the origin
    pub fn add_polytope(self, polytope: Polytope, size: f32, color: [f32; 4]) -> Result<Self, TransformError> {
        self.add_shape(&ShapeConfig {
            polytope,
            size,
            color,
            ..Default::default()
        })
    }

    /// Add a polytope at the origin spinning in `plane`
    pub fn add_spinning(
        self,
        polytope: Polytope,
        size: f32,
        color: [f32; 4],
        plane: RotationPlane,
        speed: f32,
    ) -> Result<Self, TransformError> {
        self.add_shape(&ShapeConfig {
            polytope,
            size,
            color,
            spin_plane: Some(plane),
            spin_speed: speed,
            ..Default::default()
        })
    }

    /// Finish building
    pub fn build(self) -> DrawableSet<S> {
        log::info!("Built scene with {} drawables", self.drawables.len());
        self.drawables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_in_order() {
        let set = SceneBuilder::<5>::new()
            .add_polytope(Polytope::Cube, 1.0, [1.0; 4])
            .unwrap()
            .add_polytope(Polytope::Tesseract, 2.0, [1.0; 4])
            .unwrap()
            .build();
        assert_eq!(set.len(), 2);
        assert!(set.is_4d());
    }

    #[test]
    fn test_3d_scene_is_not_4d() {
        let set = SceneBuilder::<4>::new()
            .add_polytope(Polytope::Cube, 1.0, [1.0; 4])
            .unwrap()
            .build();
        assert!(!set.is_4d());
    }

    #[test]
    fn test_w_spin_rejected_in_3d() {
        let result = SceneBuilder::<4>::new().add_spinning(Polytope::Cube, 1.0, [1.0; 4], RotationPlane::ZW, 1.0);
        assert!(matches!(result, Err(TransformError::PlaneOutOfRank { .. })));
    }

    #[test]
    fn test_add_shapes_from_config() {
        let shapes = vec![
            ShapeConfig { polytope: Polytope::Line, ..Default::default() },
            ShapeConfig { polytope: Polytope::Square, offset: [1.0, 0.0, 0.0, 0.0], ..Default::default() },
        ];
        let set = SceneBuilder::<5>::new().add_shapes(&shapes).unwrap().build();
        assert_eq!(set.len(), 2);
    }
}
