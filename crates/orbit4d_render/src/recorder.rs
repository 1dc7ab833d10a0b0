//! Frame recording
//!
//! [`FrameRecorder`] is the [`DrawTarget`] the scene traversal draws into. It
//! turns each draw into a [`DrawCommand`] holding the mesh to bind and the
//! exact uniforms to upload, and the wireframe pipeline replays the list.

use orbit4d_core::{DrawTarget, Polytope};
use orbit4d_math::Transform;

use crate::pipeline::ModelUniforms;
use crate::ProjectionSplit;

/// How a model-view of a given size becomes per-draw uniforms
pub trait ModelViewUpload {
    fn to_model_uniforms(&self, color: [f32; 4]) -> ModelUniforms;
}

impl ModelViewUpload for Transform<4> {
    fn to_model_uniforms(&self, color: [f32; 4]) -> ModelUniforms {
        ModelUniforms::from_3d(self, color)
    }
}

impl ModelViewUpload for Transform<5> {
    fn to_model_uniforms(&self, color: [f32; 4]) -> ModelUniforms {
        ModelUniforms::from_split(&ProjectionSplit::split(self), color)
    }
}

/// One recorded draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub polytope: Polytope,
    pub index_count: u32,
    pub uniforms: ModelUniforms,
}

/// Collects a frame's draws
#[derive(Clone, Debug)]
pub struct FrameRecorder<const S: usize> {
    color: [f32; 4],
    mesh: Option<Polytope>,
    model_view: Transform<S>,
    commands: Vec<DrawCommand>,
}

impl<const S: usize> Default for FrameRecorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const S: usize> FrameRecorder<S> {
    pub fn new() -> Self {
        Self {
            color: [1.0; 4],
            mesh: None,
            model_view: Transform::identity(),
            commands: Vec::new(),
        }
    }

    /// Drop everything recorded and the bound state
    pub fn clear(&mut self) {
        self.color = [1.0; 4];
        self.mesh = None;
        self.model_view = Transform::identity();
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<const S: usize> DrawTarget<S> for FrameRecorder<S>
where
    Transform<S>: ModelViewUpload,
{
    fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    fn bind_mesh(&mut self, polytope: Polytope) {
        self.mesh = Some(polytope);
    }

    fn upload_model_view(&mut self, model_view: &Transform<S>) {
        self.model_view = *model_view;
    }

    fn draw_lines(&mut self, index_count: u32) {
        let Some(polytope) = self.mesh else {
            log::warn!("Skipping draw of {} indices: no mesh bound", index_count);
            return;
        };

        self.commands.push(DrawCommand {
            polytope,
            index_count,
            uniforms: self.model_view.to_model_uniforms(self.color),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit4d_core::{Drawable, DrawableSet, PolytopeDrawable, SceneContext};
    use orbit4d_math::{RotationPlane, Transform3D, Transform4D};

    #[test]
    fn test_records_one_command_per_drawable() {
        let mut set = DrawableSet::<5>::new()
            .with(Box::new(PolytopeDrawable::<5>::new(Polytope::Tesseract).with_color([1.0, 0.0, 0.0, 1.0])))
            .with(Box::new(PolytopeDrawable::<5>::new(Polytope::Square)));

        let mut scene = SceneContext::new();
        let mut recorder = FrameRecorder::<5>::new();
        let mv = Transform4D::rotation(RotationPlane::YW, 0.25).unwrap();
        set.draw(&mut scene, &mut recorder, mv, 0.0).unwrap();

        assert_eq!(recorder.len(), 2);
        let first = recorder.commands()[0];
        assert_eq!(first.polytope, Polytope::Tesseract);
        assert_eq!(first.index_count, 64);
        assert_eq!(first.uniforms, ModelUniforms::from_split(&ProjectionSplit::split(&mv), [1.0, 0.0, 0.0, 1.0]));
        assert_eq!(recorder.commands()[1].index_count, 8);
    }

    #[test]
    fn test_3d_upload_is_plain_matrix() {
        let mut scene = SceneContext::<4>::new();
        let mut recorder = FrameRecorder::<4>::new();
        let mv = Transform3D::identity().translated(&[0.0, 0.0, -5.0]).unwrap();
        scene.begin_frame(mv).unwrap();

        let mut cube = PolytopeDrawable::<4>::new(Polytope::Cube);
        cube.draw(&mut scene, &mut recorder, 0.0).unwrap();

        assert_eq!(recorder.commands()[0].uniforms.linear, mv.to_cols_array_2d());
    }

    #[test]
    fn test_draw_without_mesh_is_skipped() {
        let mut recorder = FrameRecorder::<5>::new();
        recorder.draw_lines(8);
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut recorder = FrameRecorder::<5>::new();
        recorder.bind_mesh(Polytope::Line);
        recorder.draw_lines(2);
        assert_eq!(recorder.len(), 1);
        recorder.clear();
        assert!(recorder.is_empty());
        recorder.draw_lines(2);
        assert!(recorder.is_empty(), "clear must unbind the mesh");
    }
}
