//! Drawable objects and the backend they draw into
//!
//! A [`Drawable`] knows how to set up its attributes, issue its element draw,
//! and wrap both in a stack push/pop each frame. The [`DrawTarget`] trait is the
//! only thing it talks to, so the traversal runs the same against the wgpu
//! backend and against a recording target in tests.

use orbit4d_math::{RotationPlane, Transform, TransformError};

use crate::{Polytope, SceneContext, SceneError};

/// Backend seam for drawing
pub trait DrawTarget<const S: usize> {
    /// Constant colour for the following draws
    fn set_color(&mut self, color: [f32; 4]);
    /// Select the vertex/index buffers of a polytope
    fn bind_mesh(&mut self, polytope: Polytope);
    /// Model-view to use for the next draw
    fn upload_model_view(&mut self, model_view: &Transform<S>);
    /// Draw `index_count` line-list indices from the bound mesh
    fn draw_lines(&mut self, index_count: u32);
}

/// An object drawn once per frame
pub trait Drawable<const S: usize> {
    /// Bind colour and vertex data
    fn setup_attributes(&self, target: &mut dyn DrawTarget<S>);

    /// Issue the element draw for the bound data
    fn draw_elements(&self, target: &mut dyn DrawTarget<S>);

    /// Draw this object for the frame, `dt` seconds after the previous one
    ///
    /// Implementations must leave `scene`'s stack exactly as they found it.
    fn draw(
        &mut self,
        scene: &mut SceneContext<S>,
        target: &mut dyn DrawTarget<S>,
        dt: f32,
    ) -> Result<(), SceneError>;

    /// Whether this object needs the W rotation planes to be explored
    fn is_4d(&self) -> bool;
}

/// Constant-speed rotation of a drawable in one plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    pub plane: RotationPlane,
    /// Radians per second
    pub speed: f32,
}

/// A coloured polytope
///
/// The local transform (and spin, if any) is layered on top of the parent
/// model-view between the push and the pop.
#[derive(Clone, Debug)]
pub struct PolytopeDrawable<const S: usize> {
    polytope: Polytope,
    color: [f32; 4],
    local: Transform<S>,
    spin: Option<Spin>,
    spin_angle: f32,
}

impl<const S: usize> PolytopeDrawable<S> {
    /// White polytope with no local transform
    pub fn new(polytope: Polytope) -> Self {
        Self {
            polytope,
            color: [1.0, 1.0, 1.0, 1.0],
            local: Transform::identity(),
            spin: None,
            spin_angle: 0.0,
        }
    }

    /// Builder: set colour
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Builder: set the local transform applied after the push
    pub fn with_local_transform(mut self, local: Transform<S>) -> Self {
        self.local = local;
        self
    }

    /// Builder: spin continuously in `plane`
    ///
    /// Fails when the plane does not exist at this rank.
    pub fn with_spin(mut self, plane: RotationPlane, speed: f32) -> Result<Self, TransformError> {
        Transform::<S>::rotation(plane, 0.0)?;
        self.spin = Some(Spin { plane, speed });
        Ok(self)
    }

    /// The shape being drawn
    pub fn polytope(&self) -> Polytope {
        self.polytope
    }

    /// Current spin angle in radians, wrapped to [0, 2π)
    pub fn spin_angle(&self) -> f32 {
        self.spin_angle
    }

    fn local_transform(&self) -> Result<Transform<S>, TransformError> {
        match self.spin {
            Some(spin) => Ok(self.local.multiply(&Transform::rotation(spin.plane, self.spin_angle)?)),
            None => Ok(self.local),
        }
    }
}

impl<const S: usize> Drawable<S> for PolytopeDrawable<S> {
    fn setup_attributes(&self, target: &mut dyn DrawTarget<S>) {
        target.set_color(self.color);
        target.bind_mesh(self.polytope);
    }

    fn draw_elements(&self, target: &mut dyn DrawTarget<S>) {
        target.draw_lines(self.polytope.index_count());
    }

    fn draw(
        &mut self,
        scene: &mut SceneContext<S>,
        target: &mut dyn DrawTarget<S>,
        dt: f32,
    ) -> Result<(), SceneError> {
        if let Some(spin) = self.spin {
            self.spin_angle = (self.spin_angle + spin.speed * dt).rem_euclid(std::f32::consts::TAU);
        }
        let local = self.local_transform()?;

        self.setup_attributes(target);
        scene.push();
        scene.apply(&local);
        target.upload_model_view(scene.model_view());
        self.draw_elements(target);
        scene.pop()?;

        Ok(())
    }

    fn is_4d(&self) -> bool {
        self.polytope.is_4d()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit4d_math::Transform4D;

    #[derive(Default)]
    struct Recorder {
        colors: Vec<[f32; 4]>,
        meshes: Vec<Polytope>,
        uploads: Vec<Transform<5>>,
        draws: Vec<u32>,
    }

    impl DrawTarget<5> for Recorder {
        fn set_color(&mut self, color: [f32; 4]) {
            self.colors.push(color);
        }
        fn bind_mesh(&mut self, polytope: Polytope) {
            self.meshes.push(polytope);
        }
        fn upload_model_view(&mut self, model_view: &Transform<5>) {
            self.uploads.push(*model_view);
        }
        fn draw_lines(&mut self, index_count: u32) {
            self.draws.push(index_count);
        }
    }

    #[test]
    fn test_draw_issues_full_sequence() {
        let mut scene = SceneContext::<5>::new();
        let mut target = Recorder::default();
        let mut tess = PolytopeDrawable::<5>::new(Polytope::Tesseract).with_color([1.0, 0.0, 0.0, 1.0]);

        tess.draw(&mut scene, &mut target, 0.016).unwrap();

        assert_eq!(target.colors, vec![[1.0, 0.0, 0.0, 1.0]]);
        assert_eq!(target.meshes, vec![Polytope::Tesseract]);
        assert_eq!(target.draws, vec![64]);
        assert_eq!(target.uploads, vec![Transform4D::identity()]);
        assert!(scene.stack_depth() == 0);
    }

    #[test]
    fn test_local_transform_is_scoped() {
        let mut scene = SceneContext::<5>::new();
        let parent = Transform4D::rotation(RotationPlane::XW, 0.3).unwrap();
        scene.begin_frame(parent).unwrap();

        let shift = Transform4D::identity().translated(&[0.0, 2.0, 0.0, 0.0]).unwrap();
        let mut square = PolytopeDrawable::<5>::new(Polytope::Square).with_local_transform(shift);
        let mut target = Recorder::default();
        square.draw(&mut scene, &mut target, 0.0).unwrap();

        assert_eq!(target.uploads[0], parent.multiply(&shift));
        assert_eq!(*scene.model_view(), parent, "pop must restore the parent's exact matrix");
    }

    #[test]
    fn test_spin_advances_with_dt() {
        let mut scene = SceneContext::<5>::new();
        let mut target = Recorder::default();
        let mut tess = PolytopeDrawable::<5>::new(Polytope::Tesseract)
            .with_spin(RotationPlane::ZW, 1.0)
            .unwrap();

        tess.draw(&mut scene, &mut target, 0.5).unwrap();
        tess.draw(&mut scene, &mut target, 0.25).unwrap();

        assert!((tess.spin_angle() - 0.75).abs() < 0.0001);
        let expected = Transform4D::rotation(RotationPlane::ZW, 0.75).unwrap();
        assert!(target.uploads[1].approx_eq(&expected, 0.0001));
    }

    #[test]
    fn test_spin_rejects_w_plane_in_3d() {
        let result = PolytopeDrawable::<4>::new(Polytope::Cube).with_spin(RotationPlane::YW, 1.0);
        assert!(matches!(result, Err(TransformError::PlaneOutOfRank { .. })));
    }

    #[test]
    fn test_is_4d_follows_polytope() {
        assert!(PolytopeDrawable::<5>::new(Polytope::Tesseract).is_4d());
        assert!(!PolytopeDrawable::<5>::new(Polytope::Cube).is_4d());
    }
}
