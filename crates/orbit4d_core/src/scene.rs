//! Per-frame scene traversal
//!
//! [`SceneContext`] holds the live model-view and its [`TransformStack`].
//! [`DrawableSet`] walks the drawables in list order once per frame and checks
//! the stack is empty on entry and exit; anything else is a missing pop.

use orbit4d_math::Transform;

use crate::{DrawTarget, Drawable, SceneError, StackError, TransformStack};

/// Live model-view and its save/restore stack
#[derive(Clone, Debug, Default)]
pub struct SceneContext<const S: usize> {
    model_view: Transform<S>,
    stack: TransformStack<S>,
}

impl<const S: usize> SceneContext<S> {
    /// Identity model-view, empty stack
    pub fn new() -> Self {
        Self {
            model_view: Transform::identity(),
            stack: TransformStack::new(),
        }
    }

    /// Start a traversal from `model_view`
    pub fn begin_frame(&mut self, model_view: Transform<S>) -> Result<(), StackError> {
        self.stack.ensure_empty()?;
        self.model_view = model_view;
        Ok(())
    }

    /// Finish a traversal; the stack must be back to empty
    pub fn end_frame(&self) -> Result<(), StackError> {
        self.stack.ensure_empty()
    }

    /// Save the current model-view
    pub fn push(&mut self) {
        self.stack.push(&self.model_view);
    }

    /// Restore the most recently saved model-view
    pub fn pop(&mut self) -> Result<(), StackError> {
        self.model_view = self.stack.pop()?;
        Ok(())
    }

    /// Layer a local transform: `model_view = model_view * local`
    pub fn apply(&mut self, local: &Transform<S>) {
        self.model_view.multiply_assign(local);
    }

    /// Current model-view
    #[inline]
    pub fn model_view(&self) -> &Transform<S> {
        &self.model_view
    }

    /// Snapshots currently pushed
    #[inline]
    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }
}

/// Ordered list of drawables
pub struct DrawableSet<const S: usize> {
    drawables: Vec<Box<dyn Drawable<S>>>,
}

impl<const S: usize> Default for DrawableSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const S: usize> DrawableSet<S> {
    /// Create an empty set
    pub fn new() -> Self {
        Self { drawables: Vec::new() }
    }

    /// Append a drawable; draw order is insertion order
    pub fn add(&mut self, drawable: Box<dyn Drawable<S>>) {
        self.drawables.push(drawable);
    }

    /// Builder form of [`DrawableSet::add`]
    pub fn with(mut self, drawable: Box<dyn Drawable<S>>) -> Self {
        self.add(drawable);
        self
    }

    /// Number of drawables
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    /// Whether the set has no drawables
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Whether any drawable needs the W rotation planes
    pub fn is_4d(&self) -> bool {
        self.drawables.iter().any(|d| d.is_4d())
    }

    /// Draw every drawable, in order, starting from `model_view`
    pub fn draw(
        &mut self,
        scene: &mut SceneContext<S>,
        target: &mut dyn DrawTarget<S>,
        model_view: Transform<S>,
        dt: f32,
    ) -> Result<(), SceneError> {
        scene.begin_frame(model_view)?;
        for drawable in self.drawables.iter_mut() {
            drawable.draw(scene, target, dt)?;
        }
        scene.end_frame()?;

        log::trace!("Drew {} drawables", self.drawables.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Polytope, PolytopeDrawable};
    use orbit4d_math::{RotationPlane, Transform4D};

    #[derive(Default)]
    struct UploadLog(Vec<Transform<5>>);

    impl DrawTarget<5> for UploadLog {
        fn set_color(&mut self, _color: [f32; 4]) {}
        fn bind_mesh(&mut self, _polytope: Polytope) {}
        fn upload_model_view(&mut self, model_view: &Transform<5>) {
            self.0.push(*model_view);
        }
        fn draw_lines(&mut self, _index_count: u32) {}
    }

    /// Pushes without popping
    struct Leaky;

    impl Drawable<5> for Leaky {
        fn setup_attributes(&self, _target: &mut dyn DrawTarget<5>) {}
        fn draw_elements(&self, _target: &mut dyn DrawTarget<5>) {}
        fn draw(
            &mut self,
            scene: &mut SceneContext<5>,
            _target: &mut dyn DrawTarget<5>,
            _dt: f32,
        ) -> Result<(), SceneError> {
            scene.push();
            Ok(())
        }
        fn is_4d(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_siblings_do_not_see_each_other() {
        let shift = Transform4D::identity().translated(&[3.0, 0.0, 0.0, 0.0]).unwrap();
        let mut set = DrawableSet::<5>::new()
            .with(Box::new(PolytopeDrawable::<5>::new(Polytope::Cube).with_local_transform(shift)))
            .with(Box::new(PolytopeDrawable::<5>::new(Polytope::Tesseract)));

        let mut scene = SceneContext::new();
        let mut log = UploadLog::default();
        let root = Transform4D::rotation(RotationPlane::XY, 0.5).unwrap();
        set.draw(&mut scene, &mut log, root, 0.0).unwrap();

        assert_eq!(log.0.len(), 2);
        assert_eq!(log.0[0], root.multiply(&shift));
        assert_eq!(log.0[1], root, "second sibling must start from the parent matrix");
    }

    #[test]
    fn test_missing_pop_is_reported() {
        let mut set = DrawableSet::<5>::new().with(Box::new(Leaky));
        let mut scene = SceneContext::new();
        let mut log = UploadLog::default();

        let err = set.draw(&mut scene, &mut log, Transform::identity(), 0.0).unwrap_err();
        assert_eq!(err, SceneError::Stack(StackError::Unbalanced { depth: 1 }));

        // The next frame refuses to start on a dirty stack
        let err = set.draw(&mut scene, &mut log, Transform::identity(), 0.0).unwrap_err();
        assert_eq!(err, SceneError::Stack(StackError::Unbalanced { depth: 1 }));
    }

    #[test]
    fn test_pop_without_push_is_error() {
        let mut scene = SceneContext::<4>::new();
        assert_eq!(scene.pop(), Err(StackError::Empty));
    }

    #[test]
    fn test_is_4d() {
        let set = DrawableSet::<5>::new().with(Box::new(PolytopeDrawable::<5>::new(Polytope::Cube)));
        assert!(!set.is_4d());
        let set = set.with(Box::new(PolytopeDrawable::<5>::new(Polytope::Tesseract)));
        assert!(set.is_4d());
        assert_eq!(set.len(), 2);
    }
}
