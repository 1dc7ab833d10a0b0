//! Per-frame viewer update
//!
//! Owns the camera, the orbit controller, and the drawables for one rank and
//! turns input plus elapsed time into the uniforms and draw commands of a frame.
//! Nothing here touches the GPU, so frames can be produced headless.

use orbit4d_core::{DrawableSet, SceneContext, SceneError, Transform};
use orbit4d_input::OrbitController;
use orbit4d_render::pipeline::FrameUniforms;
use orbit4d_render::{CameraController, DrawCommand, FrameRecorder, ModelViewUpload, ProjectionPipeline};

use crate::config::AppConfig;
use crate::scene::SceneBuilder;

/// Camera, input, and scene of an S x S viewer
pub struct Viewer<const S: usize> {
    camera: CameraController<S>,
    controller: OrbitController,
    projection: ProjectionPipeline,
    scene: SceneContext<S>,
    drawables: DrawableSet<S>,
    recorder: FrameRecorder<S>,
    frame_uniforms: FrameUniforms,
}

impl<const S: usize> Viewer<S>
where
    Transform<S>: ModelViewUpload,
{
    pub fn new(
        camera: CameraController<S>,
        controller: OrbitController,
        drawables: DrawableSet<S>,
        aspect: f32,
    ) -> Self {
        Self {
            camera,
            controller,
            projection: ProjectionPipeline::new(aspect),
            scene: SceneContext::new(),
            drawables,
            recorder: FrameRecorder::new(),
            frame_uniforms: FrameUniforms::default(),
        }
    }

    /// Build a viewer from configuration
    pub fn from_config(config: &AppConfig, aspect: f32) -> Result<Self, SceneError> {
        let drawables = SceneBuilder::<S>::new().add_shapes(&config.scene.shapes)?.build();
        Ok(Self::new(
            CameraController::new(config.camera.to_settings()),
            config.input.to_controller(),
            drawables,
            aspect,
        ))
    }

    /// Apply input, then record every drawable for this frame
    pub fn draw(&mut self, dt: f32) -> Result<(), SceneError> {
        // W planes need a 4D scene and a 5x5 camera
        let four_d = self.drawables.is_4d() && Transform::<S>::DIM >= 4;
        self.controller.update(&mut self.camera, dt, four_d)?;

        let frame = self.projection.frame(self.camera.state())?;
        self.frame_uniforms = FrameUniforms::new(&frame.projection, self.camera.focal_length(), Transform::<S>::DIM);

        self.recorder.clear();
        self.drawables.draw(&mut self.scene, &mut self.recorder, frame.model_view, dt)
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.projection.set_aspect(aspect);
    }

    pub fn frame_uniforms(&self) -> &FrameUniforms {
        &self.frame_uniforms
    }

    /// Draw commands recorded by the last [`Viewer::draw`]
    pub fn commands(&self) -> &[DrawCommand] {
        self.recorder.commands()
    }

    pub fn controller_mut(&mut self) -> &mut OrbitController {
        &mut self.controller
    }

    pub fn camera(&self) -> &CameraController<S> {
        &self.camera
    }

    pub fn drawables(&self) -> &DrawableSet<S> {
        &self.drawables
    }
}

/// A viewer of either rank
pub enum ViewerKind {
    /// 3D scene with 4x4 transforms
    ThreeD(Viewer<4>),
    /// 4D scene with 5x5 transforms
    FourD(Viewer<5>),
}

impl ViewerKind {
    /// Build the viewer matching `config.camera.rank`
    pub fn from_config(config: &AppConfig, aspect: f32) -> Result<Self, SceneError> {
        if config.camera.rank == 3 {
            Ok(ViewerKind::ThreeD(Viewer::from_config(config, aspect)?))
        } else {
            Ok(ViewerKind::FourD(Viewer::from_config(config, aspect)?))
        }
    }

    /// Spatial dimensions
    pub fn rank(&self) -> usize {
        match self {
            ViewerKind::ThreeD(_) => 3,
            ViewerKind::FourD(_) => 4,
        }
    }

    pub fn draw(&mut self, dt: f32) -> Result<(), SceneError> {
        match self {
            ViewerKind::ThreeD(v) => v.draw(dt),
            ViewerKind::FourD(v) => v.draw(dt),
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        match self {
            ViewerKind::ThreeD(v) => v.set_aspect(aspect),
            ViewerKind::FourD(v) => v.set_aspect(aspect),
        }
    }

    pub fn frame_uniforms(&self) -> &FrameUniforms {
        match self {
            ViewerKind::ThreeD(v) => v.frame_uniforms(),
            ViewerKind::FourD(v) => v.frame_uniforms(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        match self {
            ViewerKind::ThreeD(v) => v.commands(),
            ViewerKind::FourD(v) => v.commands(),
        }
    }

    pub fn controller_mut(&mut self) -> &mut OrbitController {
        match self {
            ViewerKind::ThreeD(v) => v.controller_mut(),
            ViewerKind::FourD(v) => v.controller_mut(),
        }
    }
}
