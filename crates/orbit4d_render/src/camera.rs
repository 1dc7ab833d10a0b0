//! Orbit camera
//!
//! The camera never moves: the scene is pushed `focal_length` away along the
//! outermost axis and the accumulated view rotation spins it about the origin.
//! Each new rotation composes outside everything accumulated so far.
//!
//! Zoom has two explicit modes:
//! - [`ZoomMode::Scale`] scales the scene (`zoom_scale`, clamped to 0.1..=3.5)
//! - [`ZoomMode::FieldOfView`] narrows the view (`fovy`, clamped to 0.1..=1.5 rad)

use orbit4d_input::CameraControl;
use orbit4d_math::{RotationPlane, Transform, TransformError};
use serde::{Deserialize, Serialize};

/// Smallest scene scale
pub const ZOOM_SCALE_MIN: f32 = 0.1;
/// Largest scene scale
pub const ZOOM_SCALE_MAX: f32 = 3.5;
/// Narrowest vertical field of view (radians)
pub const FOVY_MIN: f32 = 0.1;
/// Widest vertical field of view (radians)
pub const FOVY_MAX: f32 = 1.5;

/// What a zoom delta changes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomMode {
    /// Scale the scene about the origin
    Scale,
    /// Narrow or widen the vertical field of view
    FieldOfView,
}

impl ZoomMode {
    /// Mode used when none is configured: scale in 3D, field of view in 4D
    pub fn default_for_rank(rank: u32) -> Self {
        if rank >= 4 {
            ZoomMode::FieldOfView
        } else {
            ZoomMode::Scale
        }
    }
}

/// Camera defaults
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    pub zoom_mode: ZoomMode,
    pub default_zoom: f32,
    /// Radians
    pub default_fovy: f32,
    pub focal_length: f32,
    /// Rotations between re-orthonormalisations of the view; 0 disables it
    pub reorthonormalize_interval: u32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            zoom_mode: ZoomMode::Scale,
            default_zoom: 1.0,
            default_fovy: 60.0f32.to_radians(),
            focal_length: 5.0,
            reorthonormalize_interval: 1000,
        }
    }
}

/// Everything the projection needs from the camera
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState<const S: usize> {
    pub view_transform: Transform<S>,
    pub zoom_scale: f32,
    pub fovy: f32,
    pub focal_length: f32,
}

impl<const S: usize> CameraState<S> {
    /// Identity view with the configured defaults
    pub fn initial(settings: &CameraSettings) -> Self {
        Self {
            view_transform: Transform::identity(),
            zoom_scale: settings.default_zoom.clamp(ZOOM_SCALE_MIN, ZOOM_SCALE_MAX),
            fovy: settings.default_fovy.clamp(FOVY_MIN, FOVY_MAX),
            focal_length: settings.focal_length,
        }
    }
}

/// Owns the live camera state and applies rotate/zoom/reset to it
#[derive(Clone, Debug)]
pub struct CameraController<const S: usize> {
    state: CameraState<S>,
    settings: CameraSettings,
    rotations_since_orthonormalize: u32,
}

impl<const S: usize> Default for CameraController<S> {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl<const S: usize> CameraController<S> {
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            state: CameraState::initial(&settings),
            settings,
            rotations_since_orthonormalize: 0,
        }
    }

    /// Spatial dimensions the camera works in
    pub const fn rank(&self) -> usize {
        S - 1
    }

    /// Rotate the view in `plane`
    ///
    /// The rotation is left-multiplied into the view, so it acts after
    /// (outside) every previous rotation. Fails for W planes on a 3D camera,
    /// leaving the view untouched.
    pub fn rotate(&mut self, plane: RotationPlane, radians: f32) -> Result<(), TransformError> {
        let rotation = Transform::<S>::rotation(plane, radians)?;
        self.state.view_transform = rotation.multiply(&self.state.view_transform);

        self.rotations_since_orthonormalize += 1;
        let interval = self.settings.reorthonormalize_interval;
        if interval > 0 && self.rotations_since_orthonormalize >= interval {
            self.state.view_transform.reorthonormalize();
            self.rotations_since_orthonormalize = 0;
            log::trace!("Re-orthonormalized view after {} rotations", interval);
        }

        Ok(())
    }

    /// Zoom by `delta`; positive zooms in
    pub fn zoom(&mut self, delta: f32) {
        match self.settings.zoom_mode {
            ZoomMode::Scale => {
                self.state.zoom_scale = (self.state.zoom_scale + delta).clamp(ZOOM_SCALE_MIN, ZOOM_SCALE_MAX);
            }
            ZoomMode::FieldOfView => {
                self.state.fovy = (self.state.fovy - delta).clamp(FOVY_MIN, FOVY_MAX);
            }
        }
    }

    /// Back to the identity view and default zoom/field of view
    pub fn reset(&mut self) {
        self.state = CameraState::initial(&self.settings);
        self.rotations_since_orthonormalize = 0;
        log::info!("Camera reset");
    }

    #[inline]
    pub fn state(&self) -> &CameraState<S> {
        &self.state
    }

    #[inline]
    pub fn view_transform(&self) -> &Transform<S> {
        &self.state.view_transform
    }

    #[inline]
    pub fn zoom_scale(&self) -> f32 {
        self.state.zoom_scale
    }

    #[inline]
    pub fn fovy(&self) -> f32 {
        self.state.fovy
    }

    #[inline]
    pub fn focal_length(&self) -> f32 {
        self.state.focal_length
    }

    #[inline]
    pub fn zoom_mode(&self) -> ZoomMode {
        self.settings.zoom_mode
    }

    #[inline]
    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }
}

impl<const S: usize> CameraControl for CameraController<S> {
    fn rotate(&mut self, plane: RotationPlane, radians: f32) -> Result<(), TransformError> {
        CameraController::rotate(self, plane, radians)
    }

    fn zoom(&mut self, delta: f32) {
        CameraController::zoom(self, delta);
    }

    fn reset(&mut self) {
        CameraController::reset(self);
    }
}
