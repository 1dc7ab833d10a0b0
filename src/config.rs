//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`O4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use orbit4d_core::{Polytope, RotationPlane};
use orbit4d_input::{OrbitController, PlaneBindings};
use orbit4d_render::camera::{FOVY_MAX, FOVY_MIN, ZOOM_SCALE_MAX, ZOOM_SCALE_MIN};
use orbit4d_render::{CameraSettings, ZoomMode};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Shapes to draw
    #[serde(default)]
    pub scene: SceneConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`O4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // User overrides (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // O4D_CAMERA__RANK=3 -> camera.rank = 3
        figment = figment.merge(Env::prefixed("O4D_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the viewer cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.camera.rank, 3 | 4) {
            return Err(ConfigError::invalid(format!("camera.rank must be 3 or 4, got {}", self.camera.rank)));
        }
        if self.camera.focal_length <= 0.0 {
            return Err(ConfigError::invalid(format!(
                "camera.focal_length must be positive, got {}",
                self.camera.focal_length
            )));
        }
        let zoom = self.camera.default_zoom;
        if !(ZOOM_SCALE_MIN..=ZOOM_SCALE_MAX).contains(&zoom) {
            return Err(ConfigError::invalid(format!(
                "camera.default_zoom must be within {}..={}, got {}",
                ZOOM_SCALE_MIN, ZOOM_SCALE_MAX, zoom
            )));
        }
        let fovy = self.camera.default_fovy.to_radians();
        if !(FOVY_MIN..=FOVY_MAX).contains(&fovy) {
            return Err(ConfigError::invalid(format!(
                "camera.default_fovy must be within {:.1}..={:.1} degrees, got {}",
                FOVY_MIN.to_degrees(),
                FOVY_MAX.to_degrees(),
                self.camera.default_fovy
            )));
        }
        for (i, shape) in self.scene.shapes.iter().enumerate() {
            if shape.size <= 0.0 {
                return Err(ConfigError::invalid(format!("scene.shapes[{}].size must be positive", i)));
            }
        }
        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Orbit4D".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Spatial dimensions of the viewer (3 or 4)
    pub rank: u32,
    /// What zooming changes; defaults to scale in 3D and field of view in 4D
    pub zoom_mode: Option<ZoomMode>,
    /// Initial scene scale
    pub default_zoom: f32,
    /// Initial vertical field of view in degrees
    pub default_fovy: f32,
    /// Distance the scene is pushed away along the outermost axis
    pub focal_length: f32,
    /// Rotations between re-orthonormalisations of the view (0 = never)
    pub reorthonormalize_interval: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            rank: 4,
            zoom_mode: None,
            default_zoom: 1.0,
            default_fovy: 60.0,
            focal_length: 5.0,
            reorthonormalize_interval: 1000,
        }
    }
}

impl CameraConfig {
    /// Zoom mode after applying the per-rank default
    pub fn effective_zoom_mode(&self) -> ZoomMode {
        self.zoom_mode.unwrap_or_else(|| ZoomMode::default_for_rank(self.rank))
    }

    pub fn to_settings(&self) -> CameraSettings {
        CameraSettings {
            zoom_mode: self.effective_zoom_mode(),
            default_zoom: self.default_zoom,
            default_fovy: self.default_fovy.to_radians(),
            focal_length: self.focal_length,
            reorthonormalize_interval: self.reorthonormalize_interval,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Drag rotation in radians per pixel
    pub mouse_sensitivity: f32,
    /// Held-key rotation in radians per second
    pub key_rotation_speed: f32,
    /// Held-key zoom in units per second
    pub zoom_speed: f32,
    /// Zoom per mouse wheel notch
    pub wheel_zoom_step: f32,
    /// Which plane each input axis drives
    pub bindings: PlaneBindings,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: std::f32::consts::PI / 180.0,
            key_rotation_speed: std::f32::consts::FRAC_PI_2,
            zoom_speed: 1.0,
            wheel_zoom_step: 0.1,
            bindings: PlaneBindings::default(),
        }
    }
}

impl InputConfig {
    pub fn to_controller(&self) -> OrbitController {
        OrbitController::new()
            .with_mouse_sensitivity(self.mouse_sensitivity)
            .with_key_rotation_speed(self.key_rotation_speed)
            .with_zoom_speed(self.zoom_speed)
            .with_wheel_zoom_step(self.wheel_zoom_step)
            .with_bindings(self.bindings.clone())
    }
}

/// Shapes to draw, in draw order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub shapes: Vec<ShapeConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shapes: vec![ShapeConfig::default()],
        }
    }
}

/// One drawn polytope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    pub polytope: Polytope,
    /// Full side length
    pub size: f32,
    /// RGBA line colour
    pub color: [f32; 4],
    /// Position [x, y, z, w]; w is ignored in 3D
    pub offset: [f32; 4],
    /// Plane to spin in, if any
    pub spin_plane: Option<RotationPlane>,
    /// Spin speed in radians per second
    pub spin_speed: f32,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            polytope: Polytope::Tesseract,
            size: 2.0,
            color: [0.9, 0.9, 1.0, 1.0],
            offset: [0.0; 4],
            spin_plane: None,
            spin_speed: 0.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.02, 0.02, 0.08, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    pub log_level: String,
    /// Show frames per second in the window title
    pub show_fps: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_fps: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: String) -> Self {
        ConfigError { message }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
