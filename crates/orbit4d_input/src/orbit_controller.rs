//! Orbit controller
//!
//! Controls:
//! - Left-drag: rotate in the `drag_x` / `drag_y` planes
//! - Right-drag: rotate in the `alt_drag_x` / `alt_drag_y` planes (W planes by default)
//! - Arrow keys: rotate in the `arrows_x` / `arrows_y` planes
//! - Q/E: rotate in the `roll_keys` plane
//! - A/D: rotate in the `w_keys` plane
//! - Z/X: zoom in/out while held
//! - Mouse wheel: zoom by a fixed step per notch
//!
//! Planes that involve W are only driven when the scene is 4D-capable.

use orbit4d_math::{RotationPlane, TransformError};
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::{InputAxis, PlaneBindings};

/// Pixels of touchpad scroll that count as one wheel notch
const PIXELS_PER_NOTCH: f64 = 50.0;

/// Accumulates raw input between frames and applies it to a camera once per frame
pub struct OrbitController {
    // Held keys
    arrow_left: bool,
    arrow_right: bool,
    arrow_up: bool,
    arrow_down: bool,
    roll_neg: bool, // Q
    roll_pos: bool, // E
    w_neg: bool,    // A
    w_pos: bool,    // D
    zoom_in: bool,  // Z
    zoom_out: bool, // X

    // Mouse state
    left_pressed: bool,
    right_pressed: bool,
    pending_dx: f32,
    pending_dy: f32,
    pending_notches: f32,

    reset_requested: bool,

    // Configuration
    pub mouse_sensitivity: f32,
    pub key_rotation_speed: f32,
    pub zoom_speed: f32,
    pub wheel_zoom_step: f32,
    pub bindings: PlaneBindings,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            arrow_left: false,
            arrow_right: false,
            arrow_up: false,
            arrow_down: false,
            roll_neg: false,
            roll_pos: false,
            w_neg: false,
            w_pos: false,
            zoom_in: false,
            zoom_out: false,

            left_pressed: false,
            right_pressed: false,
            pending_dx: 0.0,
            pending_dy: 0.0,
            pending_notches: 0.0,

            reset_requested: false,

            mouse_sensitivity: std::f32::consts::PI / 180.0, // one degree per pixel
            key_rotation_speed: std::f32::consts::FRAC_PI_2,
            zoom_speed: 1.0,
            wheel_zoom_step: 0.1,
            bindings: PlaneBindings::default(),
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is one this controller handles.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::ArrowLeft => { self.arrow_left = pressed; true }
            KeyCode::ArrowRight => { self.arrow_right = pressed; true }
            KeyCode::ArrowUp => { self.arrow_up = pressed; true }
            KeyCode::ArrowDown => { self.arrow_down = pressed; true }
            KeyCode::KeyQ => { self.roll_neg = pressed; true }
            KeyCode::KeyE => { self.roll_pos = pressed; true }
            KeyCode::KeyA => { self.w_neg = pressed; true }
            KeyCode::KeyD => { self.w_pos = pressed; true }
            KeyCode::KeyZ => { self.zoom_in = pressed; true }
            KeyCode::KeyX => { self.zoom_out = pressed; true }
            _ => false,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match button {
            MouseButton::Left => self.left_pressed = pressed,
            MouseButton::Right => self.right_pressed = pressed,
            _ => {}
        }
    }

    /// Process raw mouse movement in pixels
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.pending_dx += delta_x as f32;
        self.pending_dy += delta_y as f32;
    }

    /// Process mouse wheel input; scrolling up zooms in
    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        let notches = match delta {
            MouseScrollDelta::LineDelta(_, y) => y as f64,
            MouseScrollDelta::PixelDelta(pos) => pos.y / PIXELS_PER_NOTCH,
        };
        self.pending_notches += notches as f32;
    }

    /// Ask for a camera reset on the next update
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    /// Forget every held key and button, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.arrow_left = false;
        self.arrow_right = false;
        self.arrow_up = false;
        self.arrow_down = false;
        self.roll_neg = false;
        self.roll_pos = false;
        self.w_neg = false;
        self.w_pos = false;
        self.zoom_in = false;
        self.zoom_out = false;
        self.left_pressed = false;
        self.right_pressed = false;
        self.pending_dx = 0.0;
        self.pending_dy = 0.0;
    }

    /// Apply the input accumulated since the last call to `camera`
    ///
    /// Rotations are summed per plane and applied in [`RotationPlane::ALL`]
    /// order, one `rotate` call per plane. Deltas for W planes are dropped
    /// unless `four_d` is true. A pending reset is applied first, then zoom.
    pub fn update<C: CameraControl>(&mut self, camera: &mut C, dt: f32, four_d: bool) -> Result<(), TransformError> {
        if self.reset_requested {
            camera.reset();
            self.reset_requested = false;
        }

        let mut deltas = [0.0f32; 6];
        for axis in InputAxis::ALL {
            let amount = self.axis_delta(axis, dt);
            if amount != 0.0 {
                deltas[plane_slot(self.bindings.plane(axis))] += amount;
            }
        }

        let keys = (self.zoom_in as i32 - self.zoom_out as i32) as f32;
        let zoom = keys * self.zoom_speed * dt + self.pending_notches * self.wheel_zoom_step;

        // Pending input is consumed even if a rotation below fails
        self.pending_dx = 0.0;
        self.pending_dy = 0.0;
        self.pending_notches = 0.0;

        if zoom != 0.0 {
            camera.zoom(zoom);
        }

        for (plane, delta) in RotationPlane::ALL.into_iter().zip(deltas) {
            if delta == 0.0 {
                continue;
            }
            if plane.involves_w() && !four_d {
                log::trace!("Ignoring {} rotation of {:.4} rad: scene is not 4D", plane, delta);
                continue;
            }
            camera.rotate(plane, delta)?;
        }

        Ok(())
    }

    /// Signed radians contributed by `axis` this frame
    fn axis_delta(&self, axis: InputAxis, dt: f32) -> f32 {
        let key_step = self.key_rotation_speed * dt;
        let drag = self.left_pressed && !self.right_pressed;

        match axis {
            InputAxis::DragX if drag => self.pending_dx * self.mouse_sensitivity,
            InputAxis::DragY if drag => self.pending_dy * self.mouse_sensitivity,
            InputAxis::AltDragX if self.right_pressed => self.pending_dx * self.mouse_sensitivity,
            InputAxis::AltDragY if self.right_pressed => self.pending_dy * self.mouse_sensitivity,
            InputAxis::ArrowsX => (self.arrow_right as i32 - self.arrow_left as i32) as f32 * key_step,
            InputAxis::ArrowsY => (self.arrow_down as i32 - self.arrow_up as i32) as f32 * key_step,
            InputAxis::Roll => (self.roll_pos as i32 - self.roll_neg as i32) as f32 * key_step,
            InputAxis::WKeys => (self.w_pos as i32 - self.w_neg as i32) as f32 * key_step,
            _ => 0.0,
        }
    }

    /// Check if any rotation or zoom input is held
    pub fn is_active(&self) -> bool {
        self.arrow_left || self.arrow_right || self.arrow_up || self.arrow_down
            || self.roll_neg || self.roll_pos || self.w_neg || self.w_pos
            || self.zoom_in || self.zoom_out
            || self.left_pressed || self.right_pressed
    }

    /// Builder: set mouse sensitivity (radians per pixel)
    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    /// Builder: set key rotation speed (radians per second)
    pub fn with_key_rotation_speed(mut self, speed: f32) -> Self {
        self.key_rotation_speed = speed;
        self
    }

    /// Builder: set held-key zoom speed (units per second)
    pub fn with_zoom_speed(mut self, speed: f32) -> Self {
        self.zoom_speed = speed;
        self
    }

    /// Builder: set zoom per wheel notch
    pub fn with_wheel_zoom_step(mut self, step: f32) -> Self {
        self.wheel_zoom_step = step;
        self
    }

    /// Builder: set plane bindings
    pub fn with_bindings(mut self, bindings: PlaneBindings) -> Self {
        self.bindings = bindings;
        self
    }
}

fn plane_slot(plane: RotationPlane) -> usize {
    match plane {
        RotationPlane::XY => 0,
        RotationPlane::XZ => 1,
        RotationPlane::YZ => 2,
        RotationPlane::XW => 3,
        RotationPlane::YW => 4,
        RotationPlane::ZW => 5,
    }
}

/// Trait for camera control
/// Allows the controller to drive any camera, at either rank
pub trait CameraControl {
    /// Compose a rotation in `plane` outside the accumulated view
    fn rotate(&mut self, plane: RotationPlane, radians: f32) -> Result<(), TransformError>;
    /// Zoom by a signed amount; positive zooms in
    fn zoom(&mut self, delta: f32);
    /// Return to the initial view
    fn reset(&mut self);
}
