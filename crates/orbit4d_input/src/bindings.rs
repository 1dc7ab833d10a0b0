//! Input axis to rotation plane bindings

use orbit4d_math::RotationPlane;
use serde::{Deserialize, Serialize};

/// A logical, signed input axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAxis {
    /// Horizontal mouse drag with the left button held
    DragX,
    /// Vertical mouse drag with the left button held
    DragY,
    /// Left/Right arrow keys
    ArrowsX,
    /// Up/Down arrow keys
    ArrowsY,
    /// Q/E
    Roll,
    /// Horizontal mouse drag with the right button held
    AltDragX,
    /// Vertical mouse drag with the right button held
    AltDragY,
    /// A/D
    WKeys,
}

impl InputAxis {
    pub const ALL: [InputAxis; 8] = [
        InputAxis::DragX,
        InputAxis::DragY,
        InputAxis::ArrowsX,
        InputAxis::ArrowsY,
        InputAxis::Roll,
        InputAxis::AltDragX,
        InputAxis::AltDragY,
        InputAxis::WKeys,
    ];
}

/// Which rotation plane each input axis drives
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneBindings {
    pub drag_x: RotationPlane,
    pub drag_y: RotationPlane,
    pub arrows_x: RotationPlane,
    pub arrows_y: RotationPlane,
    pub roll_keys: RotationPlane,
    pub alt_drag_x: RotationPlane,
    pub alt_drag_y: RotationPlane,
    pub w_keys: RotationPlane,
}

impl Default for PlaneBindings {
    fn default() -> Self {
        Self {
            drag_x: RotationPlane::XZ,
            drag_y: RotationPlane::YZ,
            arrows_x: RotationPlane::XZ,
            arrows_y: RotationPlane::YZ,
            roll_keys: RotationPlane::XY,
            alt_drag_x: RotationPlane::XW,
            alt_drag_y: RotationPlane::YW,
            w_keys: RotationPlane::ZW,
        }
    }
}

impl PlaneBindings {
    /// Plane driven by `axis`
    pub fn plane(&self, axis: InputAxis) -> RotationPlane {
        match axis {
            InputAxis::DragX => self.drag_x,
            InputAxis::DragY => self.drag_y,
            InputAxis::ArrowsX => self.arrows_x,
            InputAxis::ArrowsY => self.arrows_y,
            InputAxis::Roll => self.roll_keys,
            InputAxis::AltDragX => self.alt_drag_x,
            InputAxis::AltDragY => self.alt_drag_y,
            InputAxis::WKeys => self.w_keys,
        }
    }

    /// Whether some input axis reaches `plane`
    pub fn covers(&self, plane: RotationPlane) -> bool {
        InputAxis::ALL.iter().any(|&axis| self.plane(axis) == plane)
    }
}
