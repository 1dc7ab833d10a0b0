//! Application-level key actions
//!
//! Rotation and zoom keys go to the orbit controller; only the keys that act on
//! the application itself are mapped here.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions handled by the application rather than the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Close the viewer (Escape)
    Exit,
    /// Return the camera to its initial view (R)
    ResetCamera,
    /// Toggle borderless fullscreen (F)
    ToggleFullscreen,
}

pub struct InputMapper;

impl InputMapper {
    /// Map a key press to an action
    ///
    /// Releases never produce an action.
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::ResetCamera),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed),
            Some(InputAction::Exit)
        );
    }

    #[test]
    fn test_camera_keys_not_mapped() {
        for key in [
            KeyCode::ArrowLeft,
            KeyCode::ArrowUp,
            KeyCode::KeyQ,
            KeyCode::KeyE,
            KeyCode::KeyA,
            KeyCode::KeyD,
            KeyCode::KeyZ,
            KeyCode::KeyX,
        ] {
            assert_eq!(InputMapper::map_keyboard(key, ElementState::Pressed), None, "{:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        assert_eq!(InputMapper::map_keyboard(KeyCode::KeyR, ElementState::Released), None);
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyR, ElementState::Pressed),
            Some(InputAction::ResetCamera)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed),
            Some(InputAction::ToggleFullscreen)
        );
    }
}
