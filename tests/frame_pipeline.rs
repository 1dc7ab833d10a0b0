//! Headless end-to-end frames
//!
//! Drives a viewer from configuration through input, camera, and projection
//! to recorded draw commands, then checks the uploaded uniforms place the
//! geometry where the 4D projection says it should be.

use orbit4d::config::{AppConfig, ShapeConfig};
use orbit4d::systems::{Viewer, ViewerKind};
use orbit4d_core::{Polytope, RotationPlane, Transform4D, Vec4};
use orbit4d_render::projection::project_point;
use orbit4d_render::ProjectionSplit;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

fn four_d_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.scene.shapes = vec![
        ShapeConfig { polytope: Polytope::Tesseract, ..Default::default() },
        ShapeConfig {
            polytope: Polytope::Cube,
            size: 1.0,
            offset: [1.0, 0.0, 0.0, 0.5],
            spin_plane: Some(RotationPlane::XW),
            spin_speed: 1.0,
            ..Default::default()
        },
    ];
    config
}

/// Rebuild the model-view a draw command carries
fn uploaded_model_view(viewer: &Viewer<5>, slot: usize) -> Transform4D {
    let uniforms = &viewer.commands()[slot].uniforms;
    ProjectionSplit::from_columns(&uniforms.linear, &uniforms.coupling).reconstruct()
}

#[test]
fn test_4d_frame_records_in_config_order() {
    let mut viewer = Viewer::<5>::from_config(&four_d_config(), 1.0).unwrap();
    viewer.draw(0.016).unwrap();

    let commands = viewer.commands();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].polytope, Polytope::Tesseract);
    assert_eq!(commands[1].polytope, Polytope::Cube);
    assert_eq!(viewer.frame_uniforms().params, [5.0, 4.0, 0.0, 0.0]);
}

#[test]
fn test_origin_lands_on_view_axis() {
    let mut viewer = Viewer::<5>::from_config(&four_d_config(), 1.0).unwrap();
    viewer.draw(0.0).unwrap();

    let model_view = uploaded_model_view(&viewer, 0);
    let eye = project_point(&model_view, Vec4::ZERO, 5.0);
    assert!(eye[0].abs() < 1e-5);
    assert!(eye[1].abs() < 1e-5);
}

#[test]
fn test_held_key_rotates_between_frames() {
    let mut viewer = Viewer::<5>::from_config(&four_d_config(), 1.0).unwrap();
    viewer.draw(0.0).unwrap();
    let before = uploaded_model_view(&viewer, 0);

    viewer.controller_mut().process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed);
    viewer.draw(0.1).unwrap();
    let after = uploaded_model_view(&viewer, 0);
    assert!(!before.approx_eq(&after, 1e-4));

    viewer.controller_mut().process_keyboard(KeyCode::ArrowLeft, ElementState::Released);
    viewer.controller_mut().request_reset();
    viewer.draw(0.0).unwrap();
    assert!(before.approx_eq(&uploaded_model_view(&viewer, 0), 1e-6));
}

#[test]
fn test_alt_drag_rotates_w_in_4d() {
    let mut viewer = Viewer::<5>::from_config(&four_d_config(), 1.0).unwrap();
    viewer
        .controller_mut()
        .process_mouse_button(MouseButton::Right, ElementState::Pressed);
    viewer.controller_mut().process_mouse_motion(30.0, 0.0);
    viewer.draw(0.0).unwrap();

    let view = viewer.camera().view_transform();
    assert!(view.get(0, 3).abs() > 0.1);
}

#[test]
fn test_3d_viewer_from_rank() {
    let mut config = AppConfig::default();
    config.camera.rank = 3;
    config.scene.shapes = vec![ShapeConfig { polytope: Polytope::Cube, ..Default::default() }];

    let mut viewer = ViewerKind::from_config(&config, 16.0 / 9.0).unwrap();
    viewer.draw(0.016).unwrap();
    assert_eq!(viewer.rank(), 3);
    assert_eq!(viewer.commands().len(), 1);
    assert_eq!(viewer.frame_uniforms().params[1], 3.0);
}

#[test]
fn test_w_spin_rejected_in_3d_scene() {
    let mut config = four_d_config();
    config.camera.rank = 3;
    config.scene.shapes[1].spin_plane = Some(RotationPlane::ZW);
    assert!(ViewerKind::from_config(&config, 1.0).is_err());
}
