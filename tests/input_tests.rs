// Drag and wheel handling.

use glam::Vec2;
use tour_core::{CameraState, DragState, InputController};

#[test]
fn drag_maps_pixels_to_degrees_from_the_anchor() {
    let mut input = InputController::default();
    let mut cam = CameraState {
        lon: 10.0,
        lat: 5.0,
        fov: 75.0,
    };
    input.pointer_down(Vec2::new(100.0, 100.0), &cam);
    assert!(input.pointer_move(Vec2::new(150.0, 80.0), &mut cam));
    assert!((cam.lon - 0.0).abs() < 1e-5, "lon = {}", cam.lon);
    assert!((cam.lat - 1.0).abs() < 1e-5, "lat = {}", cam.lat);

    // moves are absolute against the anchor, not accumulated
    assert!(input.pointer_move(Vec2::new(150.0, 80.0), &mut cam));
    assert!((cam.lon - 0.0).abs() < 1e-5);
    assert!((cam.lat - 1.0).abs() < 1e-5);
}

#[test]
fn move_without_press_does_nothing() {
    let mut input = InputController::default();
    let mut cam = CameraState::default();
    assert!(!input.pointer_move(Vec2::new(300.0, 300.0), &mut cam));
    assert_eq!(cam, CameraState::default());
}

#[test]
fn release_ends_the_drag() {
    let mut input = InputController::default();
    let mut cam = CameraState::default();
    input.pointer_down(Vec2::ZERO, &cam);
    assert!(input.is_dragging());
    input.pointer_up();
    assert_eq!(input.state(), DragState::Idle);
    assert!(!input.pointer_move(Vec2::new(50.0, 0.0), &mut cam));
    assert_eq!(cam.lon, 0.0);
}

#[test]
fn second_press_re_anchors_on_the_current_camera() {
    let mut input = InputController::default();
    let mut cam = CameraState::default();
    input.pointer_down(Vec2::new(0.0, 0.0), &cam);
    input.pointer_move(Vec2::new(-100.0, 0.0), &mut cam);
    assert!((cam.lon - 20.0).abs() < 1e-5);

    input.pointer_down(Vec2::new(500.0, 500.0), &cam);
    input.pointer_move(Vec2::new(400.0, 500.0), &mut cam);
    assert!((cam.lon - 40.0).abs() < 1e-5);
}

#[test]
fn drag_leaves_latitude_for_the_frame_clamp() {
    let mut input = InputController::default();
    let mut cam = CameraState::default();
    input.pointer_down(Vec2::ZERO, &cam);
    input.pointer_move(Vec2::new(0.0, 1_000.0), &mut cam);
    assert!((cam.lat - 200.0).abs() < 1e-3);
    cam.clamp();
    assert_eq!(cam.lat, 85.0);
}

#[test]
fn wheel_zooms_and_clamps_regardless_of_drag() {
    let mut input = InputController::default();
    let mut cam = CameraState::default();
    input.wheel(100.0, &mut cam);
    assert!((cam.fov - 80.0).abs() < 1e-4);

    input.pointer_down(Vec2::ZERO, &cam);
    input.wheel(-200.0, &mut cam);
    assert!((cam.fov - 70.0).abs() < 1e-4);

    input.wheel(10_000.0, &mut cam);
    assert_eq!(cam.fov, 90.0);
    input.wheel(-10_000.0, &mut cam);
    assert_eq!(cam.fov, 30.0);
}
