use std::time::Duration;

// Shared viewer tuning constants used by the core and the web frontend.

// Panorama sphere
pub const SPHERE_RADIUS: f32 = 500.0; // hotspots and look-at targets sit on this sphere
pub const SPHERE_WIDTH_SEGMENTS: u32 = 60;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 40;

// Perspective camera
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Camera limits (degrees)
pub const LAT_MIN: f32 = -85.0; // keeps the look-at away from the poles
pub const LAT_MAX: f32 = 85.0;
pub const FOV_MIN: f32 = 30.0;
pub const FOV_MAX: f32 = 90.0;
pub const FOV_DEFAULT: f32 = 75.0;

// Interaction
pub const DRAG_SENSITIVITY: f32 = 0.2; // degrees per pixel of drag
pub const WHEEL_FOV_PER_DELTA: f32 = 0.05; // degrees of fov per wheel delta unit
pub const ROTATE_STEP_DEG: f32 = 10.0; // on-screen arrow buttons
pub const ZOOM_STEP_DEG: f32 = 5.0; // on-screen zoom buttons
pub const AUTO_ROTATE_DEG_PER_FRAME: f32 = 0.03;

// Scene transition stage durations
pub const ZOOM_IN_DURATION: Duration = Duration::from_millis(600);
pub const CHANGING_SCENE_DURATION: Duration = Duration::from_millis(300);
pub const SETTLE_DURATION: Duration = Duration::from_millis(500);

// Per-frame ramps
pub const OPACITY_STEP: f32 = 0.05;
pub const TRANSITION_OPACITY_PLATEAU: f32 = 0.3;
pub const TRANSITION_FOV_STEP: f32 = 0.75; // degrees per frame while zooming in

// Overlay
pub const MAX_VISIBLE_HOTSPOTS: usize = 3;
