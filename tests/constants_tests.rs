// Host-side tests for viewer constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::time::Duration;
use tour_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_limits_are_ordered() {
    assert!(LAT_MIN < 0.0 && LAT_MAX > 0.0 && LAT_MAX < 90.0);
    assert_eq!(LAT_MIN, -LAT_MAX);
    assert!(FOV_MIN < FOV_DEFAULT && FOV_DEFAULT < FOV_MAX);
    assert!(CAMERA_ZNEAR < SPHERE_RADIUS && SPHERE_RADIUS < CAMERA_ZFAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ramp_constants_are_fractions() {
    assert!(OPACITY_STEP > 0.0 && OPACITY_STEP < 1.0);
    assert!(TRANSITION_OPACITY_PLATEAU > 0.0 && TRANSITION_OPACITY_PLATEAU < 1.0);
    assert!(TRANSITION_FOV_STEP > 0.0);
}

#[test]
fn transition_takes_1400ms_in_total() {
    assert_eq!(
        ZOOM_IN_DURATION + CHANGING_SCENE_DURATION + SETTLE_DURATION,
        Duration::from_millis(1_400)
    );
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sphere_has_enough_segments_to_close() {
    assert!(SPHERE_WIDTH_SEGMENTS >= 3);
    assert!(SPHERE_HEIGHT_SEGMENTS >= 2);
    assert!(MAX_VISIBLE_HOTSPOTS > 0);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        VIEWER_ID,
        HOTSPOT_LAYER_ID,
        INFO_PANEL_ID,
        INFO_TITLE_ID,
        INFO_DESCRIPTION_ID,
        INFO_CLOSE_ID,
        SCENE_NAME_ID,
        SCENE_SELECTOR_ID,
        MINIMAP_ID,
        BTN_ROTATE_LEFT_ID,
        BTN_ROTATE_RIGHT_ID,
        BTN_ROTATE_UP_ID,
        BTN_ROTATE_DOWN_ID,
        BTN_ZOOM_IN_ID,
        BTN_ZOOM_OUT_ID,
        BTN_RESET_ID,
        BTN_FULLSCREEN_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn minimap_nodes_fit_the_viewbox() {
    assert!(MINIMAP_NODE_RADIUS * 2.0 < MINIMAP_VIEWBOX);
    assert!(MARKER_HALF_SIZE_PX > 0.0);
}
