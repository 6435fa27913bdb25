/// DOM hooks and overlay layout shared by the web front-end.
///
/// The host page provides these elements; anything missing is skipped.
pub const CANVAS_ID: &str = "app-canvas";
pub const VIEWER_ID: &str = "viewer"; // fullscreen target, carries data-stage
pub const HOTSPOT_LAYER_ID: &str = "hotspot-layer";
pub const INFO_PANEL_ID: &str = "info-panel";
pub const INFO_TITLE_ID: &str = "info-title";
pub const INFO_DESCRIPTION_ID: &str = "info-description";
pub const INFO_CLOSE_ID: &str = "info-close";
pub const SCENE_NAME_ID: &str = "scene-name";
pub const SCENE_SELECTOR_ID: &str = "scene-selector";
pub const MINIMAP_ID: &str = "minimap";

// On-screen control buttons
pub const BTN_ROTATE_LEFT_ID: &str = "btn-rotate-left";
pub const BTN_ROTATE_RIGHT_ID: &str = "btn-rotate-right";
pub const BTN_ROTATE_UP_ID: &str = "btn-rotate-up";
pub const BTN_ROTATE_DOWN_ID: &str = "btn-rotate-down";
pub const BTN_ZOOM_IN_ID: &str = "btn-zoom-in";
pub const BTN_ZOOM_OUT_ID: &str = "btn-zoom-out";
pub const BTN_RESET_ID: &str = "btn-reset";
pub const BTN_FULLSCREEN_ID: &str = "btn-fullscreen";

// Marker element ids are this prefix plus the hotspot id
pub const HOTSPOT_MARKER_PREFIX: &str = "hotspot-";

// Markers are centered on the projected point
pub const MARKER_HALF_SIZE_PX: f32 = 16.0;

// Mini-map, in SVG viewBox units (scene positions are percentages)
pub const MINIMAP_VIEWBOX: f32 = 100.0;
pub const MINIMAP_NODE_RADIUS: f32 = 4.0;
