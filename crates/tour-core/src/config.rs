use crate::constants::{
    AUTO_ROTATE_DEG_PER_FRAME, CHANGING_SCENE_DURATION, MAX_VISIBLE_HOTSPOTS, SETTLE_DURATION,
    ZOOM_IN_DURATION,
};
use serde::Deserialize;
use std::time::Duration;

/// Viewer options read from the optional `viewer` block of a tour document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    /// Longitude drift applied every idle frame while the user is not dragging.
    pub auto_rotate_deg_per_frame: f32,
    /// Drop hotspots behind the camera before the viewport test. Off by
    /// default: plain screen-rectangle containment is the reference behavior.
    pub cull_behind_camera: bool,
    pub max_visible_hotspots: usize,
    pub timings: TransitionTimings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            auto_rotate_deg_per_frame: AUTO_ROTATE_DEG_PER_FRAME,
            cull_behind_camera: false,
            max_visible_hotspots: MAX_VISIBLE_HOTSPOTS,
            timings: TransitionTimings::default(),
        }
    }
}

/// Fixed durations of the timed transition stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransitionTimings {
    #[serde(deserialize_with = "millis::deserialize")]
    pub zoom_in: Duration,
    #[serde(deserialize_with = "millis::deserialize")]
    pub changing_scene: Duration,
    #[serde(deserialize_with = "millis::deserialize")]
    pub settle: Duration,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            zoom_in: ZOOM_IN_DURATION,
            changing_scene: CHANGING_SCENE_DURATION,
            settle: SETTLE_DURATION,
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
