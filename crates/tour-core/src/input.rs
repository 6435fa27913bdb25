use crate::camera::CameraState;
use crate::constants::{DRAG_SENSITIVITY, WHEEL_FOV_PER_DELTA};
use glam::Vec2;

/// Pointer drag state. While dragging, the camera orientation is derived from
/// the anchor captured at pointer-down, not accumulated per move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { origin: Vec2, lon0: f32, lat0: f32 },
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InputController {
    state: DragState,
}

impl InputController {
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Start (or re-anchor) a drag at `pos`.
    pub fn pointer_down(&mut self, pos: Vec2, camera: &CameraState) {
        self.state = DragState::Dragging {
            origin: pos,
            lon0: camera.lon,
            lat0: camera.lat,
        };
    }

    /// Apply a drag move. Latitude is deliberately left unclamped here; the
    /// render loop clamps once per frame. Returns false when not dragging.
    pub fn pointer_move(&mut self, pos: Vec2, camera: &mut CameraState) -> bool {
        let DragState::Dragging { origin, lon0, lat0 } = self.state else {
            return false;
        };
        let d = pos - origin;
        camera.lon = lon0 - d.x * DRAG_SENSITIVITY;
        camera.lat = lat0 + d.y * DRAG_SENSITIVITY;
        true
    }

    pub fn pointer_up(&mut self) {
        self.state = DragState::Idle;
    }

    /// Wheel zoom, independent of drag state.
    pub fn wheel(&self, delta_y: f32, camera: &mut CameraState) {
        camera.zoom_by(delta_y * WHEEL_FOV_PER_DELTA);
    }
}
