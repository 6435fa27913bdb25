use crate::camera::CameraState;
use crate::constants::{OPACITY_STEP, TRANSITION_FOV_STEP, TRANSITION_OPACITY_PLATEAU};
use crate::transition::TransitionStage;

/// Sphere opacity plus the transition zoom, advanced by bounded per-frame
/// increments. The stage is read fresh every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereRamp {
    opacity: f32,
}

impl Default for SphereRamp {
    // fully transparent until the first panorama is bound
    fn default() -> Self {
        Self { opacity: 0.0 }
    }
}

impl SphereRamp {
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Advance one frame. `texture_ready` is true when the sphere shows the
    /// active scene's panorama; otherwise opacity holds where it is.
    pub fn step(
        &mut self,
        stage: TransitionStage,
        texture_ready: bool,
        camera: &mut CameraState,
    ) -> f32 {
        match stage {
            TransitionStage::ZoomingIn => {
                if self.opacity > TRANSITION_OPACITY_PLATEAU {
                    self.opacity = (self.opacity - OPACITY_STEP).max(TRANSITION_OPACITY_PLATEAU);
                }
                camera.zoom_by(-TRANSITION_FOV_STEP);
            }
            TransitionStage::ChangingScene => {
                self.opacity = self.opacity.min(TRANSITION_OPACITY_PLATEAU);
            }
            TransitionStage::Settling | TransitionStage::Idle => {
                if texture_ready {
                    self.opacity = (self.opacity + OPACITY_STEP).min(1.0);
                }
            }
        }
        self.opacity
    }
}
