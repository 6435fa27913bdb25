//! Scene-change sequencing: `idle → zooming-in → changing-scene → settling → idle`.
//!
//! The machine only tracks stage and target. Stage advancement is driven by
//! timers owned by the session; each [`TransitionMachine::advance`] reports
//! what the owner has to do and how long the new stage lasts.

use crate::config::TransitionTimings;
use crate::tour::SceneId;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionStage {
    #[default]
    Idle,
    ZoomingIn,
    ChangingScene,
    Settling,
}

impl TransitionStage {
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ZoomingIn => "zooming-in",
            Self::ChangingScene => "changing-scene",
            Self::Settling => "settling",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionState {
    pub stage: TransitionStage,
    /// Scene being navigated to; cleared when the scene is swapped.
    pub target: Option<SceneId>,
}

/// Why a navigate request was dropped. These are expected races between user
/// input and animation timing, not failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TransitionRejected {
    #[error("requested scene is already active")]
    SameScene,
    #[error("a transition is already in flight")]
    InFlight,
}

/// Work the owner must perform after a stage advance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageChange {
    /// Entered `changing-scene`; the sphere holds its low-opacity plateau.
    Hold,
    /// Entered `settling`: make `target` the active scene, reset the camera
    /// and start loading its panorama.
    SwapScene { target: SceneId },
    /// Back to `idle`.
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Advance {
    pub change: StageChange,
    /// Delay until the next advance, if the new stage is timed.
    pub next_in: Option<Duration>,
}

#[derive(Clone, Debug, Default)]
pub struct TransitionMachine {
    state: TransitionState,
    timings: TransitionTimings,
}

impl TransitionMachine {
    pub fn new(timings: TransitionTimings) -> Self {
        Self {
            state: TransitionState::default(),
            timings,
        }
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn stage(&self) -> TransitionStage {
        self.state.stage
    }

    pub fn target(&self) -> Option<&str> {
        self.state.target.as_deref()
    }

    pub fn is_idle(&self) -> bool {
        self.state.stage.is_idle()
    }

    /// Begin a transition from `current` to `target`. On success the machine
    /// is in `zooming-in` and the returned delay is when to call `advance`.
    pub fn navigate(&mut self, current: &str, target: &str) -> Result<Duration, TransitionRejected> {
        if !self.is_idle() {
            return Err(TransitionRejected::InFlight);
        }
        if current == target {
            return Err(TransitionRejected::SameScene);
        }
        self.state = TransitionState {
            stage: TransitionStage::ZoomingIn,
            target: Some(target.to_string()),
        };
        log::info!("[transition] {} -> {}: zooming-in", current, target);
        Ok(self.timings.zoom_in)
    }

    /// Move to the next stage. Returns `None` when idle (nothing in flight).
    pub fn advance(&mut self) -> Option<Advance> {
        let advance = match self.state.stage {
            TransitionStage::Idle => return None,
            TransitionStage::ZoomingIn => {
                self.state.stage = TransitionStage::ChangingScene;
                Advance {
                    change: StageChange::Hold,
                    next_in: Some(self.timings.changing_scene),
                }
            }
            TransitionStage::ChangingScene => {
                self.state.stage = TransitionStage::Settling;
                // A target is always recorded outside idle; an empty one would
                // resolve to SceneNotFound and keep the current scene.
                let target = self.state.target.take().unwrap_or_default();
                Advance {
                    change: StageChange::SwapScene { target },
                    next_in: Some(self.timings.settle),
                }
            }
            TransitionStage::Settling => {
                self.state = TransitionState::default();
                Advance {
                    change: StageChange::Finished,
                    next_in: None,
                }
            }
        };
        log::debug!("[transition] stage -> {}", self.state.stage.label());
        Some(advance)
    }
}
