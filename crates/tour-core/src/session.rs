//! One viewer instance: camera, drag input, scene transitions and the GPU
//! backend lifecycle, advanced one frame at a time.
//!
//! The session starts `Uninitialized`; every command is a no-op until a
//! backend is attached. Stage timers live on the session clock and are
//! drained at frame boundaries (or whenever the host calls
//! [`NavigationSession::poll_timers`]), each one applying its whole state
//! update in a single call. Teardown cancels timers and the render loop and
//! disposes the backend exactly once.

use crate::backend::{RenderBackend, TextureLoader, TextureRequest};
use crate::camera::{CameraState, Viewport};
use crate::config::ViewerConfig;
use crate::constants::{ROTATE_STEP_DEG, ZOOM_STEP_DEG};
use crate::error::{Result, TourError};
use crate::frame_loop::{CancelToken, RenderLoop};
use crate::hotspots::{frame_hotspots, RankOptions, VisibleHotspots};
use crate::input::InputController;
use crate::ramp::SphereRamp;
use crate::timers::TimerQueue;
use crate::tour::{Hotspot, HotspotKind, Scene, SceneId, Tour, TourGraph};
use crate::transition::{StageChange, TransitionMachine, TransitionStage, TransitionState};
use glam::Vec2;
use std::rc::Rc;
use std::time::Duration;

pub enum Lifecycle<R> {
    Uninitialized,
    Ready(R),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    Up,
    Down,
    Left,
    Right,
}

/// User-facing commands exposed by the presentational layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerCommand {
    Navigate(SceneId),
    ActivateHotspot(String),
    Rotate(RotateDirection),
    ZoomIn,
    ZoomOut,
    Reset,
    ToggleFullscreen,
    CloseInfo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionTimer {
    AdvanceStage,
}

pub struct NavigationSession<R: RenderBackend, L: TextureLoader> {
    graph: Rc<TourGraph>,
    config: ViewerConfig,
    lifecycle: Lifecycle<R>,
    loader: L,
    viewport: Viewport,
    camera: CameraState,
    input: InputController,
    transition: TransitionMachine,
    timers: TimerQueue<SessionTimer>,
    ramp: SphereRamp,
    active_scene: SceneId,
    active_info: Option<String>,
    fullscreen: bool,
    pending_texture: Option<u64>,
    next_request_id: u64,
    // scene whose panorama the backend currently shows
    bound_scene: Option<SceneId>,
    now: Duration,
    loop_token: CancelToken,
}

impl<R: RenderBackend, L: TextureLoader> NavigationSession<R, L> {
    pub fn new(
        graph: Rc<TourGraph>,
        initial_scene: &str,
        config: ViewerConfig,
        loader: L,
    ) -> Result<Self> {
        let active_scene = graph.get_scene(initial_scene)?.id.clone();
        Ok(Self {
            transition: TransitionMachine::new(config.timings),
            graph,
            config,
            lifecycle: Lifecycle::Uninitialized,
            loader,
            viewport: Viewport::new(1.0, 1.0),
            camera: CameraState::default(),
            input: InputController::default(),
            timers: TimerQueue::new(),
            ramp: SphereRamp::default(),
            active_scene,
            active_info: None,
            fullscreen: false,
            pending_texture: None,
            next_request_id: 0,
            bound_scene: None,
            now: Duration::ZERO,
            loop_token: CancelToken::new(),
        })
    }

    pub fn from_tour(tour: Tour, loader: L) -> Result<Self> {
        Self::new(Rc::new(tour.graph), &tour.initial_scene, tour.viewer, loader)
    }

    // ---------------- Lifecycle ----------------

    /// Hand the session its rendering backend and start loading the active
    /// scene's panorama. A previously attached backend is disposed first.
    pub fn attach(&mut self, mut backend: R, viewport: Viewport) {
        self.loop_token.cancel();
        self.release_backend();
        backend.resize(viewport);
        backend.set_opacity(self.ramp.opacity());
        self.viewport = viewport;
        self.lifecycle = Lifecycle::Ready(backend);
        self.loop_token = CancelToken::new();
        self.bound_scene = None;
        log::info!("[session] attached, scene \"{}\"", self.active_scene);
        self.request_texture();
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Ready(_))
    }

    /// Frame driver bound to this session's cancellation token.
    pub fn render_loop(&self) -> RenderLoop {
        RenderLoop::new(self.loop_token.clone())
    }

    /// Stop the render loop, invalidate timers and release the backend. A
    /// transition in flight is completed without animation so the session
    /// never stays parked mid-sequence. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.loop_token.cancel();
        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            log::debug!("[session] cancelled {} pending timers", cancelled);
        }
        self.input.pointer_up();
        let was_ready = self.release_backend();
        self.pending_texture = None;
        while let Some(advance) = self.transition.advance() {
            if let StageChange::SwapScene { target } = advance.change {
                self.swap_scene(&target);
            }
        }
        if was_ready {
            self.loader.shutdown();
            log::info!("[session] torn down");
        }
    }

    fn release_backend(&mut self) -> bool {
        match std::mem::replace(&mut self.lifecycle, Lifecycle::Uninitialized) {
            Lifecycle::Ready(mut backend) => {
                if let Err(e) = backend.dispose() {
                    log::warn!("[session] backend dispose failed (ignored): {}", e);
                }
                true
            }
            Lifecycle::Uninitialized => false,
        }
    }

    // ---------------- Per-frame work ----------------

    /// Fire every stage timer due at `now`.
    pub fn poll_timers(&mut self, now: Duration) {
        self.now = self.now.max(now);
        while let Some(timer) = self.timers.pop_due(self.now) {
            match timer {
                SessionTimer::AdvanceStage => self.advance_stage(),
            }
        }
    }

    pub fn next_timer_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// One render step: due timers, idle auto-rotation, the per-frame camera
    /// clamp, the opacity/zoom ramp and frame submission.
    pub fn frame(&mut self, now: Duration) {
        self.poll_timers(now);
        let texture_ready = self.pending_texture.is_none()
            && self.bound_scene.as_deref() == Some(self.active_scene.as_str());
        let Lifecycle::Ready(backend) = &mut self.lifecycle else {
            return;
        };
        if !self.input.is_dragging() && self.transition.is_idle() {
            self.camera.lon += self.config.auto_rotate_deg_per_frame;
        }
        self.camera.clamp();
        let opacity = self
            .ramp
            .step(self.transition.stage(), texture_ready, &mut self.camera);
        backend.set_opacity(opacity);
        if let Err(e) = backend.submit_frame(&self.camera) {
            log::error!("render error: {:?}", e);
        }
    }

    /// Ranked on-screen hotspots for the active scene; empty while a
    /// transition is in flight or no backend is attached.
    pub fn visible_hotspots(&self) -> VisibleHotspots<'_> {
        let Some(scene) = self.active_scene().filter(|_| self.is_ready()) else {
            return VisibleHotspots::new();
        };
        let opts = RankOptions {
            limit: self.config.max_visible_hotspots,
            cull_behind_camera: self.config.cull_behind_camera,
        };
        frame_hotspots(
            self.transition.stage(),
            scene,
            &self.camera,
            self.viewport,
            opts,
        )
    }

    // ---------------- Textures ----------------

    fn request_texture(&mut self) {
        if !self.is_ready() {
            return;
        }
        let (scene, image) = match self.graph.get_scene(&self.active_scene) {
            Ok(s) => (s.id.clone(), s.image.clone()),
            Err(e) => {
                log::error!("[texture] {}", e);
                return;
            }
        };
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.pending_texture = Some(id);
        log::debug!("[texture] request {} for \"{}\"", id, scene);
        self.loader.load(TextureRequest { id, scene, image });
    }

    /// Completion signal from the asset loader. A failure leaves the sphere on
    /// its previous texture and opacity; transitions keep running on their
    /// own timers.
    pub fn texture_loaded(&mut self, request_id: u64, result: Result<R::Texture, String>) {
        if self.pending_texture != Some(request_id) {
            log::debug!("[texture] dropping stale completion {}", request_id);
            return;
        }
        self.pending_texture = None;
        match result {
            Ok(texture) => {
                if let Lifecycle::Ready(backend) = &mut self.lifecycle {
                    backend.bind_texture(texture);
                    self.bound_scene = Some(self.active_scene.clone());
                    log::info!("[texture] bound panorama for \"{}\"", self.active_scene);
                }
            }
            Err(reason) => {
                let err = TourError::TextureLoadFailed {
                    scene: self.active_scene.clone(),
                    reason,
                };
                log::warn!("[texture] {}", err);
            }
        }
    }

    pub fn texture_pending(&self) -> bool {
        self.pending_texture.is_some()
    }

    // ---------------- Navigation ----------------

    pub fn navigate(&mut self, target: &str) {
        if !self.is_ready() {
            return;
        }
        if let Err(e) = self.graph.get_scene(target) {
            log::error!("[session] {}; staying on \"{}\"", e, self.active_scene);
            return;
        }
        match self.transition.navigate(&self.active_scene, target) {
            Ok(delay) => {
                self.active_info = None;
                self.timers
                    .schedule(self.now, delay, SessionTimer::AdvanceStage);
            }
            Err(reason) => log::debug!("[session] navigate to \"{}\" ignored: {}", target, reason),
        }
    }

    fn advance_stage(&mut self) {
        let Some(advance) = self.transition.advance() else {
            return;
        };
        match advance.change {
            StageChange::Hold => {}
            StageChange::SwapScene { target } => self.swap_scene(&target),
            StageChange::Finished => {
                log::info!("[transition] arrived at \"{}\"", self.active_scene)
            }
        }
        if let Some(delay) = advance.next_in {
            self.timers
                .schedule(self.now, delay, SessionTimer::AdvanceStage);
        }
    }

    fn swap_scene(&mut self, target: &str) {
        match self.graph.get_scene(target) {
            Ok(scene) => {
                self.active_scene = scene.id.clone();
                self.camera.reset();
                self.request_texture();
            }
            Err(e) => log::error!("[transition] {}; keeping \"{}\"", e, self.active_scene),
        }
    }

    /// Navigation hotspots start a transition; info hotspots open the info
    /// panel.
    pub fn activate_hotspot(&mut self, hotspot_id: &str) {
        if !self.is_ready() {
            return;
        }
        let kind = match self.active_scene().and_then(|s| s.hotspot(hotspot_id)) {
            Some(h) => h.kind.clone(),
            None => {
                log::warn!(
                    "[session] no hotspot \"{}\" in \"{}\"",
                    hotspot_id,
                    self.active_scene
                );
                return;
            }
        };
        match kind {
            HotspotKind::Navigation { target } => self.navigate(&target),
            HotspotKind::Info => self.active_info = Some(hotspot_id.to_string()),
        }
    }

    pub fn close_info(&mut self) {
        self.active_info = None;
    }

    /// Hotspot whose info panel is open.
    pub fn active_info(&self) -> Option<&Hotspot> {
        self.active_info
            .as_deref()
            .and_then(|id| self.active_scene()?.hotspot(id))
    }

    // ---------------- Camera commands ----------------

    pub fn pointer_down(&mut self, pos: Vec2) {
        if self.is_ready() {
            self.input.pointer_down(pos, &self.camera);
        }
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        if self.is_ready() {
            self.input.pointer_move(pos, &mut self.camera);
        }
    }

    pub fn pointer_up(&mut self) {
        self.input.pointer_up();
    }

    pub fn wheel(&mut self, delta_y: f32) {
        if self.is_ready() {
            self.input.wheel(delta_y, &mut self.camera);
        }
    }

    pub fn rotate(&mut self, direction: RotateDirection) {
        if !self.is_ready() {
            return;
        }
        let (d_lon, d_lat) = match direction {
            RotateDirection::Up => (0.0, ROTATE_STEP_DEG),
            RotateDirection::Down => (0.0, -ROTATE_STEP_DEG),
            RotateDirection::Left => (-ROTATE_STEP_DEG, 0.0),
            RotateDirection::Right => (ROTATE_STEP_DEG, 0.0),
        };
        self.camera.rotate_by(d_lon, d_lat);
    }

    pub fn zoom_in(&mut self) {
        if self.is_ready() {
            self.camera.zoom_by(-ZOOM_STEP_DEG);
        }
    }

    pub fn zoom_out(&mut self) {
        if self.is_ready() {
            self.camera.zoom_by(ZOOM_STEP_DEG);
        }
    }

    pub fn reset(&mut self) {
        if self.is_ready() {
            self.camera.reset();
        }
    }

    /// Flip the fullscreen flag; the host performs the actual DOM request.
    pub fn toggle_fullscreen(&mut self) -> bool {
        if self.is_ready() {
            self.fullscreen = !self.fullscreen;
        }
        self.fullscreen
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if let Lifecycle::Ready(backend) = &mut self.lifecycle {
            self.viewport = viewport;
            backend.resize(viewport);
        }
    }

    pub fn apply(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::Navigate(target) => self.navigate(&target),
            ViewerCommand::ActivateHotspot(id) => self.activate_hotspot(&id),
            ViewerCommand::Rotate(direction) => self.rotate(direction),
            ViewerCommand::ZoomIn => self.zoom_in(),
            ViewerCommand::ZoomOut => self.zoom_out(),
            ViewerCommand::Reset => self.reset(),
            ViewerCommand::ToggleFullscreen => {
                self.toggle_fullscreen();
            }
            ViewerCommand::CloseInfo => self.close_info(),
        }
    }

    // ---------------- Read-only views ----------------

    pub fn graph(&self) -> &TourGraph {
        &self.graph
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn stage(&self) -> TransitionStage {
        self.transition.stage()
    }

    pub fn transition_state(&self) -> &TransitionState {
        self.transition.state()
    }

    pub fn active_scene_id(&self) -> &str {
        &self.active_scene
    }

    /// The active scene. Only ids resolved through the graph are ever made
    /// active, so this is `None` only for a graph that changed underneath.
    pub fn active_scene(&self) -> Option<&Scene> {
        self.graph.get_scene(&self.active_scene).ok()
    }

    pub fn opacity(&self) -> f32 {
        self.ramp.opacity()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

impl<R: RenderBackend, L: TextureLoader> Drop for NavigationSession<R, L> {
    fn drop(&mut self) {
        self.teardown();
    }
}
