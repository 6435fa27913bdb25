//! Per-frame hotspot projection, culling and ranking.

use crate::camera::{project, CameraState, Viewport};
use crate::constants::MAX_VISIBLE_HOTSPOTS;
use crate::tour::{Hotspot, Scene};
use crate::transition::TransitionStage;
use glam::Vec2;
use smallvec::SmallVec;

/// A hotspot that survived culling, with its pixel position and how closely
/// it lines up with the view direction (cosine, 1.0 = dead center).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedHotspot<'a> {
    pub hotspot: &'a Hotspot,
    pub screen: Vec2,
    pub alignment: f32,
}

pub type VisibleHotspots<'a> = SmallVec<[ProjectedHotspot<'a>; MAX_VISIBLE_HOTSPOTS]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankOptions {
    pub limit: usize,
    /// Reject hotspots whose direction faces away from the view direction.
    /// Without it a point behind the camera can land inside the viewport.
    pub cull_behind_camera: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: MAX_VISIBLE_HOTSPOTS,
            cull_behind_camera: false,
        }
    }
}

/// Project `hotspots`, keep those inside the viewport (edges included) and
/// return the best aligned ones, highest first. Equal alignments keep their
/// original order.
pub fn rank_hotspots<'a>(
    hotspots: &'a [Hotspot],
    camera: &CameraState,
    viewport: Viewport,
    opts: RankOptions,
) -> VisibleHotspots<'a> {
    let camera = camera.clamped();
    let view_dir = camera.view_direction();
    let mut on_screen: SmallVec<[ProjectedHotspot<'a>; 8]> = hotspots
        .iter()
        .filter_map(|hotspot| {
            let alignment = view_dir.dot(hotspot.position.direction());
            if opts.cull_behind_camera && alignment <= 0.0 {
                return None;
            }
            let screen = project(hotspot.position, &camera, viewport);
            viewport.contains(screen).then_some(ProjectedHotspot {
                hotspot,
                screen,
                alignment,
            })
        })
        .collect();
    // slice::sort_by is stable, which gives the original-order tie break
    on_screen.sort_by(|a, b| b.alignment.total_cmp(&a.alignment));
    on_screen.into_iter().take(opts.limit).collect()
}

/// Hotspots to show this frame. Markers are suppressed while a scene
/// transition is in flight.
pub fn frame_hotspots<'a>(
    stage: TransitionStage,
    scene: &'a Scene,
    camera: &CameraState,
    viewport: Viewport,
    opts: RankOptions,
) -> VisibleHotspots<'a> {
    if !stage.is_idle() {
        return VisibleHotspots::new();
    }
    rank_hotspots(&scene.hotspots, camera, viewport, opts)
}
