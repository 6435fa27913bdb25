//! Static tour graph: scenes, their connections and the hotspots they own.
//!
//! The graph is validated once at construction; afterwards it is read-only and
//! every connection and navigation target is guaranteed to resolve.

use crate::config::ViewerConfig;
use crate::error::{GraphError, Result, TourError};
use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;
use serde::Deserialize;

pub type SceneId = String;

/// Point on the panorama sphere: `phi` is the polar angle from the zenith and
/// `theta` the azimuth, both in radians.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SphericalPosition {
    pub phi: f32,
    pub theta: f32,
}

impl SphericalPosition {
    pub const fn new(phi: f32, theta: f32) -> Self {
        Self { phi, theta }
    }

    /// Unit vector pointing from the sphere center towards this position.
    pub fn direction(self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta)
    }

    pub fn to_cartesian(self, radius: f32) -> Vec3 {
        self.direction() * radius
    }
}

/// Scene location on the mini-map, in percent of the map area.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HotspotKind {
    Info,
    Navigation { target: SceneId },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "HotspotRecord")]
pub struct Hotspot {
    pub id: String,
    pub title: String,
    pub description: String,
    pub position: SphericalPosition,
    pub kind: HotspotKind,
}

impl Hotspot {
    pub fn info(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        position: SphericalPosition,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            position,
            kind: HotspotKind::Info,
        }
    }

    pub fn navigation(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        position: SphericalPosition,
        target: impl Into<SceneId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            position,
            kind: HotspotKind::Navigation {
                target: target.into(),
            },
        }
    }

    /// Target scene for navigation hotspots.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            HotspotKind::Navigation { target } => Some(target),
            HotspotKind::Info => None,
        }
    }
}

// Wire shape of a hotspot; the variant tag and optional target are folded
// into `HotspotKind` so an info hotspot can never carry a target.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HotspotRecord {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    position: SphericalPosition,
    #[serde(rename = "type")]
    variant: HotspotVariant,
    #[serde(default)]
    target_scene: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum HotspotVariant {
    Info,
    Navigation,
}

impl TryFrom<HotspotRecord> for Hotspot {
    type Error = GraphError;

    fn try_from(r: HotspotRecord) -> Result<Self, GraphError> {
        let kind = match (r.variant, r.target_scene) {
            (HotspotVariant::Info, None) => HotspotKind::Info,
            (HotspotVariant::Info, Some(_)) => return Err(GraphError::UnexpectedTarget(r.id)),
            (HotspotVariant::Navigation, Some(target)) => HotspotKind::Navigation { target },
            (HotspotVariant::Navigation, None) => return Err(GraphError::MissingTarget(r.id)),
        };
        Ok(Self {
            id: r.id,
            title: r.title,
            description: r.description,
            position: r.position,
            kind,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub name: String,
    /// Panorama image reference handed to the asset loader.
    pub image: String,
    pub position: MapPosition,
    #[serde(default)]
    pub connections: Vec<SceneId>,
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
}

impl Scene {
    pub fn hotspot(&self, id: &str) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }
}

/// One undirected mini-map connection line.
#[derive(Clone, Copy, Debug)]
pub struct MapEdge<'a> {
    pub from: &'a Scene,
    pub to: &'a Scene,
}

#[derive(Clone, Debug)]
pub struct TourGraph {
    scenes: Vec<Scene>,
    index: FnvHashMap<SceneId, usize>,
}

impl TourGraph {
    pub fn new(scenes: Vec<Scene>) -> Result<Self, GraphError> {
        if scenes.is_empty() {
            return Err(GraphError::Empty);
        }
        let mut index = FnvHashMap::default();
        for (i, scene) in scenes.iter().enumerate() {
            if index.insert(scene.id.clone(), i).is_some() {
                return Err(GraphError::DuplicateScene(scene.id.clone()));
            }
        }
        for scene in &scenes {
            let mut seen = FnvHashSet::default();
            for hotspot in &scene.hotspots {
                if !seen.insert(hotspot.id.as_str()) {
                    return Err(GraphError::DuplicateHotspot {
                        scene: scene.id.clone(),
                        hotspot: hotspot.id.clone(),
                    });
                }
                if let Some(target) = hotspot.target() {
                    if !index.contains_key(target) {
                        return Err(GraphError::DanglingTarget {
                            scene: scene.id.clone(),
                            hotspot: hotspot.id.clone(),
                            target: target.to_string(),
                        });
                    }
                }
            }
            if let Some(target) = scene.connections.iter().find(|c| !index.contains_key(*c)) {
                return Err(GraphError::DanglingConnection {
                    scene: scene.id.clone(),
                    target: target.clone(),
                });
            }
        }
        log::info!("[tour] loaded {} scenes", scenes.len());
        Ok(Self { scenes, index })
    }

    pub fn get_scene(&self, id: &str) -> Result<&Scene> {
        self.index
            .get(id)
            .map(|&i| &self.scenes[i])
            .ok_or_else(|| TourError::SceneNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Scenes in declaration order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Connection lines for the mini-map, one per connected pair regardless
    /// of whether the connection is declared in one or both directions.
    pub fn minimap_edges(&self) -> Vec<MapEdge<'_>> {
        let mut seen = FnvHashSet::default();
        let mut edges = Vec::new();
        for (i, scene) in self.scenes.iter().enumerate() {
            for conn in &scene.connections {
                let j = self.index[conn.as_str()];
                if i == j || !seen.insert((i.min(j), i.max(j))) {
                    continue;
                }
                edges.push(MapEdge {
                    from: scene,
                    to: &self.scenes[j],
                });
            }
        }
        edges
    }
}

/// A complete tour document: the graph, where to start and viewer options.
#[derive(Clone, Debug)]
pub struct Tour {
    pub graph: TourGraph,
    pub initial_scene: SceneId,
    pub viewer: ViewerConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TourManifest {
    initial_scene: SceneId,
    #[serde(default)]
    viewer: ViewerConfig,
    scenes: Vec<Scene>,
}

impl Tour {
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: TourManifest = serde_json::from_str(json)?;
        let graph = TourGraph::new(manifest.scenes)?;
        if !graph.contains(&manifest.initial_scene) {
            return Err(GraphError::UnknownInitialScene(manifest.initial_scene).into());
        }
        Ok(Self {
            graph,
            initial_scene: manifest.initial_scene,
            viewer: manifest.viewer,
        })
    }
}
