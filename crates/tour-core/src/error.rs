use thiserror::Error;

/// Errors raised by the tour core.
///
/// None of these are fatal to a running viewer: lookups and texture loads are
/// recovered by keeping the previous scene or texture, and only graph
/// construction reports them to the caller.
#[derive(Debug, Error)]
pub enum TourError {
    #[error("scene \"{0}\" not found")]
    SceneNotFound(String),
    #[error("failed to load panorama for scene \"{scene}\": {reason}")]
    TextureLoadFailed { scene: String, reason: String },
    #[error("invalid tour graph: {0}")]
    InvalidGraph(#[from] GraphError),
    #[error("tour data could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("render backend error: {0}")]
    Backend(String),
}

/// Construction-time validation failures for a tour graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("tour has no scenes")]
    Empty,
    #[error("duplicate scene id \"{0}\"")]
    DuplicateScene(String),
    #[error("scene \"{scene}\" has duplicate hotspot id \"{hotspot}\"")]
    DuplicateHotspot { scene: String, hotspot: String },
    #[error("scene \"{scene}\" connects to unknown scene \"{target}\"")]
    DanglingConnection { scene: String, target: String },
    #[error("hotspot \"{hotspot}\" in scene \"{scene}\" targets unknown scene \"{target}\"")]
    DanglingTarget {
        scene: String,
        hotspot: String,
        target: String,
    },
    #[error("navigation hotspot \"{0}\" has no target scene")]
    MissingTarget(String),
    #[error("info hotspot \"{0}\" must not carry a target scene")]
    UnexpectedTarget(String),
    #[error("initial scene \"{0}\" is not part of the tour")]
    UnknownInitialScene(String),
}

pub type Result<T, E = TourError> = std::result::Result<T, E>;
