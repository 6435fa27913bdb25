//! Narrow contracts for the collaborators the session drives: the renderer
//! that owns GPU resources and the loader that turns image references into
//! textures.

use crate::camera::{CameraState, Viewport};
use crate::error::TourError;
use crate::tour::SceneId;

pub trait RenderBackend {
    /// Texture handle produced by the asset loader for this backend.
    type Texture;

    /// Put `texture` on the panorama sphere, releasing the previous one.
    fn bind_texture(&mut self, texture: Self::Texture);

    fn set_opacity(&mut self, opacity: f32);

    fn resize(&mut self, viewport: Viewport);

    /// Draw the sphere as seen by `camera` and present it.
    fn submit_frame(&mut self, camera: &CameraState) -> Result<(), TourError>;

    /// Release textures, geometry and the rendering surface. Called exactly
    /// once per attached backend.
    fn dispose(&mut self) -> Result<(), TourError>;
}

/// A panorama load handed to the asset loader. The loader reports back with
/// the same `id`; completions for superseded ids are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureRequest {
    pub id: u64,
    pub scene: SceneId,
    pub image: String,
}

pub trait TextureLoader {
    /// Start an asynchronous load. Caching and retries are the loader's
    /// business; the session only waits for one completion per request.
    fn load(&mut self, request: TextureRequest);

    /// The session was torn down: loads still in flight must not produce
    /// textures anyone has to release.
    fn shutdown(&mut self) {}
}
