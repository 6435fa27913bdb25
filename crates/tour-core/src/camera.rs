//! Spherical camera model for viewing a panorama from the sphere center.
//!
//! Orientation is kept as longitude/latitude in degrees. The look-at target is
//! the point on the panorama sphere at polar angle `90° - lat` and azimuth
//! `lon`, so `lon = lat = 0` looks down +X with +Y up. Matrices follow the
//! right-handed conventions used by the wgpu renderer.

use crate::constants::{
    CAMERA_ZFAR, CAMERA_ZNEAR, FOV_DEFAULT, FOV_MAX, FOV_MIN, LAT_MAX, LAT_MIN, SPHERE_RADIUS,
};
use crate::tour::SphericalPosition;
use glam::{Mat4, Vec2, Vec3};

/// Size of the rendering surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Edge-inclusive containment test in pixel space.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

/// Camera orientation and zoom, all in degrees.
///
/// Drag input may leave `lat` out of range between frames; [`CameraState::clamp`]
/// runs once per frame before anything reads the state for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub lon: f32,
    pub lat: f32,
    pub fov: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            lon: 0.0,
            lat: 0.0,
            fov: FOV_DEFAULT,
        }
    }
}

#[inline]
pub fn clamp_lat(lat: f32) -> f32 {
    lat.clamp(LAT_MIN, LAT_MAX)
}

#[inline]
pub fn clamp_fov(fov: f32) -> f32 {
    fov.clamp(FOV_MIN, FOV_MAX)
}

impl CameraState {
    pub fn rotate_by(&mut self, d_lon: f32, d_lat: f32) {
        self.lon += d_lon;
        self.lat = clamp_lat(self.lat + d_lat);
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = clamp_fov(fov);
    }

    pub fn zoom_by(&mut self, delta: f32) {
        self.set_fov(self.fov + delta);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn clamp(&mut self) {
        self.lat = clamp_lat(self.lat);
        self.fov = clamp_fov(self.fov);
    }

    pub fn clamped(mut self) -> Self {
        self.clamp();
        self
    }

    /// Unit vector the camera looks along.
    pub fn view_direction(&self) -> Vec3 {
        SphericalPosition::new((90.0 - self.lat).to_radians(), self.lon.to_radians()).direction()
    }

    pub fn look_target(&self) -> Vec3 {
        self.view_direction() * SPHERE_RADIUS
    }

    /// World to view transform for an eye at the sphere center.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(Vec3::ZERO, self.look_target(), Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, CAMERA_ZNEAR, CAMERA_ZFAR)
    }

    pub fn view_projection(&self, viewport: Viewport) -> Mat4 {
        self.projection_matrix(viewport.aspect()) * self.view_matrix()
    }
}

/// Project a point of the panorama sphere to pixel coordinates (y down).
///
/// Pure in its three inputs. Points behind the camera still produce a screen
/// position; callers decide whether to reject them.
pub fn project(position: SphericalPosition, camera: &CameraState, viewport: Viewport) -> Vec2 {
    let world = position.to_cartesian(SPHERE_RADIUS);
    let ndc = camera.clamped().view_projection(viewport).project_point3(world);
    let half = viewport.center();
    Vec2::new(ndc.x * half.x + half.x, -ndc.y * half.y + half.y)
}
