//! First-person yaw-only camera with pinhole perspective projection.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use thiserror::Error;
use tracing::debug;
use wire_core::Vec3;

#[derive(Debug, Error, PartialEq)]
pub enum CameraError {
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive {
        name: &'static str,
        value: f32,
    },
    #[error("near clip {near} must be less than far clip {far}")]
    ClipOrder { near: f32, far: f32 },
    #[error("eye height must be finite, got {0}")]
    EyeHeight(f32),
}

/// Projection parameters, fixed for the lifetime of a camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Projection scale; larger values narrow the apparent field of view.
    pub focal_length: f32,
    pub eye_height: f32,
    pub near_clip: f32,
    pub far_clip: f32,
    /// Half-width ratio of the cone used by [`Camera::is_in_view`]: a point is
    /// kept while `|x|` and `|y|` stay within `view_cone * z`.
    pub view_cone: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            focal_length: 400.0,
            eye_height: 50.0,
            near_clip: 10.0,
            far_clip: 5000.0,
            view_cone: 1.5,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), CameraError> {
        for (name, value) in [
            ("focal length", self.focal_length),
            ("near clip", self.near_clip),
            ("far clip", self.far_clip),
            ("view cone", self.view_cone),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CameraError::NonPositive { name, value });
            }
        }
        if self.near_clip >= self.far_clip {
            return Err(CameraError::ClipOrder {
                near: self.near_clip,
                far: self.far_clip,
            });
        }
        if !self.eye_height.is_finite() {
            return Err(CameraError::EyeHeight(self.eye_height));
        }
        Ok(())
    }
}

/// Screen dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1200,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// Projected point. `z` is the camera-space depth; larger means farther.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    /// Yaw in radians; positive turns right of +Z.
    pub rotation: f32,
    focal_length: f32,
    near_clip: f32,
    far_clip: f32,
    view_cone: f32,
    eye_height: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_valid(CameraConfig::default())
    }
}

impl Camera {
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        config.validate()?;
        debug!(
            focal_length = config.focal_length,
            near = config.near_clip,
            far = config.far_clip,
            "camera created"
        );
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: CameraConfig) -> Self {
        Self {
            position: Vec3::new(0.0, config.eye_height, 0.0),
            rotation: 0.0,
            focal_length: config.focal_length,
            near_clip: config.near_clip,
            far_clip: config.far_clip,
            view_cone: config.view_cone,
            eye_height: config.eye_height,
        }
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    pub fn far_clip(&self) -> f32 {
        self.far_clip
    }

    pub fn view_cone(&self) -> f32 {
        self.view_cone
    }

    /// Height above the ground the eye is held at when following an entity.
    pub fn eye_height(&self) -> f32 {
        self.eye_height
    }

    /// Moves the eye and sets the yaw, wrapped into `[0, 2π)`.
    pub fn set_pose(&mut self, position: Vec3, rotation: f32) {
        self.position = position;
        self.rotation = wrap_angle(rotation);
    }

    /// Translate by `-position`, then rotate by `-rotation`.
    pub fn world_to_camera_space(&self, point: Vec3) -> Vec3 {
        point.subtract(self.position).rotate_y(-self.rotation)
    }

    /// Projects a world point, or `None` when it lies on or behind the near
    /// plane or beyond the far plane. Segments that straddle those planes
    /// must be clipped first, see [`crate::clip::project_segment`].
    pub fn world_to_screen(&self, point: Vec3, viewport: Viewport) -> Option<ScreenPoint> {
        let cam = self.world_to_camera_space(point);
        if cam.z <= self.near_clip || cam.z > self.far_clip {
            return None;
        }
        self.project_camera_space(cam, viewport)
    }

    /// Pinhole projection of a point already in camera space. Only rejects
    /// points at or behind the eye (`z <= 0`); no near/far test.
    pub fn project_camera_space(&self, cam: Vec3, viewport: Viewport) -> Option<ScreenPoint> {
        if cam.z <= 0.0 {
            return None;
        }
        let (cx, cy) = viewport.center();
        Some(ScreenPoint {
            x: (cam.x / cam.z) * self.focal_length + cx,
            y: cy - (cam.y / cam.z) * self.focal_length,
            z: cam.z,
        })
    }

    /// Fast pre-filter before clipping work. Approximates the field of view
    /// with a fixed cone and ignores focal length and aspect ratio, so it is
    /// not an exact visibility test.
    pub fn is_in_view(&self, point: Vec3) -> bool {
        let cam = self.world_to_camera_space(point);
        if !self.depth_in_range(cam.z, 0.0) {
            return false;
        }
        let half = cam.z * self.view_cone;
        cam.x.abs() <= half && cam.y.abs() <= half
    }

    /// Depth stage of [`Camera::is_in_view`] for a bounding sphere: false
    /// only when the whole sphere is on or behind the near plane or beyond
    /// the far plane. The lateral cone is not applied.
    pub fn is_sphere_in_depth(&self, center: Vec3, radius: f32) -> bool {
        let z = self.world_to_camera_space(center).z;
        self.depth_in_range(z, radius)
    }

    fn depth_in_range(&self, z: f32, margin: f32) -> bool {
        z + margin > self.near_clip && z - margin <= self.far_clip
    }

    pub fn forward(&self) -> Vec3 {
        let (sin, cos) = self.rotation.sin_cos();
        Vec3::new(sin, 0.0, cos)
    }

    pub fn right(&self) -> Vec3 {
        let (sin, cos) = self.rotation.sin_cos();
        Vec3::new(cos, 0.0, -sin)
    }
}

pub(crate) fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
