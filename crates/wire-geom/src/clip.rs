//! Near/far clipping and projection of world-space line segments.
//!
//! Segments are clipped in camera space with plain linear interpolation and
//! then projected directly, so a line with one endpoint behind the eye still
//! draws the part that is in front of it.

use crate::camera::{Camera, ScreenPoint, Viewport};
use serde::{Deserialize, Serialize};
use wire_core::Vec3;

/// Offset past the near plane for clipped endpoints, keeps the perspective
/// divide away from the plane itself.
pub const NEAR_EPSILON: f32 = 0.1;

/// Maps average segment depth to line opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthFade {
    pub max_distance: f32,
    pub min_alpha: f32,
    pub max_alpha: f32,
}

impl DepthFade {
    pub fn new(max_distance: f32) -> Self {
        Self {
            max_distance,
            min_alpha: 0.1,
            max_alpha: 0.8,
        }
    }

    /// Always fully opaque regardless of depth.
    pub fn opaque() -> Self {
        Self {
            max_distance: f32::INFINITY,
            min_alpha: 1.0,
            max_alpha: 1.0,
        }
    }

    pub fn alpha(&self, depth: f32) -> f32 {
        let linear = if self.max_distance > 0.0 {
            1.0 - depth / self.max_distance
        } else {
            0.0
        };
        linear.max(self.min_alpha).min(self.max_alpha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedSegment {
    pub start: ScreenPoint,
    pub end: ScreenPoint,
    pub alpha: f32,
}

/// Clips a world-space segment against the near and far planes.
///
/// Returns the camera-space endpoints in the original order, or `None` when
/// nothing of the segment lies between the planes.
pub fn clip_segment(camera: &Camera, p1: Vec3, p2: Vec3) -> Option<(Vec3, Vec3)> {
    let near = camera.near_clip();
    let far = camera.far_clip();
    let mut a = camera.world_to_camera_space(p1);
    let mut b = camera.world_to_camera_space(p2);

    if a.z <= near && b.z <= near {
        return None;
    }

    // At most one endpoint is behind the near plane here.
    let near_z = near + NEAR_EPSILON;
    if a.z <= near {
        let t = (near_z - a.z) / (b.z - a.z);
        a = a.lerp(b, t);
    } else if b.z <= near {
        let t = (near_z - b.z) / (a.z - b.z);
        b = b.lerp(a, t);
    }

    if a.z > far && b.z > far {
        return None;
    }

    if a.z > far {
        let t = (far - a.z) / (b.z - a.z);
        a = a.lerp(b, t);
    }
    if b.z > far {
        let t = (far - b.z) / (a.z - b.z);
        b = b.lerp(a, t);
    }

    Some((a, b))
}

/// Clips, projects, and fades a world-space segment.
pub fn project_segment(
    camera: &Camera,
    p1: Vec3,
    p2: Vec3,
    viewport: Viewport,
    fade: DepthFade,
) -> Option<ProjectedSegment> {
    let (a, b) = clip_segment(camera, p1, p2)?;
    let start = camera.project_camera_space(a, viewport)?;
    let end = camera.project_camera_space(b, viewport)?;
    let alpha = fade.alpha((a.z + b.z) / 2.0);
    Some(ProjectedSegment { start, end, alpha })
}
