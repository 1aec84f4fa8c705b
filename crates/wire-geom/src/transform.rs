use glam::{Mat4, Vec3 as GVec3};
use serde::{Deserialize, Serialize};
use wire_core::Vec3;

/// Per-instance pose: world position plus yaw, same convention as the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: f32,
}

impl Transform {
    pub fn new(position: Vec3, rotation: f32) -> Self {
        Self { position, rotation }
    }

    pub fn to_mat4(self) -> Mat4 {
        Mat4::from_translation(GVec3::from(self.position)) * Mat4::from_rotation_y(self.rotation)
    }

    /// Model-local point to world space: rotate, then translate.
    pub fn apply(self, local: Vec3) -> Vec3 {
        local.rotate_y(self.rotation).add(self.position)
    }

    /// Transforms a batch of model vertices with one matrix.
    pub fn apply_all(self, locals: &[Vec3]) -> Vec<Vec3> {
        let mat = self.to_mat4();
        locals
            .iter()
            .map(|&v| Vec3::from(mat.transform_point3(GVec3::from(v))))
            .collect()
    }
}
