//! Stock obstacle and pickup models.

use crate::color;
use crate::model::{create_model, ModelError, WireframeModel};
use crate::vector::Vec3;

const BOX_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// 50-unit cube resting on the ground plane.
pub fn cube() -> Result<WireframeModel, ModelError> {
    let h = 25.0;
    let vertices = vec![
        Vec3::new(-h, 0.0, -h),
        Vec3::new(h, 0.0, -h),
        Vec3::new(h, 0.0, h),
        Vec3::new(-h, 0.0, h),
        Vec3::new(-h, 50.0, -h),
        Vec3::new(h, 50.0, -h),
        Vec3::new(h, 50.0, h),
        Vec3::new(-h, 50.0, h),
    ];
    create_model(vertices, &BOX_EDGES, Some(color::OBSTACLE))
}

pub fn pyramid() -> Result<WireframeModel, ModelError> {
    let vertices = vec![
        Vec3::new(-30.0, 0.0, -30.0),
        Vec3::new(30.0, 0.0, -30.0),
        Vec3::new(30.0, 0.0, 30.0),
        Vec3::new(-30.0, 0.0, 30.0),
        Vec3::new(0.0, 60.0, 0.0),
    ];
    let edges = [
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 0],
        [0, 4],
        [1, 4],
        [2, 4],
        [3, 4],
    ];
    create_model(vertices, &edges, Some(color::OBSTACLE))
}

/// Shield outline with a plus sign, standing in the XY plane. The two
/// mirrored halves each carry their own copy of the centre-line vertices.
pub fn shield_pickup() -> Result<WireframeModel, ModelError> {
    let vertices = vec![
        // right half
        Vec3::new(17.502232, 37.41943, 0.0),
        Vec3::new(19.680687, 30.166288, -0.000001),
        Vec3::new(12.397648, 10.734774, -0.000002),
        Vec3::new(0.0, 0.0, -0.000003),
        Vec3::new(0.0, 33.160339, -0.000001),
        Vec3::new(0.0, 13.160341, -0.000002),
        Vec3::new(-10.0, 23.160341, -0.000002),
        Vec3::new(10.0, 23.160341, -0.000002),
        Vec3::new(0.0, 39.328648, 0.0),
        Vec3::new(18.827763, 23.444191, -0.000002),
        Vec3::new(16.65493, 16.722095, -0.000002),
        // left half
        Vec3::new(-17.502232, 37.41943, 0.0),
        Vec3::new(-19.680687, 30.166288, -0.000001),
        Vec3::new(-12.397648, 10.734774, -0.000002),
        Vec3::new(0.0, 0.0, -0.000003),
        Vec3::new(0.0, 33.160339, -0.000001),
        Vec3::new(0.0, 13.160341, -0.000002),
        Vec3::new(10.0, 23.160341, -0.000002),
        Vec3::new(-10.0, 23.160341, -0.000002),
        Vec3::new(0.0, 39.328648, 0.0),
        Vec3::new(-18.827763, 23.444191, -0.000002),
        Vec3::new(-16.65493, 16.722095, -0.000002),
    ];
    let edges = [
        [8, 0],
        [0, 1],
        [10, 2],
        [2, 3],
        [4, 5],
        [6, 7],
        [1, 9],
        [9, 10],
        [19, 11],
        [11, 12],
        [21, 13],
        [13, 14],
        [15, 16],
        [17, 18],
        [12, 20],
        [20, 21],
    ];
    create_model(vertices, &edges, Some(color::PICKUP_ARMOR))
}
