//! Wireframe model instances drawn through the clip-and-project pipeline.

use crate::mode::RenderContext;
use crate::sink::LineSink;
use std::sync::Arc;
use tracing::warn;
use wire_core::WireframeModel;
use wire_geom::{project_segment, Camera, DepthFade, Transform};

pub const MODEL_LINE_WIDTH: f32 = 2.0;

/// One placed copy of a shared model.
#[derive(Debug, Clone)]
pub struct ModelInstance {
    pub model: Arc<WireframeModel>,
    pub transform: Transform,
}

impl ModelInstance {
    pub fn new(model: Arc<WireframeModel>, transform: Transform) -> Self {
        Self { model, transform }
    }

    /// True when the bounding sphere has some depth between the clip planes.
    /// Lateral extent is left to per-edge clipping.
    pub fn may_be_visible(&self, camera: &Camera) -> bool {
        camera.is_sphere_in_depth(self.transform.position, self.model.bounds_radius())
    }
}

/// Edges fade towards the far plane but stay fully bright up close.
pub fn model_fade(camera: &Camera) -> DepthFade {
    DepthFade {
        max_distance: camera.far_clip(),
        min_alpha: 0.1,
        max_alpha: 1.0,
    }
}

/// Draws every visible edge of `instance` and returns how many were emitted,
/// or `None` when the whole instance was culled before any edge work.
pub fn render_model(
    instance: &ModelInstance,
    camera: &Camera,
    ctx: &RenderContext,
    sink: &mut dyn LineSink,
) -> Option<usize> {
    if !instance.may_be_visible(camera) {
        return None;
    }

    let model = &instance.model;
    let world = instance.transform.apply_all(&model.vertices);
    let fade = model_fade(camera);
    let mut drawn = 0;

    for (idx, edge) in model.edges.iter().enumerate() {
        let (Some(&a), Some(&b)) = (world.get(edge.start), world.get(edge.end)) else {
            warn!(
                edge = idx,
                start = edge.start,
                end = edge.end,
                "edge skipped: vertex out of range"
            );
            continue;
        };
        let Some(seg) = project_segment(camera, a, b, ctx.viewport, fade) else {
            continue;
        };
        let style = ctx.style(MODEL_LINE_WIDTH, model.edge_color(edge), seg.alpha);
        sink.draw_line(seg.start, seg.end, style);
        drawn += 1;
    }

    Some(drawn)
}
