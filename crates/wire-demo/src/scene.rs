//! Headless frame loop: one rig drives the camera, then the grid and every
//! obstacle are drawn into a line sink.

use crate::config::{SceneConfig, Shape};
use crate::DemoError;
use std::sync::Arc;
use tracing::debug;
use wire_core::{shapes, Vec3, WireframeModel};
use wire_geom::{Camera, DriveIntent, PlayerRig, Transform};
use wire_render::{render_model, GroundGrid, LineSink, ModelInstance, RenderContext};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub grid_lines: usize,
    pub model_lines: usize,
    /// Instances skipped before any edge work.
    pub culled: usize,
}

impl FrameStats {
    pub fn total_lines(&self) -> usize {
        self.grid_lines + self.model_lines
    }
}

/// Loaded once; every obstacle of the same shape shares one model.
struct ModelLibrary {
    cube: Arc<WireframeModel>,
    pyramid: Arc<WireframeModel>,
    shield_pickup: Arc<WireframeModel>,
}

impl ModelLibrary {
    fn load() -> Result<Self, DemoError> {
        Ok(Self {
            cube: Arc::new(shapes::cube()?),
            pyramid: Arc::new(shapes::pyramid()?),
            shield_pickup: Arc::new(shapes::shield_pickup()?),
        })
    }

    fn get(&self, shape: Shape) -> Arc<WireframeModel> {
        match shape {
            Shape::Cube => Arc::clone(&self.cube),
            Shape::Pyramid => Arc::clone(&self.pyramid),
            Shape::ShieldPickup => Arc::clone(&self.shield_pickup),
        }
    }
}

pub struct Scene {
    camera: Camera,
    rig: PlayerRig,
    grid: GroundGrid,
    instances: Vec<ModelInstance>,
    ctx: RenderContext,
}

impl Scene {
    pub fn from_config(config: &SceneConfig) -> Result<Self, DemoError> {
        let mut camera = Camera::new(config.camera)?;
        let rig = PlayerRig::new(config.movement);
        rig.sync_camera(&mut camera);

        let library = ModelLibrary::load()?;
        let instances: Vec<_> = config
            .obstacles
            .iter()
            .map(|o| {
                ModelInstance::new(
                    library.get(o.shape),
                    Transform::new(Vec3::new(o.x, 0.0, o.z), o.rotation),
                )
            })
            .collect();
        debug!(instances = instances.len(), "scene built");

        Ok(Self {
            camera,
            rig,
            grid: GroundGrid::new(config.grid)?,
            instances,
            ctx: RenderContext::new(config.viewport, config.mode),
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn rig(&self) -> &PlayerRig {
        &self.rig
    }

    /// Simulates one frame of `delta_ms` then renders it.
    pub fn tick(
        &mut self,
        delta_ms: f32,
        intent: DriveIntent,
        sink: &mut dyn LineSink,
    ) -> FrameStats {
        self.rig.update(delta_ms, intent, &mut self.camera);
        self.render(sink)
    }

    pub fn render(&self, sink: &mut dyn LineSink) -> FrameStats {
        let mut stats = FrameStats {
            grid_lines: self.grid.render(&self.camera, &self.ctx, sink),
            ..FrameStats::default()
        };
        for instance in &self.instances {
            match render_model(instance, &self.camera, &self.ctx, sink) {
                Some(lines) => stats.model_lines += lines,
                None => stats.culled += 1,
            }
        }
        stats
    }
}
