//! Perspective ground grid centred under the camera.

use crate::mode::RenderContext;
use crate::sink::LineSink;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use wire_core::{color, Vec3};
use wire_geom::{project_segment, Camera, DepthFade};

/// Upper bound on grid lines per axis.
pub const MAX_GRID_LINES: usize = 1024;

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive {
        name: &'static str,
        value: f32,
    },
    #[error("ground height must be finite, got {0}")]
    GroundHeight(f32),
    #[error("grid of extent {extent} and spacing {size} needs more than {max} lines per axis")]
    TooDense {
        size: f32,
        extent: f32,
        max: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Spacing between lines in world units.
    pub grid_size: f32,
    /// Half-width of the square of grid drawn around the camera; also the
    /// depth at which lines reach their faintest.
    pub grid_extent: f32,
    pub ground_y: f32,
    pub color: u32,
    pub line_width: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: 200.0,
            grid_extent: 4000.0,
            ground_y: 0.0,
            color: color::GRID,
            line_width: 1.0,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), GridError> {
        for (name, value) in [
            ("grid size", self.grid_size),
            ("grid extent", self.grid_extent),
            ("line width", self.line_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GridError::NonPositive { name, value });
            }
        }
        if !self.ground_y.is_finite() {
            return Err(GridError::GroundHeight(self.ground_y));
        }
        // Snapping can add one line at each end.
        let lines = 2.0 * self.grid_extent / self.grid_size + 3.0;
        if !lines.is_finite() || lines > MAX_GRID_LINES as f32 {
            return Err(GridError::TooDense {
                size: self.grid_size,
                extent: self.grid_extent,
                max: MAX_GRID_LINES,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GroundGrid {
    config: GridConfig,
}

impl GroundGrid {
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Draws the grid lines that survive clipping and returns how many were
    /// emitted.
    pub fn render(&self, camera: &Camera, ctx: &RenderContext, sink: &mut dyn LineSink) -> usize {
        let cfg = self.config;
        let eye = camera.position;
        let span_x = snapped_span(eye.x, cfg.grid_size, cfg.grid_extent);
        let span_z = snapped_span(eye.z, cfg.grid_size, cfg.grid_extent);
        let (Some((start_x, count_x)), Some((start_z, count_z))) = (span_x, span_z) else {
            warn!(
                x = eye.x,
                z = eye.z,
                "ground grid skipped: no usable span around camera"
            );
            return 0;
        };
        let end_x = start_x + (count_x - 1) as f32 * cfg.grid_size;
        let end_z = start_z + (count_z - 1) as f32 * cfg.grid_size;
        let fade = DepthFade::new(cfg.grid_extent);

        let mut drawn = 0;
        // Lines parallel to Z.
        for i in 0..count_x {
            let x = start_x + i as f32 * cfg.grid_size;
            let a = Vec3::new(x, cfg.ground_y, start_z);
            let b = Vec3::new(x, cfg.ground_y, end_z);
            if self.draw_line(camera, ctx, fade, a, b, sink) {
                drawn += 1;
            }
        }
        // Lines parallel to X.
        for i in 0..count_z {
            let z = start_z + i as f32 * cfg.grid_size;
            let a = Vec3::new(start_x, cfg.ground_y, z);
            let b = Vec3::new(end_x, cfg.ground_y, z);
            if self.draw_line(camera, ctx, fade, a, b, sink) {
                drawn += 1;
            }
        }

        drawn
    }

    fn draw_line(
        &self,
        camera: &Camera,
        ctx: &RenderContext,
        fade: DepthFade,
        a: Vec3,
        b: Vec3,
        sink: &mut dyn LineSink,
    ) -> bool {
        let Some(seg) = project_segment(camera, a, b, ctx.viewport, fade) else {
            return false;
        };
        let style = ctx.style(self.config.line_width, self.config.color, seg.alpha);
        sink.draw_line(seg.start, seg.end, style);
        true
    }
}

/// First grid coordinate at or below `center - extent` and the number of
/// lines needed to reach the first one at or above `center + extent`.
/// `None` when the count is not finite or exceeds [`MAX_GRID_LINES`].
fn snapped_span(center: f32, size: f32, extent: f32) -> Option<(f32, usize)> {
    let first = ((center - extent) / size).floor();
    let last = ((center + extent) / size).ceil();
    let count = last - first + 1.0;
    if !(count.is_finite() && count >= 1.0 && count <= MAX_GRID_LINES as f32) {
        return None;
    }
    Some((first * size, count as usize))
}
