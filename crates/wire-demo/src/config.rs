//! Scene configuration, loaded from JSON. Every field has a default so a
//! config file only needs to name what it changes.

use crate::DemoError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use wire_geom::{CameraConfig, DriveIntent, MovementConfig, Throttle, Turn, Viewport};
use wire_render::{GridConfig, VectorMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Cube,
    Pyramid,
    ShieldPickup,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleConfig {
    pub shape: Shape,
    pub x: f32,
    pub z: f32,
    #[serde(default)]
    pub rotation: f32,
}

/// Holds `intent` for `ticks` consecutive frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub ticks: u32,
    pub intent: DriveIntent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub viewport: Viewport,
    pub camera: CameraConfig,
    pub movement: MovementConfig,
    pub grid: GridConfig,
    pub mode: VectorMode,
    pub ticks: u32,
    /// Frame delta handed to the simulation, in milliseconds.
    pub tick_ms: f32,
    pub obstacles: Vec<ObstacleConfig>,
    pub script: Vec<ScriptStep>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let obstacle = |shape, x, z, rotation| ObstacleConfig {
            shape,
            x,
            z,
            rotation,
        };
        let step = |ticks, throttle, turn| ScriptStep {
            ticks,
            intent: DriveIntent::new(throttle, turn),
        };
        Self {
            viewport: Viewport::default(),
            camera: CameraConfig::default(),
            movement: MovementConfig::default(),
            grid: GridConfig::default(),
            mode: VectorMode::Color,
            ticks: 240,
            tick_ms: 1000.0 / 60.0,
            obstacles: vec![
                obstacle(Shape::Cube, -300.0, 800.0, 0.0),
                obstacle(Shape::Pyramid, 250.0, 1200.0, 0.4),
                obstacle(Shape::Cube, 600.0, 2400.0, 0.8),
                obstacle(Shape::Pyramid, -900.0, -600.0, 0.0),
                obstacle(Shape::ShieldPickup, 0.0, 1500.0, 0.0),
            ],
            script: vec![
                step(90, Throttle::Forward, Turn::Straight),
                step(60, Throttle::Forward, Turn::Right),
                step(40, Throttle::Idle, Turn::Left),
                step(50, Throttle::Reverse, Turn::Straight),
            ],
        }
    }
}

impl SceneConfig {
    pub fn from_json_str(s: &str) -> Result<Self, DemoError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let text = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Intent scripted for frame `tick`; idles once the script runs out.
    pub fn intent_at(&self, tick: u32) -> DriveIntent {
        let mut remaining = tick;
        for step in &self.script {
            if remaining < step.ticks {
                return step.intent;
            }
            remaining -= step.ticks;
        }
        DriveIntent::default()
    }
}
