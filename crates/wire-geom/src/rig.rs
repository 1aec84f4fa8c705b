//! First-person tank rig: turns decoded drive intents into motion and keeps
//! the camera on the tank's periscope.

use crate::camera::{wrap_angle, Camera};
use serde::{Deserialize, Serialize};
use wire_core::Vec3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Throttle {
    Forward,
    Reverse,
    #[default]
    Idle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Turn {
    Left,
    Right,
    #[default]
    Straight,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveIntent {
    #[serde(default)]
    pub throttle: Throttle,
    #[serde(default)]
    pub turn: Turn,
}

impl DriveIntent {
    pub fn new(throttle: Throttle, turn: Turn) -> Self {
        Self { throttle, turn }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub max_speed: f32,
    pub max_reverse_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Radians per second.
    pub rotation_speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_speed: 150.0,
            max_reverse_speed: 80.0,
            acceleration: 200.0,
            deceleration: 300.0,
            rotation_speed: 1.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerRig {
    position: Vec3,
    rotation: f32,
    velocity: f32,
    config: MovementConfig,
}

impl PlayerRig {
    pub fn new(config: MovementConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: 0.0,
            velocity: 0.0,
            config,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Teleports the tank, stops it, and moves the camera along.
    pub fn set_position(&mut self, x: f32, z: f32, camera: &mut Camera) {
        self.position.x = x;
        self.position.z = z;
        self.velocity = 0.0;
        self.sync_camera(camera);
    }

    pub fn set_rotation(&mut self, rotation: f32, camera: &mut Camera) {
        self.rotation = wrap_angle(rotation);
        self.sync_camera(camera);
    }

    /// Advances one tick of `delta_ms` milliseconds and writes the new pose
    /// into `camera`. The rig must be the only writer of the camera pose
    /// within a tick.
    pub fn update(&mut self, delta_ms: f32, intent: DriveIntent, camera: &mut Camera) {
        let dt = delta_ms / 1000.0;
        self.apply_movement(dt, intent);
        self.sync_camera(camera);
    }

    pub fn sync_camera(&self, camera: &mut Camera) {
        let eye = Vec3::new(self.position.x, camera.eye_height(), self.position.z);
        camera.set_pose(eye, self.rotation);
    }

    fn apply_movement(&mut self, dt: f32, intent: DriveIntent) {
        let cfg = self.config;
        let target = match intent.throttle {
            Throttle::Forward => cfg.max_speed,
            Throttle::Reverse => -cfg.max_reverse_speed,
            Throttle::Idle => 0.0,
        };

        if target != 0.0 {
            if self.velocity < target {
                self.velocity = (self.velocity + cfg.acceleration * dt).min(target);
            } else if self.velocity > target {
                self.velocity = (self.velocity - cfg.acceleration * dt).max(target);
            }
        } else if self.velocity > 0.0 {
            self.velocity = (self.velocity - cfg.deceleration * dt).max(0.0);
        } else if self.velocity < 0.0 {
            self.velocity = (self.velocity + cfg.deceleration * dt).min(0.0);
        }

        let turn_rate = match intent.turn {
            Turn::Left => -cfg.rotation_speed,
            Turn::Right => cfg.rotation_speed,
            Turn::Straight => 0.0,
        };
        self.rotation = wrap_angle(self.rotation + turn_rate * dt);

        if self.velocity != 0.0 {
            let (sin, cos) = self.rotation.sin_cos();
            self.position.x += sin * self.velocity * dt;
            self.position.z += cos * self.velocity * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, TAU};

    const EPS: f32 = 1.0e-3;

    fn forward() -> DriveIntent {
        DriveIntent::new(Throttle::Forward, Turn::Straight)
    }

    #[test]
    fn accelerates_towards_max_speed() {
        let mut rig = PlayerRig::new(MovementConfig::default());
        let mut camera = Camera::default();
        rig.update(100.0, forward(), &mut camera);
        assert!((rig.velocity() - 20.0).abs() < EPS);
        for _ in 0..20 {
            rig.update(100.0, forward(), &mut camera);
        }
        assert_eq!(rig.velocity(), 150.0);
        assert!(rig.position().z > 0.0);
        assert!(rig.position().x.abs() < EPS);
    }

    #[test]
    fn decelerates_to_rest_when_idle() {
        let mut rig = PlayerRig::new(MovementConfig::default());
        let mut camera = Camera::default();
        for _ in 0..10 {
            rig.update(100.0, forward(), &mut camera);
        }
        let idle = DriveIntent::default();
        rig.update(100.0, idle, &mut camera);
        assert!((rig.velocity() - 120.0).abs() < EPS);
        for _ in 0..10 {
            rig.update(100.0, idle, &mut camera);
        }
        assert_eq!(rig.velocity(), 0.0);
    }

    #[test]
    fn reverse_is_capped() {
        let mut rig = PlayerRig::new(MovementConfig::default());
        let mut camera = Camera::default();
        let reverse = DriveIntent::new(Throttle::Reverse, Turn::Straight);
        for _ in 0..30 {
            rig.update(100.0, reverse, &mut camera);
        }
        assert_eq!(rig.velocity(), -80.0);
        assert!(rig.position().z < 0.0);
    }

    #[test]
    fn turning_wraps_and_left_is_negative() {
        let mut rig = PlayerRig::new(MovementConfig::default());
        let mut camera = Camera::default();
        let left = DriveIntent::new(Throttle::Idle, Turn::Left);
        let right = DriveIntent::new(Throttle::Idle, Turn::Right);
        rig.update(1000.0, left, &mut camera);
        assert!((rig.rotation() - (TAU - 1.5)).abs() < EPS);
        rig.update(2000.0, right, &mut camera);
        assert!((rig.rotation() - 1.5).abs() < EPS);
        assert!(rig.rotation() >= 0.0 && rig.rotation() < TAU);
    }

    #[test]
    fn moves_along_heading_and_syncs_camera() {
        let mut rig = PlayerRig::new(MovementConfig::default());
        let mut camera = Camera::default();
        rig.set_rotation(FRAC_PI_2, &mut camera);
        rig.update(100.0, forward(), &mut camera);
        let pos = rig.position();
        assert!((pos.x - 2.0).abs() < EPS);
        assert!(pos.z.abs() < EPS);

        assert_eq!(camera.position, Vec3::new(pos.x, 50.0, pos.z));
        assert_eq!(camera.rotation, rig.rotation());
        let heading = camera.forward();
        assert!((heading.x - 1.0).abs() < EPS);
    }

    #[test]
    fn set_position_stops_the_tank() {
        let mut rig = PlayerRig::new(MovementConfig::default());
        let mut camera = Camera::default();
        rig.update(100.0, forward(), &mut camera);
        rig.set_position(500.0, -200.0, &mut camera);
        assert_eq!(rig.velocity(), 0.0);
        assert_eq!(camera.position, Vec3::new(500.0, 50.0, -200.0));
    }

    #[test]
    fn set_rotation_turns_the_camera_immediately() {
        let mut rig = PlayerRig::new(MovementConfig::default());
        let mut camera = Camera::default();
        rig.set_rotation(-FRAC_PI_2, &mut camera);
        assert_eq!(camera.rotation, rig.rotation());
        assert!((camera.rotation - 3.0 * FRAC_PI_2).abs() < EPS);
        let heading = camera.forward();
        assert!((heading.x + 1.0).abs() < EPS);
    }

    #[test]
    fn intent_deserializes_with_defaults() {
        let intent: DriveIntent = serde_json::from_str(r#"{"turn": "left"}"#).unwrap();
        assert_eq!(intent, DriveIntent::new(Throttle::Idle, Turn::Left));
    }
}
