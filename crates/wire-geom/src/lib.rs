//! Camera, clipping, and pose math for the pseudo-3D wireframe view.

pub mod camera;
pub mod clip;
pub mod rig;
pub mod transform;

pub use camera::{Camera, CameraConfig, CameraError, ScreenPoint, Viewport};
pub use clip::{clip_segment, project_segment, DepthFade, ProjectedSegment, NEAR_EPSILON};
pub use rig::{DriveIntent, MovementConfig, PlayerRig, Throttle, Turn};
pub use transform::Transform;
