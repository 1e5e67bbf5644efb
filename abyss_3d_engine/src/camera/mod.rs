//! Camera module: camera rigs, orientation rules and per-frame views.
//!
//! Cameras are owned and driven by the caller (usually a `Player`). The
//! renderer only ever sees `CameraView` snapshots.

mod camera;
mod camera_view;
mod orientation;
mod projection;

pub use camera::{Camera, CameraRig, VIEW_NUDGE, ORTHO_TILT_LIMIT};
pub use camera_view::{CameraView, CameraUniform};
pub use orientation::{Orientation, YAW_LIMIT, PITCH_LIMIT, wrap_yaw, clamp_pitch};
pub use projection::{PerspectiveLens, OrthoBounds};
