//! Scene module
//!
//! Model poses the player mirrors, the scene-wide direction light and the
//! per-frame snapshot handed to the renderer.

mod model_pose;
mod scene;
mod frame_snapshot;

pub use model_pose::{ModelPose, ModelKey};
pub use scene::Scene;
pub use frame_snapshot::FrameSnapshot;
