/// FrameSnapshot: everything the renderer reads for one frame.
///
/// Built after all pending input has been applied. Values only, so the
/// renderer can keep it while the next batch of input mutates the player.

use glam::Mat4;
use crate::camera::{CameraUniform, CameraView};
use crate::light::{DirectionLight, DirectionLightUniform, PointLight, PointLightUniform};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub camera: CameraView,
    pub point_light: PointLight,
    pub direction_light: DirectionLight,
    /// World matrix of the player model
    pub model_matrix: Mat4,
}

impl FrameSnapshot {
    pub fn camera_uniform(&self) -> CameraUniform {
        self.camera.uniform()
    }

    pub fn point_light_uniform(&self) -> PointLightUniform {
        self.point_light.uniform()
    }

    pub fn direction_light_uniform(&self) -> DirectionLightUniform {
        self.direction_light.uniform()
    }

    /// Column-major model matrix, ready for upload.
    pub fn model_uniform(&self) -> [[f32; 4]; 4] {
        self.model_matrix.to_cols_array_2d()
    }
}
