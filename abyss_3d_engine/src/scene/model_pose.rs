/// Model pose types for the scene.
///
/// A ModelPose is the transform of one renderable instance. Vertex data,
/// textures and shaders belong to the renderer; the scene only stores where
/// the instance is and how it is oriented.

use glam::{Mat4, Vec3};
use slotmap::new_key_type;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a ModelPose within a Scene.
    ///
    /// Keys remain valid even after other models are removed.
    /// A key becomes invalid only when its own model is removed.
    pub struct ModelKey;
}

// ===== MODEL POSE =====

/// Position, rotation and scale of a renderable instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPose {
    /// World position
    pub position: Vec3,
    /// Euler angles in degrees, applied X then Y then Z
    pub rotation: Vec3,
    /// Per-axis scale
    pub scale: Vec3,
}

impl Default for ModelPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl ModelPose {
    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self { position, rotation, scale }
    }

    /// World matrix: `translate * scale * rotX * rotY * rotZ`.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_scale(self.scale)
            * Mat4::from_rotation_x(self.rotation.x.to_radians())
            * Mat4::from_rotation_y(self.rotation.y.to_radians())
            * Mat4::from_rotation_z(self.rotation.z.to_radians())
    }
}

#[cfg(test)]
#[path = "model_pose_tests.rs"]
mod tests;
