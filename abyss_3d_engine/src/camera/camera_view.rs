/// CameraView: what the renderer needs from the active camera.
///
/// Ephemeral: built once per frame from a `Camera`. No references back
/// into the player, so the renderer can hold it while input keeps mutating
/// the cameras.

use glam::{Mat4, Vec3};

/// Snapshot of a camera at the time it was read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    view: Mat4,
    projection: Mat4,
    eye: Vec3,
}

/// GPU-ready layout of a [`CameraView`] (std140 compatible).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub _pad: f32,
}

impl CameraView {
    pub(crate) fn new(view: Mat4, projection: Mat4, eye: Vec3) -> Self {
        Self { view, projection, eye }
    }

    /// View matrix (world to camera space).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view
    }

    /// Projection matrix (camera to clip space).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Camera position in world space (used for specular lighting).
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection_matrix().to_cols_array_2d(),
            view: self.view.to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
            eye: self.eye.to_array(),
            _pad: 0.0,
        }
    }
}
