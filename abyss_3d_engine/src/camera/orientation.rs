//! Yaw/pitch orientation shared by the perspective rigs.
//!
//! Angles are stored in degrees. Yaw is hard-reset to 0 when it reaches
//! ±360 (no modulo wrap) and pitch saturates at ±89.9 so the view direction
//! never becomes parallel to the world up vector.

use glam::Vec3;

/// Yaw magnitude at which the angle is reset to 0
pub const YAW_LIMIT: f32 = 360.0;

/// Pitch saturation bound (degrees)
pub const PITCH_LIMIT: f32 = 89.9;

/// Reset yaw to 0 once it reaches ±[`YAW_LIMIT`].
pub fn wrap_yaw(yaw: f32) -> f32 {
    if yaw >= YAW_LIMIT || yaw <= -YAW_LIMIT {
        0.0
    } else {
        yaw
    }
}

/// Saturate pitch to [-[`PITCH_LIMIT`], [`PITCH_LIMIT`]].
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

/// Horizontal/vertical rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    yaw: f32,
    pitch: f32,
}

impl Orientation {
    /// Create an orientation, applying the yaw reset and pitch clamp.
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw: wrap_yaw(yaw),
            pitch: clamp_pitch(pitch),
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Add deltas to both angles, then reset/clamp.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw = wrap_yaw(self.yaw + yaw_delta);
        self.pitch = clamp_pitch(self.pitch + pitch_delta);
    }

    /// Unit vector for these angles: `(cos yaw cos pitch, sin pitch, sin yaw cos pitch)`.
    ///
    /// Yaw 0 points along +X, yaw 90 along +Z.
    pub fn direction(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
    }
}

#[cfg(test)]
#[path = "orientation_tests.rs"]
mod tests;
