/// Player configuration.
///
/// Built in code: start from `PlayerConfig::default()` and override fields
/// with struct update syntax.

use glam::Vec3;
use crate::camera::{OrthoBounds, PerspectiveLens};
use crate::error::Result;
use crate::engine_bail;
use super::light_level::LightLevel;

/// Height of the surface plane. The player can never rise above it.
pub const SURFACE_LEVEL: f32 = 0.0;

/// Startup parameters of a [`Player`](super::Player)
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    /// Where the player starts (must be at or below the surface)
    pub spawn_position: Vec3,
    /// Initial yaw of the first-person camera (degrees)
    pub initial_yaw: f32,
    /// Initial yaw of the orbit camera (degrees, 180 from `initial_yaw` sits behind the player)
    pub orbit_yaw: f32,
    /// Initial pitch of the orbit camera (degrees, positive = above the player)
    pub orbit_pitch: f32,
    pub orbit_distance: f32,

    // ===== PROJECTION =====
    pub field_of_view: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    pub ortho_bounds: OrthoBounds,
    /// Height of the bird's-eye camera
    pub ortho_height: f32,
    /// Height the bird's-eye camera looks down at
    pub ortho_floor_y: f32,

    // ===== MODEL AND LIGHT CALIBRATION =====
    /// Added to the negated yaw to get the model's `rotation.y`
    pub rotation_offset: f32,
    /// Distance of the front light ahead of the first-person target
    pub light_offset_distance: f32,
    pub light_color: Vec3,
    pub light_ambient_strength: f32,
    pub light_specular_strength: f32,
    pub light_specular_exponent: f32,
    pub initial_light_level: LightLevel,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn_position: Vec3::new(0.0, -5.0, 0.0),
            initial_yaw: 90.0,
            orbit_yaw: 270.0,
            orbit_pitch: 15.0,
            orbit_distance: 10.0,
            field_of_view: 60.0,
            aspect_ratio: 1.0,
            near: 0.1,
            far: 50.0,
            ortho_bounds: OrthoBounds::symmetric(10.0),
            ortho_height: 20.0,
            ortho_floor_y: 0.0,
            rotation_offset: 90.0,
            light_offset_distance: 2.0,
            light_color: Vec3::ONE,
            light_ambient_strength: 0.4,
            light_specular_strength: 0.7,
            light_specular_exponent: 40.0,
            initial_light_level: LightLevel::Low,
        }
    }
}

impl PlayerConfig {
    /// Lens shared by the first-person and third-person cameras.
    pub fn lens(&self) -> Result<PerspectiveLens> {
        PerspectiveLens::new(self.field_of_view, self.aspect_ratio)
    }

    /// Check the values not covered by camera and light construction.
    pub fn validate(&self) -> Result<()> {
        if !self.spawn_position.is_finite() || self.spawn_position.y > SURFACE_LEVEL {
            engine_bail!("abyss3d::PlayerConfig", InvalidParameter,
                "spawn position must be finite and at or below the surface (got {:?})", self.spawn_position);
        }
        let angles = [self.initial_yaw, self.orbit_yaw, self.orbit_pitch, self.rotation_offset];
        if angles.iter().any(|angle| !angle.is_finite()) {
            engine_bail!("abyss3d::PlayerConfig", InvalidParameter,
                "angles must be finite (got {:?})", angles);
        }
        if !self.light_offset_distance.is_finite() || self.light_offset_distance < 0.0 {
            engine_bail!("abyss3d::PlayerConfig", InvalidParameter,
                "light offset distance must be >= 0 (got {})", self.light_offset_distance);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "player_config_tests.rs"]
mod tests;
