/// DirectionLight: light at infinity lighting the whole scene.
///
/// `position` points outward from the origin; the light travels back toward
/// the origin, so the direction is `normalize(-position)`.

use glam::Vec3;
use crate::error::Result;
use crate::engine_bail;
use super::light::Light;

/// Directional light source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionLight {
    pub light: Light,
    pub intensity: f32,
}

/// GPU layout of a [`DirectionLight`] (std140 compatible, 64 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionLightUniform {
    pub direction: [f32; 3],
    pub intensity: f32,
    pub diffuse_color: [f32; 3],
    pub ambient_strength: f32,
    pub ambient_color: [f32; 3],
    pub specular_strength: f32,
    pub specular_exponent: f32,
    pub _pad: [f32; 3],
}

impl DirectionLight {
    pub fn new(light: Light, intensity: f32) -> Result<Self> {
        light.validate()?;
        if light.position == Vec3::ZERO {
            engine_bail!("abyss3d::DirectionLight", InvalidParameter,
                "direction light position must not be the origin");
        }
        if !intensity.is_finite() || intensity < 0.0 {
            engine_bail!("abyss3d::DirectionLight", InvalidParameter,
                "intensity must be >= 0 (got {})", intensity);
        }
        Ok(Self { light, intensity })
    }

    /// Unit direction of the light rays (zero if the position is the origin).
    pub fn direction(&self) -> Vec3 {
        (-self.light.position).normalize_or_zero()
    }

    /// Add `delta` to the intensity, saturating at 0.
    pub fn adjust_intensity(&mut self, delta: f32) {
        self.intensity = (self.intensity + delta).max(0.0);
    }

    pub fn uniform(&self) -> DirectionLightUniform {
        DirectionLightUniform {
            direction: self.direction().to_array(),
            intensity: self.intensity,
            diffuse_color: self.light.diffuse_color.to_array(),
            ambient_strength: self.light.ambient_strength,
            ambient_color: self.light.ambient_color.to_array(),
            specular_strength: self.light.specular_strength,
            specular_exponent: self.light.specular_exponent,
            _pad: [0.0; 3],
        }
    }
}

#[cfg(test)]
#[path = "direction_light_tests.rs"]
mod tests;
