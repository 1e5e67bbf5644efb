/// Light: attributes shared by every light source.
///
/// Never rendered on its own: `PointLight` and `DirectionLight` embed it.

use glam::Vec3;
use crate::error::Result;
use crate::engine_bail;

/// Base attributes of a light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub diffuse_color: Vec3,
    pub ambient_strength: f32,
    pub ambient_color: Vec3,
    pub specular_strength: f32,
    /// Phong exponent (shininess)
    pub specular_exponent: f32,
}

impl Light {
    pub fn new(
        position: Vec3,
        diffuse_color: Vec3,
        ambient_strength: f32,
        ambient_color: Vec3,
        specular_strength: f32,
        specular_exponent: f32,
    ) -> Result<Self> {
        let light = Self {
            position,
            diffuse_color,
            ambient_strength,
            ambient_color,
            specular_strength,
            specular_exponent,
        };
        light.validate()?;
        Ok(light)
    }

    /// Light whose diffuse and ambient colors are the same.
    pub fn with_color(
        position: Vec3,
        color: Vec3,
        ambient_strength: f32,
        specular_strength: f32,
        specular_exponent: f32,
    ) -> Result<Self> {
        Self::new(position, color, ambient_strength, color, specular_strength, specular_exponent)
    }

    /// Set diffuse and ambient color at once.
    pub fn set_same_color(&mut self, color: Vec3) {
        self.diffuse_color = color;
        self.ambient_color = color;
    }

    /// Check that every component is finite and strengths are non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.position.is_finite() || !self.diffuse_color.is_finite() || !self.ambient_color.is_finite() {
            engine_bail!("abyss3d::Light", InvalidParameter,
                "light position and colors must be finite (position {:?})", self.position);
        }
        for (name, value) in [
            ("ambient strength", self.ambient_strength),
            ("specular strength", self.specular_strength),
            ("specular exponent", self.specular_exponent),
        ] {
            if !value.is_finite() || value < 0.0 {
                engine_bail!("abyss3d::Light", InvalidParameter,
                    "{} must be >= 0 (got {})", name, value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
