/// PointLight: light with distance attenuation.
///
/// Attenuation is usually driven by a single `strength` scalar:
/// `linear = LINEAR_FALLOFF / strength`, `quadratic = QUADRATIC_FALLOFF / strength`.

use crate::error::Result;
use crate::engine_bail;
use super::light::Light;

/// Linear attenuation at strength 1.0
pub const LINEAR_FALLOFF: f32 = 0.14;

/// Quadratic attenuation at strength 1.0
pub const QUADRATIC_FALLOFF: f32 = 0.0007;

/// Point light source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub light: Light,
    pub linear: f32,
    pub quadratic: f32,
}

/// GPU layout of a [`PointLight`] (std140 compatible, 64 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightUniform {
    pub position: [f32; 3],
    pub linear: f32,
    pub diffuse_color: [f32; 3],
    pub quadratic: f32,
    pub ambient_color: [f32; 3],
    pub ambient_strength: f32,
    pub specular_strength: f32,
    pub specular_exponent: f32,
    pub _pad: [f32; 2],
}

impl PointLight {
    /// Point light with explicit attenuation coefficients.
    pub fn new(light: Light, linear: f32, quadratic: f32) -> Result<Self> {
        light.validate()?;
        if !linear.is_finite() || !quadratic.is_finite() || linear < 0.0 || quadratic < 0.0 {
            engine_bail!("abyss3d::PointLight", InvalidParameter,
                "attenuation must be >= 0 (linear {}, quadratic {})", linear, quadratic);
        }
        Ok(Self { light, linear, quadratic })
    }

    /// Point light whose attenuation is derived from `strength`.
    pub fn from_strength(light: Light, strength: f32) -> Result<Self> {
        light.validate()?;
        let mut point_light = Self { light, linear: 0.0, quadratic: 0.0 };
        point_light.adjust_strength(strength)?;
        Ok(point_light)
    }

    /// Recompute attenuation from `strength`. Higher strength reaches further.
    ///
    /// On error the current attenuation is kept.
    pub fn adjust_strength(&mut self, strength: f32) -> Result<()> {
        if !strength.is_finite() || strength <= 0.0 {
            engine_bail!("abyss3d::PointLight", InvalidParameter,
                "light strength must be > 0 (got {})", strength);
        }
        self.linear = LINEAR_FALLOFF / strength;
        self.quadratic = QUADRATIC_FALLOFF / strength;
        Ok(())
    }

    pub fn uniform(&self) -> PointLightUniform {
        PointLightUniform {
            position: self.light.position.to_array(),
            linear: self.linear,
            diffuse_color: self.light.diffuse_color.to_array(),
            quadratic: self.quadratic,
            ambient_color: self.light.ambient_color.to_array(),
            ambient_strength: self.light.ambient_strength,
            specular_strength: self.light.specular_strength,
            specular_exponent: self.light.specular_exponent,
            _pad: [0.0; 2],
        }
    }
}

#[cfg(test)]
#[path = "point_light_tests.rs"]
mod tests;
