//! Light module
//!
//! Lights are plain values owned by the player (front point light) and the
//! scene (direction light). The renderer reads them through the Pod uniforms.

mod light;
mod point_light;
mod direction_light;

pub use light::Light;
pub use point_light::{PointLight, PointLightUniform, LINEAR_FALLOFF, QUADRATIC_FALLOFF};
pub use direction_light::{DirectionLight, DirectionLightUniform};
