//! Projection parameters for the camera rigs.
//!
//! Both projections follow OpenGL clip-space conventions (depth in [-1, 1]),
//! matching the immediate-mode renderer that consumes them.

use glam::Mat4;
use crate::error::Result;
use crate::engine_bail;

/// Perspective lens: vertical field of view (degrees) and aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveLens {
    pub field_of_view: f32,
    pub aspect_ratio: f32,
}

impl PerspectiveLens {
    pub fn new(field_of_view: f32, aspect_ratio: f32) -> Result<Self> {
        let lens = Self { field_of_view, aspect_ratio };
        lens.validate()?;
        Ok(lens)
    }

    /// Field of view must lie in (0, 180) degrees and the aspect ratio must be positive.
    pub fn validate(&self) -> Result<()> {
        if !self.field_of_view.is_finite() || self.field_of_view <= 0.0 || self.field_of_view >= 180.0 {
            engine_bail!("abyss3d::Camera", InvalidParameter,
                "field of view must be in (0, 180) degrees (got {})", self.field_of_view);
        }
        validate_aspect_ratio(self.aspect_ratio)
    }

    /// Symmetric frustum for the given clip planes.
    pub fn matrix(&self, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.field_of_view.to_radians(), self.aspect_ratio, near, far)
    }
}

/// Orthographic view volume bounds (in view space units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoBounds {
    pub xmin: f32,
    pub xmax: f32,
    pub ymin: f32,
    pub ymax: f32,
}

impl OrthoBounds {
    /// Square volume centered on the view axis.
    pub fn symmetric(half_extent: f32) -> Self {
        Self {
            xmin: -half_extent,
            xmax: half_extent,
            ymin: -half_extent,
            ymax: half_extent,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let values = [self.xmin, self.xmax, self.ymin, self.ymax];
        if values.iter().any(|v| !v.is_finite()) {
            engine_bail!("abyss3d::Camera", InvalidParameter,
                "orthographic bounds must be finite (got {:?})", self);
        }
        if self.xmin >= self.xmax || self.ymin >= self.ymax {
            engine_bail!("abyss3d::Camera", InvalidParameter,
                "orthographic bounds are empty (x: {}..{}, y: {}..{})",
                self.xmin, self.xmax, self.ymin, self.ymax);
        }
        Ok(())
    }

    pub fn matrix(&self, near: f32, far: f32) -> Mat4 {
        Mat4::orthographic_rh_gl(self.xmin, self.xmax, self.ymin, self.ymax, near, far)
    }
}

pub(crate) fn validate_aspect_ratio(aspect_ratio: f32) -> Result<()> {
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        engine_bail!("abyss3d::Camera", InvalidParameter,
            "aspect ratio must be > 0 (got {})", aspect_ratio);
    }
    Ok(())
}

pub(crate) fn validate_clip_planes(near: f32, far: f32) -> Result<()> {
    if !near.is_finite() || !far.is_finite() || near >= far {
        engine_bail!("abyss3d::Camera", InvalidParameter,
            "near plane ({}) must be < far plane ({})", near, far);
    }
    Ok(())
}
