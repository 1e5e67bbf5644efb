/// Camera: one concrete record for every view the player can switch to.
///
/// Position, look-at target, up vector and clip planes are shared by all
/// cameras. What differs (projection, which end of the view axis is the
/// anchor, which controls apply) lives in the `CameraRig` variant:
///
/// - `Orthographic`: bird's-eye view, pannable on XZ, tilt bounded to a radius.
/// - `Orbit`: eye derived from `target + distance * direction(yaw, pitch)`.
/// - `FreeLook`: target derived from `eye + direction(yaw, pitch)`.
///
/// Controls that do not apply to a rig are ignored (and traced).

use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::{engine_bail, engine_trace};
use super::camera_view::CameraView;
use super::orientation::Orientation;
use super::projection::{
    OrthoBounds, PerspectiveLens, validate_aspect_ratio, validate_clip_planes,
};

/// Offset added to `eye.x` when the eye sits straight above the target.
pub const VIEW_NUDGE: f32 = 0.01;

/// Maximum horizontal offset (per axis) between an orthographic target and its eye.
pub const ORTHO_TILT_LIMIT: f32 = 3.0;

/// Projection and movement behavior of a camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraRig {
    /// Bird's-eye camera. `floor_y` is the height `look_down` aims at.
    Orthographic { bounds: OrthoBounds, floor_y: f32 },
    /// Third-person camera circling its target at a fixed distance.
    Orbit { lens: PerspectiveLens, orientation: Orientation, distance: f32 },
    /// First-person camera; the eye is the anchor.
    FreeLook { lens: PerspectiveLens, orientation: Orientation },
}

/// A camera with a world position, look-at target and projection rig.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    eye: Vec3,
    target: Vec3,
    up: Vec3,
    near: f32,
    far: f32,
    rig: CameraRig,
}

impl Camera {
    // ===== CONSTRUCTION =====

    /// Bird's-eye camera at `eye`, looking straight down at `floor_y`.
    pub fn orthographic(eye: Vec3, floor_y: f32, bounds: OrthoBounds, near: f32, far: f32) -> Result<Self> {
        bounds.validate()?;
        validate_clip_planes(near, far)?;
        if !eye.is_finite() || !floor_y.is_finite() || floor_y >= eye.y {
            engine_bail!("abyss3d::Camera", InvalidParameter,
                "orthographic floor ({}) must be below the eye ({:?})", floor_y, eye);
        }
        Ok(Self {
            eye,
            target: Vec3::new(eye.x, floor_y, eye.z),
            up: Vec3::Y,
            near,
            far,
            rig: CameraRig::Orthographic { bounds, floor_y },
        })
    }

    /// Orbit camera around `target` at `distance`.
    pub fn orbit(
        target: Vec3,
        distance: f32,
        orientation: Orientation,
        lens: PerspectiveLens,
        near: f32,
        far: f32,
    ) -> Result<Self> {
        lens.validate()?;
        validate_perspective_clip(near, far)?;
        if !distance.is_finite() || distance <= 0.0 {
            engine_bail!("abyss3d::Camera", InvalidParameter,
                "orbit distance must be > 0 (got {})", distance);
        }
        if !target.is_finite() {
            engine_bail!("abyss3d::Camera", InvalidParameter,
                "orbit target must be finite (got {:?})", target);
        }
        Ok(Self {
            eye: target + distance * orientation.direction(),
            target,
            up: Vec3::Y,
            near,
            far,
            rig: CameraRig::Orbit { lens, orientation, distance },
        })
    }

    /// Free-look camera at `eye`.
    pub fn free_look(
        eye: Vec3,
        orientation: Orientation,
        lens: PerspectiveLens,
        near: f32,
        far: f32,
    ) -> Result<Self> {
        lens.validate()?;
        validate_perspective_clip(near, far)?;
        if !eye.is_finite() {
            engine_bail!("abyss3d::Camera", InvalidParameter,
                "free-look eye must be finite (got {:?})", eye);
        }
        Ok(Self {
            eye,
            target: eye + orientation.direction(),
            up: Vec3::Y,
            near,
            far,
            rig: CameraRig::FreeLook { lens, orientation },
        })
    }

    // ===== GETTERS =====

    /// World position of the camera.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Look-at point.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// World-up reference.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Yaw/pitch of perspective rigs, `None` for orthographic.
    pub fn orientation(&self) -> Option<Orientation> {
        match self.rig {
            CameraRig::Orbit { orientation, .. } | CameraRig::FreeLook { orientation, .. } => Some(orientation),
            CameraRig::Orthographic { .. } => None,
        }
    }

    /// Unit view direction (`target - eye`), zero if degenerate.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    // ===== MATRICES =====

    /// Right-handed look-at matrix.
    ///
    /// Side effect: when the eye is directly above (or level with) the target
    /// on the same XZ column, `eye.x` is nudged by [`VIEW_NUDGE`] first so the
    /// up-vector cross product is not singular. The nudge persists.
    pub fn view_matrix(&mut self) -> Mat4 {
        if self.eye.x == self.target.x && self.eye.z == self.target.z && self.eye.y >= self.target.y {
            self.eye.x += VIEW_NUDGE;
            engine_trace!("abyss3d::Camera", "Degenerate view direction, eye nudged to x = {}", self.eye.x);
        }
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix of the rig.
    pub fn projection_matrix(&self) -> Mat4 {
        match &self.rig {
            CameraRig::Orthographic { bounds, .. } => bounds.matrix(self.near, self.far),
            CameraRig::Orbit { lens, .. } | CameraRig::FreeLook { lens, .. } => lens.matrix(self.near, self.far),
        }
    }

    /// `projection * view` (may nudge, see [`Camera::view_matrix`]).
    pub fn view_projection_matrix(&mut self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Value snapshot for the renderer (may nudge, see [`Camera::view_matrix`]).
    pub fn snapshot(&mut self) -> CameraView {
        let view = self.view_matrix();
        CameraView::new(view, self.projection_matrix(), self.eye)
    }

    // ===== CONTROLS =====

    /// Rotate a perspective rig by degrees.
    ///
    /// `vertical` is up-positive: the orbit rig subtracts it from pitch (its
    /// eye drops so the view tilts up), the free-look rig adds it.
    pub fn rotate(&mut self, horizontal: f32, vertical: f32) {
        match &mut self.rig {
            CameraRig::Orbit { orientation, distance, .. } => {
                orientation.rotate(horizontal, -vertical);
                self.eye = self.target + *distance * orientation.direction();
            }
            CameraRig::FreeLook { orientation, .. } => {
                orientation.rotate(horizontal, vertical);
                self.target = self.eye + orientation.direction();
            }
            CameraRig::Orthographic { .. } => {
                engine_trace!("abyss3d::Camera", "rotate ignored on orthographic camera");
            }
        }
    }

    /// Turn a free-look camera around the vertical axis; pitch is kept.
    pub fn turn_yaw(&mut self, delta: f32) {
        match &mut self.rig {
            CameraRig::FreeLook { orientation, .. } => {
                orientation.rotate(delta, 0.0);
                self.target = self.eye + orientation.direction();
            }
            _ => {
                engine_trace!("abyss3d::Camera", "turn_yaw only applies to free-look cameras");
            }
        }
    }

    /// Dolly eye and target along the current view axis (negative moves back).
    pub fn move_forward(&mut self, amount: f32) {
        if let CameraRig::Orthographic { .. } = self.rig {
            engine_trace!("abyss3d::Camera", "move_forward ignored on orthographic camera");
            return;
        }
        let offset = amount * self.forward();
        self.eye += offset;
        self.target += offset;
    }

    /// Translate eye and target vertically by the same amount.
    pub fn move_vertically(&mut self, amount: f32) {
        self.eye.y += amount;
        self.target.y += amount;
    }

    /// Place the eye at `(x, eye.y, z)`; the target follows by the same delta.
    pub fn move_xz(&mut self, x: f32, z: f32) {
        self.target.x += x - self.eye.x;
        self.target.z += z - self.eye.z;
        self.eye.x = x;
        self.eye.z = z;
    }

    /// Incremental [`Camera::move_xz`].
    pub fn pan(&mut self, dx: f32, dz: f32) {
        self.move_xz(self.eye.x + dx, self.eye.z + dz);
    }

    /// Re-center an orbit camera on a new target, keeping distance and angles.
    pub fn follow(&mut self, target: Vec3) {
        match &self.rig {
            CameraRig::Orbit { orientation, distance, .. } => {
                self.target = target;
                self.eye = target + *distance * orientation.direction();
            }
            _ => {
                engine_trace!("abyss3d::Camera", "follow only applies to orbit cameras");
            }
        }
    }

    /// Shift an orthographic target by `-(dx, dz)`, keeping it within
    /// [`ORTHO_TILT_LIMIT`] of the eye on each horizontal axis.
    pub fn tilt_view(&mut self, dx: f32, dz: f32) {
        if !matches!(self.rig, CameraRig::Orthographic { .. }) {
            engine_trace!("abyss3d::Camera", "tilt_view only applies to orthographic cameras");
            return;
        }
        let offset_x = (self.target.x - dx - self.eye.x).clamp(-ORTHO_TILT_LIMIT, ORTHO_TILT_LIMIT);
        let offset_z = (self.target.z - dz - self.eye.z).clamp(-ORTHO_TILT_LIMIT, ORTHO_TILT_LIMIT);
        self.target.x = self.eye.x + offset_x;
        self.target.z = self.eye.z + offset_z;
    }

    /// Aim an orthographic camera straight down again, cancelling any tilt.
    pub fn look_down(&mut self) {
        match self.rig {
            CameraRig::Orthographic { floor_y, .. } => {
                self.target = Vec3::new(self.eye.x, floor_y, self.eye.z);
            }
            _ => {
                engine_trace!("abyss3d::Camera", "look_down only applies to orthographic cameras");
            }
        }
    }

    /// Update the aspect ratio of a perspective lens (window resize).
    ///
    /// Orthographic cameras keep their fixed bounds.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) -> Result<()> {
        validate_aspect_ratio(aspect_ratio)?;
        match &mut self.rig {
            CameraRig::Orbit { lens, .. } | CameraRig::FreeLook { lens, .. } => {
                lens.aspect_ratio = aspect_ratio;
            }
            CameraRig::Orthographic { .. } => {}
        }
        Ok(())
    }
}

fn validate_perspective_clip(near: f32, far: f32) -> Result<()> {
    validate_clip_planes(near, far)?;
    if near <= 0.0 {
        engine_bail!("abyss3d::Camera", InvalidParameter,
            "perspective near plane must be > 0 (got {})", near);
    }
    Ok(())
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
