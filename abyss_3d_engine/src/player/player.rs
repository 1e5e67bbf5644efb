/// Player: the controllable entity.
///
/// One canonical position mirrored by three cameras, a front point light and
/// a model pose in the scene. Every mutating call re-synchronizes all of
/// them before returning:
///
/// 1. the first-person camera moves (it is the anchor)
/// 2. `position` copies its eye
/// 3. the model pose gets the position and `rotation_offset - yaw`
/// 4. the orbit camera re-centers on the position
/// 5. the bird's-eye camera re-pans over the position
/// 6. the front light sits `light_offset_distance` ahead of the view target
///
/// The model is referenced by `ModelKey`. Calls that write the model take the
/// scene and fail with `InvalidModel`, before touching any state, if the key
/// no longer resolves.

use glam::Vec3;
use crate::camera::{Camera, CameraView, Orientation};
use crate::error::Result;
use crate::light::{Light, PointLight};
use crate::scene::{FrameSnapshot, ModelKey, ModelPose, Scene};
use crate::{engine_debug, engine_info, engine_trace};
use super::light_level::LightLevel;
use super::player_config::{PlayerConfig, SURFACE_LEVEL};
use super::view_mode::{ViewFlags, ViewMode};

/// Controllable entity aggregating cameras, front light and model
#[derive(Debug, Clone)]
pub struct Player {
    position: Vec3,
    flags: ViewFlags,
    light_level: LightLevel,
    front_light: PointLight,
    first_person: Camera,
    third_person: Camera,
    orthographic: Camera,
    /// Non-owning handle, valid for the lifetime of the owning scene
    model: ModelKey,
    rotation_offset: f32,
    light_offset_distance: f32,
}

impl Player {
    // ===== CONSTRUCTION =====

    /// Create a player at `config.spawn_position` driving `model`.
    ///
    /// The model pose is synchronized immediately.
    pub fn new(config: &PlayerConfig, model: ModelKey, scene: &mut Scene) -> Result<Self> {
        config.validate()?;
        let lens = config.lens()?;
        let spawn = config.spawn_position;

        let first_person = Camera::free_look(
            spawn,
            Orientation::new(config.initial_yaw, 0.0),
            lens,
            config.near,
            config.far,
        )?;
        let third_person = Camera::orbit(
            spawn,
            config.orbit_distance,
            Orientation::new(config.orbit_yaw, config.orbit_pitch),
            lens,
            config.near,
            config.far,
        )?;
        let orthographic = Camera::orthographic(
            Vec3::new(spawn.x, config.ortho_height, spawn.z),
            config.ortho_floor_y,
            config.ortho_bounds,
            config.near,
            config.far,
        )?;
        let light = Light::with_color(
            spawn,
            config.light_color,
            config.light_ambient_strength,
            config.light_specular_strength,
            config.light_specular_exponent,
        )?;
        let front_light = PointLight::from_strength(light, config.initial_light_level.strength())?;

        let pose = scene.model_mut(model)?;
        let mut player = Self {
            position: spawn,
            flags: ViewFlags::empty(),
            light_level: config.initial_light_level,
            front_light,
            first_person,
            third_person,
            orthographic,
            model,
            rotation_offset: config.rotation_offset,
            light_offset_distance: config.light_offset_distance,
        };
        player.sync(pose);

        engine_info!("abyss3d::Player", "Player spawned at {:?} (yaw {}, light level {})",
            spawn, player.yaw(), player.light_level.value());
        Ok(player)
    }

    // ===== MOVEMENT =====

    /// Move along the first-person view axis (negative moves back).
    pub fn move_forward(&mut self, scene: &mut Scene, amount: f32) -> Result<()> {
        let pose = scene.model_mut(self.model)?;
        self.first_person.move_forward(amount);
        self.sync(pose);
        Ok(())
    }

    /// Move up (positive) or down. The eye never rises above the surface:
    /// an ascent that would cross it stops exactly on it.
    pub fn move_vertically(&mut self, scene: &mut Scene, amount: f32) -> Result<()> {
        let pose = scene.model_mut(self.model)?;
        let eye_y = self.first_person.eye().y;
        let amount = if eye_y + amount > SURFACE_LEVEL {
            engine_trace!("abyss3d::Player", "Ascent of {} clamped at the surface", amount);
            SURFACE_LEVEL - eye_y
        } else {
            amount
        };
        self.first_person.move_vertically(amount);
        self.sync(pose);
        Ok(())
    }

    /// Turn the first-person camera (degrees, positive turns right).
    pub fn turn_yaw(&mut self, scene: &mut Scene, delta: f32) -> Result<()> {
        let pose = scene.model_mut(self.model)?;
        self.first_person.turn_yaw(delta);
        self.sync(pose);
        Ok(())
    }

    /// Pan the bird's-eye camera relative to where it is now.
    ///
    /// The player itself does not move.
    pub fn move_ortho_pan(&mut self, dx: f32, dz: f32) {
        self.orthographic.pan(dx, dz);
    }

    // ===== LIGHT =====

    /// Advance the front light to the next intensity level (never off).
    pub fn cycle_light_intensity(&mut self) -> Result<LightLevel> {
        let next = self.light_level.next();
        self.front_light.adjust_strength(next.strength())?;
        engine_debug!("abyss3d::Player", "Front light level {} -> {}",
            self.light_level.value(), next.value());
        self.light_level = next;
        Ok(next)
    }

    /// Set diffuse and ambient color of the front light.
    pub fn set_light_color(&mut self, color: Vec3) {
        self.front_light.light.set_same_color(color);
    }

    // ===== VIEW MODE =====

    /// Flip the bird's-eye flag. Turning it on re-centers that camera on the
    /// player and aims it straight down.
    pub fn toggle_ortho(&mut self) -> ViewMode {
        let enabled = !self.flags.contains(ViewFlags::ORTHO);
        self.set_ortho(enabled)
    }

    pub fn set_ortho(&mut self, enabled: bool) -> ViewMode {
        let before = self.view_mode();
        if enabled && !self.flags.contains(ViewFlags::ORTHO) {
            self.orthographic.move_xz(self.position.x, self.position.z);
            self.orthographic.look_down();
        }
        self.flags.set(ViewFlags::ORTHO, enabled);
        self.log_transition(before)
    }

    pub fn toggle_third_person(&mut self) -> ViewMode {
        let enabled = !self.flags.contains(ViewFlags::THIRD_PERSON);
        self.set_third_person(enabled)
    }

    pub fn set_third_person(&mut self, enabled: bool) -> ViewMode {
        let before = self.view_mode();
        self.flags.set(ViewFlags::THIRD_PERSON, enabled);
        self.log_transition(before)
    }

    pub fn view_mode(&self) -> ViewMode {
        ViewMode::from_flags(self.flags)
    }

    pub fn flags(&self) -> ViewFlags {
        self.flags
    }

    /// Camera selected by the view mode. Pure: no nudge is applied.
    pub fn active_camera(&self) -> &Camera {
        match self.view_mode() {
            ViewMode::Orthographic => &self.orthographic,
            ViewMode::ThirdPerson => &self.third_person,
            ViewMode::FirstPerson => &self.first_person,
        }
    }

    pub fn active_camera_mut(&mut self) -> &mut Camera {
        match self.view_mode() {
            ViewMode::Orthographic => &mut self.orthographic,
            ViewMode::ThirdPerson => &mut self.third_person,
            ViewMode::FirstPerson => &mut self.first_person,
        }
    }

    /// Matrices and eye of the active camera.
    ///
    /// May nudge the camera eye out of a degenerate straight-down view.
    pub fn active_view(&mut self) -> CameraView {
        self.active_camera_mut().snapshot()
    }

    // ===== CAMERA CONTROLS =====

    /// Orbit the third-person camera around the player (degrees, vertical up-positive).
    pub fn rotate_third_person(&mut self, horizontal: f32, vertical: f32) {
        self.third_person.rotate(horizontal, vertical);
    }

    pub fn tilt_ortho(&mut self, dx: f32, dz: f32) {
        self.orthographic.tilt_view(dx, dz);
    }

    pub fn look_down_ortho(&mut self) {
        self.orthographic.look_down();
    }

    /// Window resize. The bird's-eye bounds are fixed and stay untouched.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) -> Result<()> {
        self.first_person.set_aspect_ratio(aspect_ratio)?;
        self.third_person.set_aspect_ratio(aspect_ratio)
    }

    /// Everything the renderer needs for one frame.
    pub fn frame_snapshot(&mut self, scene: &Scene) -> Result<FrameSnapshot> {
        let model_matrix = scene.model(self.model)?.model_matrix();
        Ok(FrameSnapshot {
            camera: self.active_view(),
            point_light: self.front_light,
            direction_light: *scene.direction_light(),
            model_matrix,
        })
    }

    // ===== ACCESSORS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Yaw of the first-person camera (degrees)
    pub fn yaw(&self) -> f32 {
        self.first_person.orientation().map_or(0.0, |orientation| orientation.yaw())
    }

    pub fn light_level(&self) -> LightLevel {
        self.light_level
    }

    pub fn front_light(&self) -> &PointLight {
        &self.front_light
    }

    pub fn first_person_camera(&self) -> &Camera {
        &self.first_person
    }

    pub fn third_person_camera(&self) -> &Camera {
        &self.third_person
    }

    pub fn orthographic_camera(&self) -> &Camera {
        &self.orthographic
    }

    pub fn model_key(&self) -> ModelKey {
        self.model
    }

    pub fn rotation_offset(&self) -> f32 {
        self.rotation_offset
    }

    pub fn light_offset_distance(&self) -> f32 {
        self.light_offset_distance
    }

    // ===== INTERNAL =====

    fn sync(&mut self, pose: &mut ModelPose) {
        let position = self.first_person.eye();
        self.position = position;

        pose.position = position;
        pose.rotation.y = self.rotation_offset - self.yaw();

        self.third_person.follow(position);
        self.orthographic.move_xz(position.x, position.z);

        let target = self.first_person.target();
        self.front_light.light.position = target + self.light_offset_distance * self.first_person.forward();
    }

    fn log_transition(&self, before: ViewMode) -> ViewMode {
        let after = self.view_mode();
        if after != before {
            engine_debug!("abyss3d::Player", "View mode {:?} -> {:?}", before, after);
        }
        after
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod tests;
