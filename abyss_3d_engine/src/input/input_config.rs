/// Key bindings and control step sizes.

use rustc_hash::FxHashMap;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;
use crate::error::Result;
use crate::engine_bail;
use super::command::Command;

/// Input configuration
#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    pub bindings: FxHashMap<KeyCode, Command>,
    /// Distance per forward/backward/vertical key event
    pub translation_step: f32,
    /// Degrees per turn key event
    pub rotation_step: f32,
    /// Orbit degrees per pixel of mouse drag
    pub mouse_sensitivity: f32,
    /// Bird's-eye pan distance per key event
    pub pan_step: f32,
    /// Bird's-eye tilt per pixel of mouse drag
    pub tilt_sensitivity: f32,
    /// Scene light intensity change per key event
    pub scene_light_step: f32,
    /// Button that has to be held to drag the view
    pub drag_button: MouseButton,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            translation_step: 0.5,
            rotation_step: 1.2,
            mouse_sensitivity: 0.05,
            pan_step: 0.5,
            tilt_sensitivity: 0.05,
            scene_light_step: 0.012,
            drag_button: MouseButton::Left,
        }
    }
}

impl InputConfig {
    /// WASD to move and turn, Q/E up and down, F light, 1/2 views, Space look down,
    /// arrow keys for the scene light.
    pub fn default_bindings() -> FxHashMap<KeyCode, Command> {
        [
            (KeyCode::KeyW, Command::MoveForward),
            (KeyCode::KeyS, Command::MoveBackward),
            (KeyCode::KeyA, Command::TurnLeft),
            (KeyCode::KeyD, Command::TurnRight),
            (KeyCode::KeyQ, Command::Ascend),
            (KeyCode::KeyE, Command::Descend),
            (KeyCode::KeyF, Command::CycleLight),
            (KeyCode::Digit1, Command::ToggleThirdPerson),
            (KeyCode::Digit2, Command::ToggleOrtho),
            (KeyCode::Space, Command::LookDown),
            (KeyCode::ArrowRight, Command::BrightenSceneLight),
            (KeyCode::ArrowLeft, Command::DimSceneLight),
        ]
        .into_iter()
        .collect()
    }

    pub fn command(&self, key: KeyCode) -> Option<Command> {
        self.bindings.get(&key).copied()
    }

    /// Bind `key`, returning the command it replaced.
    pub fn bind(&mut self, key: KeyCode, command: Command) -> Option<Command> {
        self.bindings.insert(key, command)
    }

    pub fn unbind(&mut self, key: KeyCode) -> Option<Command> {
        self.bindings.remove(&key)
    }

    /// Steps must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("translation step", self.translation_step),
            ("rotation step", self.rotation_step),
            ("mouse sensitivity", self.mouse_sensitivity),
            ("pan step", self.pan_step),
            ("tilt sensitivity", self.tilt_sensitivity),
            ("scene light step", self.scene_light_step),
        ] {
            if !value.is_finite() || value < 0.0 {
                engine_bail!("abyss3d::InputConfig", InvalidParameter,
                    "{} must be >= 0 (got {})", name, value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "input_config_tests.rs"]
mod tests;
