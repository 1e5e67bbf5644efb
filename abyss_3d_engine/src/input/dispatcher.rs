/// InputDispatcher: window events to player calls.
///
/// Keys go through the bindings to a `Command`. What a command does depends
/// on the view mode: in the bird's-eye view the movement keys pan the camera
/// instead of moving the player. Mouse drags orbit the third-person camera or
/// tilt the bird's-eye camera; the first-person view ignores them.

use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;
use crate::error::Result;
use crate::player::{Player, ViewMode};
use crate::scene::Scene;
use crate::engine_trace;
use super::command::{Command, KeyAction};
use super::input_config::InputConfig;
use super::input_session::InputSession;

/// Cursor state the window should switch to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    /// Visible and free
    Normal,
    /// Hidden and grabbed while dragging
    Grabbed,
}

/// Outcome of one input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Response {
    /// The event changed player or scene state
    pub handled: bool,
    /// Cursor change requested from the window, if any
    pub cursor: Option<CursorMode>,
}

impl Response {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self { handled: true, cursor: None }
    }

    fn with_cursor(cursor: CursorMode) -> Self {
        Self { handled: true, cursor: Some(cursor) }
    }
}

/// Routes key and mouse events to a player
#[derive(Debug, Clone)]
pub struct InputDispatcher {
    config: InputConfig,
    session: InputSession,
}

impl InputDispatcher {
    pub fn new(config: InputConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            session: InputSession::new(),
        })
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn session(&self) -> &InputSession {
        &self.session
    }

    /// Handle a key event.
    ///
    /// Discrete commands (toggles, light cycle, look down) fire on press only.
    /// Continuous ones fire on press and on key repeat. Releases are ignored.
    pub fn on_key(
        &mut self,
        player: &mut Player,
        scene: &mut Scene,
        key: KeyCode,
        action: KeyAction,
    ) -> Result<Response> {
        let Some(command) = self.config.command(key) else {
            return Ok(Response::ignored());
        };
        if !action.is_down() || (command.is_discrete() && action != KeyAction::Press) {
            return Ok(Response::ignored());
        }
        let handled = self.execute(player, scene, command)?;
        engine_trace!("abyss3d::Input", "{:?} ({:?}) -> {:?}, handled: {}", key, action, command, handled);
        Ok(Response { handled, cursor: None })
    }

    /// Handle a cursor move (window coordinates, y grows downward).
    pub fn on_mouse_move(&mut self, player: &mut Player, x: f64, y: f64) -> Response {
        let delta = self.session.track(x, y);
        let Some((dx, dy)) = delta else {
            return Response::ignored();
        };
        self.on_mouse_delta(player, dx, dy)
    }

    /// Handle raw mouse motion (y grows downward).
    ///
    /// Used while the cursor is grabbed, where window positions stop changing
    /// at the edge or stay pinned.
    pub fn on_mouse_delta(&mut self, player: &mut Player, dx: f64, dy: f64) -> Response {
        if !self.session.mouse_held {
            return Response::ignored();
        }
        let (dx, dy) = (dx as f32, dy as f32);

        match player.view_mode() {
            ViewMode::ThirdPerson => {
                let sensitivity = self.config.mouse_sensitivity;
                // Dragging up looks up
                player.rotate_third_person(dx * sensitivity, -dy * sensitivity);
            }
            ViewMode::Orthographic => {
                let sensitivity = self.config.tilt_sensitivity;
                player.tilt_ortho(dx * sensitivity, dy * sensitivity);
            }
            ViewMode::FirstPerson => return Response::ignored(),
        }
        Response::handled()
    }

    /// Handle a mouse button. Pressing the drag button grabs the cursor in
    /// views that support dragging; releasing it gives the cursor back.
    pub fn on_mouse_button(&mut self, player: &Player, button: MouseButton, state: ElementState) -> Response {
        if button != self.config.drag_button {
            return Response::ignored();
        }
        match state {
            ElementState::Pressed => {
                if player.view_mode() == ViewMode::FirstPerson {
                    return Response::ignored();
                }
                self.session.mouse_held = true;
                Response::with_cursor(CursorMode::Grabbed)
            }
            ElementState::Released => {
                if !self.session.mouse_held {
                    return Response::ignored();
                }
                self.session.mouse_held = false;
                Response::with_cursor(CursorMode::Normal)
            }
        }
    }

    /// Drop any drag in progress (window lost focus).
    pub fn on_focus_lost(&mut self) -> Response {
        let was_held = self.session.mouse_held;
        self.session.reset();
        if was_held {
            Response::with_cursor(CursorMode::Normal)
        } else {
            Response::ignored()
        }
    }

    fn execute(&self, player: &mut Player, scene: &mut Scene, command: Command) -> Result<bool> {
        let config = &self.config;
        let ortho = player.view_mode() == ViewMode::Orthographic;

        match command {
            Command::MoveForward if ortho => player.move_ortho_pan(0.0, -config.pan_step),
            Command::MoveBackward if ortho => player.move_ortho_pan(0.0, config.pan_step),
            Command::TurnLeft if ortho => player.move_ortho_pan(-config.pan_step, 0.0),
            Command::TurnRight if ortho => player.move_ortho_pan(config.pan_step, 0.0),
            Command::Ascend | Command::Descend if ortho => return Ok(false),

            Command::MoveForward => player.move_forward(scene, config.translation_step)?,
            Command::MoveBackward => player.move_forward(scene, -config.translation_step)?,
            Command::TurnLeft => player.turn_yaw(scene, -config.rotation_step)?,
            Command::TurnRight => player.turn_yaw(scene, config.rotation_step)?,
            Command::Ascend => player.move_vertically(scene, config.translation_step)?,
            Command::Descend => player.move_vertically(scene, -config.translation_step)?,

            Command::CycleLight => {
                player.cycle_light_intensity()?;
            }
            Command::ToggleThirdPerson => {
                player.toggle_third_person();
            }
            Command::ToggleOrtho => {
                player.toggle_ortho();
            }
            Command::LookDown if ortho => player.look_down_ortho(),
            Command::LookDown => return Ok(false),

            Command::BrightenSceneLight => scene.direction_light_mut().adjust_intensity(config.scene_light_step),
            Command::DimSceneLight => scene.direction_light_mut().adjust_intensity(-config.scene_light_step),
        }
        Ok(true)
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
