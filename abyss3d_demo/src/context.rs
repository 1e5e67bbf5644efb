//! Everything the window callbacks work on, threaded through the event
//! loop as one typed value.

use abyss_3d_engine::abyss3d::{Error, Result};
use abyss_3d_engine::glam::Vec3;
use abyss_3d_engine::input::{InputConfig, InputDispatcher, KeyAction, Response};
use abyss_3d_engine::light::{DirectionLight, Light};
use abyss_3d_engine::player::{Player, PlayerConfig};
use abyss_3d_engine::scene::{FrameSnapshot, ModelPose, Scene};
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Scene, player and input state of the demo
pub struct DemoContext {
    pub scene: Scene,
    pub player: Player,
    pub dispatcher: InputDispatcher,
}

impl DemoContext {
    /// Build the demo scene: a sun, a submarine and the player driving it.
    ///
    /// Any setup failure is reported as `InitializationFailed`.
    pub fn new(aspect_ratio: f32) -> Result<Self> {
        Self::build(aspect_ratio)
            .map_err(|e| Error::InitializationFailed(format!("demo scene: {}", e)))
    }

    fn build(aspect_ratio: f32) -> Result<Self> {
        let sun = Light::with_color(Vec3::new(4.0, 11.0, -3.0), Vec3::ONE, 0.4, 0.7, 40.0)?;
        let mut scene = Scene::new(DirectionLight::new(sun, 1.0)?);

        let config = PlayerConfig {
            aspect_ratio,
            ..Default::default()
        };
        let submarine = scene.add_model(ModelPose::new(
            config.spawn_position,
            Vec3::ZERO,
            Vec3::splat(0.5),
        ));
        let player = Player::new(&config, submarine, &mut scene)?;
        let dispatcher = InputDispatcher::new(InputConfig::default())?;

        Ok(Self { scene, player, dispatcher })
    }

    pub fn on_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) -> Result<Response> {
        let action = KeyAction::from_winit(state, repeat);
        self.dispatcher.on_key(&mut self.player, &mut self.scene, key, action)
    }

    /// Raw mouse motion; only applied while the drag button is held.
    pub fn on_mouse_delta(&mut self, dx: f64, dy: f64) -> Response {
        self.dispatcher.on_mouse_delta(&mut self.player, dx, dy)
    }

    pub fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) -> Response {
        self.dispatcher.on_mouse_button(&self.player, button, state)
    }

    pub fn on_focus_lost(&mut self) -> Response {
        self.dispatcher.on_focus_lost()
    }

    /// Window resize; a zero-height (minimized) window is ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.player.set_aspect_ratio(width as f32 / height as f32)
    }

    pub fn frame(&mut self) -> Result<FrameSnapshot> {
        self.player.frame_snapshot(&self.scene)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
