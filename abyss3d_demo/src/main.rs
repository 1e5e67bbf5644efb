//! Abyss3D demo: drive a submarine with WASD/QE, F for the headlight,
//! 1 for the chase camera, 2 for the bird's-eye view, Space to look straight
//! down, arrow keys for the sun. Hold the left mouse button to drag the view.

mod app;
mod context;
mod log_bridge;
mod renderer;

use abyss_3d_engine::abyss3d::Engine;
use winit::event_loop::EventLoop;

use crate::app::App;
use crate::log_bridge::LogBridge;
use crate::renderer::LogRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    Engine::set_logger(LogBridge);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(LogRenderer::new());
    event_loop.run_app(&mut app)?;

    Ok(())
}
