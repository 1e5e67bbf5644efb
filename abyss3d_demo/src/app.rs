//! Window and event loop handler.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use abyss_3d_engine::input::{CursorMode, Response};

use crate::context::DemoContext;
use crate::renderer::Renderer;

const WINDOW_WIDTH: u32 = 750;
const WINDOW_HEIGHT: u32 = 750;

/// Main application state.
pub struct App<R: Renderer> {
    window: Option<Arc<Window>>,
    context: Option<DemoContext>,
    renderer: R,
}

impl<R: Renderer> App<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            window: None,
            context: None,
            renderer,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes()
            .with_title("Abyss3D")
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let aspect_ratio = size.width.max(1) as f32 / size.height.max(1) as f32;
        let context = match DemoContext::new(aspect_ratio) {
            Ok(context) => context,
            Err(e) => {
                log::error!("Failed to build the scene: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.renderer.resize(size.width, size.height);
        self.window = Some(window);
        self.context = Some(context);
        log::info!("Window and scene initialized");
    }

    fn apply_cursor(&self, response: Response) {
        let (Some(window), Some(mode)) = (&self.window, response.cursor) else {
            return;
        };
        match mode {
            CursorMode::Grabbed => {
                let grabbed = window
                    .set_cursor_grab(CursorGrabMode::Locked)
                    .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
                if let Err(e) = grabbed {
                    log::warn!("Cursor grab not supported: {}", e);
                }
                window.set_cursor_visible(false);
            }
            CursorMode::Normal => {
                if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                    log::warn!("Cursor release failed: {}", e);
                }
                window.set_cursor_visible(true);
            }
        }
    }
}

impl<R: Renderer> ApplicationHandler for App<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.init(event_loop);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(context) = self.context.as_mut() else {
            return;
        };

        let response = match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                log::info!("Close requested, exiting");
                event_loop.exit();
                return;
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return;
                };
                match context.on_key(key, event.state, event.repeat) {
                    Ok(response) => response,
                    Err(e) => {
                        log::error!("Input failed: {}", e);
                        event_loop.exit();
                        return;
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => context.on_mouse_button(button, state),

            WindowEvent::Focused(false) => context.on_focus_lost(),

            WindowEvent::Resized(size) => {
                if let Err(e) = context.resize(size.width, size.height) {
                    log::warn!("Ignoring resize to {}x{}: {}", size.width, size.height, e);
                }
                self.renderer.resize(size.width, size.height);
                return;
            }

            WindowEvent::RedrawRequested => {
                match context.frame() {
                    Ok(frame) => self.renderer.render(&frame),
                    Err(e) => {
                        log::error!("Frame failed: {}", e);
                        event_loop.exit();
                    }
                }
                return;
            }

            _ => return,
        };

        self.apply_cursor(response);
    }

    // Drag motion comes from raw device deltas: a grabbed cursor stops
    // reporting new window positions.
    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        let Some(context) = self.context.as_mut() else {
            return;
        };
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            context.on_mouse_delta(dx, dy);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
