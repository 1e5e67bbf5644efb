//! Renderer seam.
//!
//! Drawing is not part of the demo yet: `LogRenderer` only reports what a GPU
//! backend would upload each frame.

use abyss_3d_engine::scene::FrameSnapshot;

pub trait Renderer {
    /// Consume one frame worth of camera, light and model state.
    fn render(&mut self, frame: &FrameSnapshot);

    /// Surface size changed (pixels).
    fn resize(&mut self, width: u32, height: u32);
}

/// Renderer that logs frame data at trace level
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &FrameSnapshot) {
        self.frames += 1;
        let camera = frame.camera_uniform();
        let point_light = frame.point_light_uniform();
        let direction_light = frame.direction_light_uniform();
        log::trace!(
            "frame {}: eye {:?}, point light {:?} (linear {}), sun {:?} x {}",
            self.frames,
            camera.eye,
            point_light.position,
            point_light.linear,
            direction_light.direction,
            direction_light.intensity,
        );
    }

    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("surface resized to {}x{}", width, height);
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
