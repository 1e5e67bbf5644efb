/*!
# Abyss 3D Engine

Camera, player and input core of the Abyss3D underwater demo.

The crate owns no GPU state. It keeps a controllable player (three
synchronized cameras, a front light, a model pose in the scene) consistent
after every input event and hands the renderer plain value snapshots.

## Architecture

- **Camera**: one camera record with an orthographic, orbit or free-look rig
- **Light**: point light with strength-driven attenuation, direction light
- **Scene**: model poses behind stable keys, scene-wide direction light
- **Player**: the aggregate that moves and re-synchronizes everything
- **Input**: key bindings and mouse drag state routed to player calls

Rendering backends consume `FrameSnapshot` and its Pod uniforms.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod light;
pub mod scene;
pub mod player;
pub mod input;

// Main abyss3d namespace module
pub mod abyss3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine facade
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod light {
        pub use crate::light::*;
    }

    pub mod scene {
        pub use crate::scene::*;
    }

    pub mod player {
        pub use crate::player::*;
    }

    pub mod input {
        pub use crate::input::*;
    }
}

// Re-export math library at crate root
pub use glam;
