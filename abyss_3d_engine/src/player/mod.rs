//! Player module
//!
//! The controllable entity: three synchronized cameras, a front light and
//! the scene model that mirrors its pose.

mod player;
mod player_config;
mod light_level;
mod view_mode;

pub use player::Player;
pub use player_config::{PlayerConfig, SURFACE_LEVEL};
pub use light_level::LightLevel;
pub use view_mode::{ViewFlags, ViewMode};
