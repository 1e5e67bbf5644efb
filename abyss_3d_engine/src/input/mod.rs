//! Input module
//!
//! Converts window-system key and mouse events into player calls. The mouse
//! drag state lives in an explicit `InputSession` owned next to the player.

mod command;
mod input_config;
mod input_session;
mod dispatcher;

pub use command::{Command, KeyAction};
pub use input_config::InputConfig;
pub use input_session::InputSession;
pub use dispatcher::{InputDispatcher, Response, CursorMode};
