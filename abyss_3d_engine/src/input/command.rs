/// Abstract commands and key actions.

use winit::event::ElementState;

/// What a bound key asks the player to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
    Ascend,
    Descend,
    CycleLight,
    ToggleThirdPerson,
    ToggleOrtho,
    LookDown,
    BrightenSceneLight,
    DimSceneLight,
}

impl Command {
    /// Discrete commands fire once per press; the others also fire on key repeat.
    pub fn is_discrete(self) -> bool {
        matches!(
            self,
            Command::CycleLight | Command::ToggleThirdPerson | Command::ToggleOrtho | Command::LookDown
        )
    }
}

/// Key event phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

impl KeyAction {
    /// Convert a winit key state; `repeat` is `KeyEvent::repeat`.
    pub fn from_winit(state: ElementState, repeat: bool) -> Self {
        match (state, repeat) {
            (ElementState::Released, _) => KeyAction::Release,
            (ElementState::Pressed, true) => KeyAction::Repeat,
            (ElementState::Pressed, false) => KeyAction::Press,
        }
    }

    /// Press or repeat
    pub fn is_down(self) -> bool {
        self != KeyAction::Release
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
