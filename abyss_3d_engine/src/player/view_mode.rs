/// View mode flags and the camera they resolve to.

use bitflags::bitflags;

bitflags! {
    /// Raw view toggles. Both may be set at once; see [`ViewMode::from_flags`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ViewFlags: u8 {
        const ORTHO        = 1 << 0;
        const THIRD_PERSON = 1 << 1;
    }
}

/// Camera the player is currently seen through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    FirstPerson,
    ThirdPerson,
    Orthographic,
}

impl ViewMode {
    /// Resolve flags with priority Orthographic > ThirdPerson > FirstPerson.
    pub fn from_flags(flags: ViewFlags) -> Self {
        if flags.contains(ViewFlags::ORTHO) {
            ViewMode::Orthographic
        } else if flags.contains(ViewFlags::THIRD_PERSON) {
            ViewMode::ThirdPerson
        } else {
            ViewMode::FirstPerson
        }
    }
}

impl From<ViewFlags> for ViewMode {
    fn from(flags: ViewFlags) -> Self {
        Self::from_flags(flags)
    }
}

#[cfg(test)]
#[path = "view_mode_tests.rs"]
mod tests;
