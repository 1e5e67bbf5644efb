/// Mouse drag state for one window.

/// Per-window mouse state, owned next to the player
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSession {
    /// Drag button currently held
    pub mouse_held: bool,
    /// Last cursor position seen, `None` until the first move
    pub last_cursor: Option<(f64, f64)>,
}

impl InputSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor position and return the delta from the previous one.
    pub fn track(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        let delta = self.last_cursor.map(|(last_x, last_y)| (x - last_x, y - last_y));
        self.last_cursor = Some((x, y));
        delta
    }

    /// Forget everything (e.g. on focus loss).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
