/// Front light intensity levels.
///
/// The light is never off: cycling past `High` lands on `Low`.

/// Discrete intensity of the player's front light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LightLevel {
    #[default]
    Low = 1,
    Medium = 2,
    High = 3,
}

impl LightLevel {
    /// Number of levels including the skipped "off" slot
    const SLOTS: u8 = 4;

    /// Level number (1..=3)
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Level for a number, `None` outside 1..=3.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(LightLevel::Low),
            2 => Some(LightLevel::Medium),
            3 => Some(LightLevel::High),
            _ => None,
        }
    }

    /// Next level, skipping 0.
    pub fn next(self) -> Self {
        let next = (self.value() + 1) % Self::SLOTS;
        Self::from_value(next).unwrap_or(LightLevel::Low)
    }

    /// Strength passed to `PointLight::adjust_strength`.
    pub fn strength(self) -> f32 {
        match self {
            LightLevel::Low => 0.5,
            LightLevel::Medium => 1.0,
            LightLevel::High => 2.0,
        }
    }
}

#[cfg(test)]
#[path = "light_level_tests.rs"]
mod tests;
