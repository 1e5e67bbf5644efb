//! Error types for the Abyss3D engine
//!
//! Control calls (movement, rotation, panning) never fail: their numeric edge
//! cases are clamped or wrapped in place. Errors only come from building
//! cameras/lights out of bad parameters and from model handles that no longer
//! resolve in the scene.

use std::fmt;

/// Result type for Abyss3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Abyss3D engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A construction parameter would produce a degenerate camera or light
    InvalidParameter(String),

    /// A model handle does not resolve to a model in the scene
    InvalidModel(String),

    /// Initialization failed (player, scene, demo application)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidModel(msg) => write!(f, "Invalid model: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error`] of the given variant and log it at ERROR severity.
///
/// ```ignore
/// let err = engine_err!("abyss3d::Camera", InvalidParameter, "distance must be > 0 (got {})", d);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::abyss3d::Error::$variant(message)
    }};
}

/// Log and return an [`Error`] from the enclosing function.
///
/// ```ignore
/// if near >= far {
///     engine_bail!("abyss3d::Camera", InvalidParameter, "near ({}) must be < far ({})", near, far);
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
