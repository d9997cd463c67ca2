//! Error types for Space View
//!
//! Only collaborator failures (renderer backend, poisoned locks, stale
//! handles handed in by the caller) are reported through `Error`.
//! Camera-frame lifecycle violations are caller bugs and panic instead.

use std::fmt;

/// Result type for Space View operations
pub type Result<T> = std::result::Result<T, Error>;

/// Space View errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Renderer backend error (material creation, draw submission, lock poisoning)
    BackendError(String),

    /// Initialization failed (camera, billboard material)
    InitializationFailed(String),

    /// A FrameId that is not (or no longer) part of the frame graph
    /// (`Space::add_body`)
    InvalidFrame(String),

    /// A BodyId that is not (or no longer) part of the space
    /// (`Space::set_player`)
    InvalidBody(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidFrame(msg) => write!(f, "Invalid frame: {}", msg),
            Error::InvalidBody(msg) => write!(f, "Invalid body: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an ERROR message and build an `Error::BackendError` from it
///
/// # Example
///
/// ```ignore
/// let guard = self.renderer.lock()
///     .map_err(|_| view_err!("spaceview::Camera", "Renderer lock poisoned"))?;
/// ```
#[macro_export]
macro_rules! view_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::view_error!($source, "{}", message);
        $crate::spaceview::Error::BackendError(message)
    }};
}

/// Log an ERROR message and return early with an `Error::BackendError`
#[macro_export]
macro_rules! view_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::view_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
