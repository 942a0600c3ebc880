//! Error types for the Nebula renderer core.
//!
//! Every failure in this layer is non-fatal: operations log and return a
//! sentinel (`Err` or `None`), callers check and the frame continues with
//! degraded output. Fatal conditions belong to the device layer beneath.

use std::fmt;

/// Result type for renderer core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nebula renderer errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A fixed-capacity structure (view queue, light array, uniform buffer)
    /// would overflow; the operation truncated or rejected instead.
    CapacityExceeded(String),

    /// A registry `create` was called with a key that already exists.
    /// The stored entry is untouched.
    DuplicateResource(String),

    /// A named resource or an expected collaborator (e.g. the render graph
    /// of an enabled view) is absent.
    ResourceNotFound(String),

    /// Invalid resource usage (out-of-range buffer write, write while
    /// unmapped, malformed descriptor).
    InvalidResource(String),

    /// Startup-time failure (shader compile, program link, fixed resource
    /// creation). Logged at high severity, does not unwind the process.
    InitializationFailed(String),

    /// Backend-specific error surfaced by the graphics device.
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CapacityExceeded(msg) => write!(f, "Capacity exceeded: {}", msg),
            Error::DuplicateResource(msg) => write!(f, "Duplicate resource: {}", msg),
            Error::ResourceNotFound(msg) => write!(f, "Resource not found: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Construct an [`Error`] variant and log it at ERROR severity.
///
/// ```ignore
/// return Err(engine_err!("nebula::Registry", DuplicateResource,
///     "texture '{}' already exists", name));
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::error::Error::$variant(message)
    }};
}

/// Log an error and early-return it from the enclosing function.
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
