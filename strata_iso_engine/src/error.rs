//! Error types for the Strata engine
//!
//! This module defines the error types used throughout the engine,
//! covering the render boundary, collaborator lookups and camera
//! initialization.

use std::fmt;

/// Result type for Strata engine operations
pub type StrataResult<T> = Result<T, StrataError>;

/// Strata engine errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrataError {
    /// The render backend refused or cannot execute a command
    BackendError(String),

    /// A collaborator handle did not resolve (entity, shader, chunk, object)
    InvalidResource(String),

    /// Initialization failed (camera construction, missing anchor)
    InitializationFailed(String),
}

impl fmt::Display for StrataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrataError::BackendError(msg) => write!(f, "Backend error: {}", msg),
            StrataError::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            StrataError::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for StrataError {}

/// Log an error and build a [`StrataError::InvalidResource`] value.
///
/// Used where a collaborator lookup comes back empty:
///
/// ```ignore
/// storage.object(key)
///     .ok_or_else(|| engine_err!("strata::Sorter", "unknown object {:?}", key))?;
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::strata::StrataError::InvalidResource(message)
    }};
}

/// Log an error and return it from the enclosing function.
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
