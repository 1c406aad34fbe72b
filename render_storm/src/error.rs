//! Error types for RenderStorm
//!
//! The queue itself performs no I/O, so most errors originate in the
//! host-provided shader, render-state and item implementations and are
//! propagated unchanged through `CommandQueue::dispatch`.

use std::fmt;

/// Result type for RenderStorm operations
pub type Result<T> = std::result::Result<T, Error>;

/// RenderStorm errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend-specific error (Direct3D11, OpenGL, etc.)
    BackendError(String),

    /// Invalid or already released resource (shader, geometry, etc.)
    InvalidResource(String),

    /// Uniform or constant buffer slot not known to the shader
    InvalidUniform(String),

    /// A queue item failed to issue its draw call
    DispatchFailed {
        /// Debug name of the failing item
        item: String,
        /// Backend reason
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidUniform(name) => write!(f, "Invalid uniform: {}", name),
            Error::DispatchFailed { item, reason } => {
                write!(f, "Dispatch failed for '{}': {}", item, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
