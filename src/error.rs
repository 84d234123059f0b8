//! # Error Types
//!
//! Structured error handling for the Lambda task core using thiserror
//! for typed variants instead of `Box<dyn Error>` patterns.
//!
//! The taxonomy follows the propagation policy of the task contract:
//! validation and version-resolution problems are normally folded into a
//! [`TaskOutcome`](crate::stage::TaskOutcome) by the orchestrators, while
//! remote operation errors propagate to the host engine as task failures.

use thiserror::Error;

/// Errors produced by the Lambda task core
#[derive(Error, Debug)]
pub enum LambdaTaskError {
    /// Desired state failed precondition checks; carries every violation,
    /// not just the first.
    #[error("Validation failed: {}", errors.join("; "))]
    Validation { errors: Vec<String> },

    /// A symbolic version specifier was used in a way that cannot resolve
    /// to a concrete version (e.g. `$PROVIDED` without a version number).
    #[error("Version resolution error: {message}")]
    VersionResolution { message: String },

    /// The control-plane call failed with a non-success response or a
    /// transport failure.
    #[error("Remote operation failed: {endpoint}: {message}")]
    RemoteOperation { endpoint: String, message: String },

    /// Stage input or wire payload could not be (de)serialized.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The function cache collaborator failed (distinct from a cache miss,
    /// which is `Ok(None)`).
    #[error("Cache error: {message}")]
    Cache { message: String },
}

impl From<serde_json::Error> for LambdaTaskError {
    fn from(err: serde_json::Error) -> Self {
        LambdaTaskError::Serialization {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LambdaTaskError>;
