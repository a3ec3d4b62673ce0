//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric or boolean variable could not be parsed.
    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// A named choice (strategy, policy, device) was not recognised.
    #[error("unknown value '{value}', expected one of: {expected}")]
    InvalidChoice {
        value: String,
        expected: &'static str,
    },

    /// Cosine thresholds must lie in `[-1, 1]`.
    #[error("{name} must be between -1.0 and 1.0, got {value}")]
    InvalidThreshold { name: &'static str, value: f32 },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
