//! Core error types for learnly-core.
//!
//! Domain no-ops (toggling an unknown id, adding a blank assignment) are not
//! errors -- stores signal them through their return values. The types here
//! cover the failures that can actually surface to a caller: configuration
//! I/O and external resource dispatch.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for learnly-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// External resource open errors
    #[error("Open error: {0}")]
    Open(#[from] OpenError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// No user configuration directory on this platform
    #[error("Could not determine configuration directory")]
    NoConfigDir,
}

/// Errors from dispatching an external resource to the platform opener.
///
/// Always recoverable: callers surface the message and carry on.
#[derive(Error, Debug)]
pub enum OpenError {
    /// The URL failed to parse
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// The URL parsed but uses a scheme the opener refuses
    #[error("Unsupported URL scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { scheme: String },

    /// The platform opener failed to launch
    #[error("Failed to open '{url}': {source}")]
    LaunchFailed {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
