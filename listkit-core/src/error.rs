//! Structured error types for listkit-core.
//!
//! Uses `thiserror` so the library exposes composable errors.
//! The `listkit` binary wraps these in `anyhow` at command boundaries.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for listkit-core operations
#[derive(Error, Debug)]
pub enum ListkitError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// HTTP transport failed before a response was received
    #[cfg(feature = "http")]
    #[error("HTTP request to {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    /// Server answered with a non-success status
    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// JSON parsing or serialization failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// Configuration file could not be parsed or is invalid
    #[error("Configuration error in {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    /// String is not one of the known program mode identifiers
    #[error("Unknown program mode '{value}'")]
    UnknownProgramMode { value: String },
}

/// Result type alias for listkit-core operations
pub type Result<T> = std::result::Result<T, ListkitError>;

impl ListkitError {
    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create an HTTP transport error
    #[cfg(feature = "http")]
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }

    /// Create a status error
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Create a config error
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown program mode error
    pub fn unknown_program_mode(value: impl Into<String>) -> Self {
        Self::UnknownProgramMode {
            value: value.into(),
        }
    }
}
