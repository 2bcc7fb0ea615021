// mpasio/src/error.rs

//! Error types for the namelist and streams readers.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mpasio operations.
pub type Result<T> = std::result::Result<T, MpasIoError>;

/// Errors that can occur when reading namelist or streams files.
#[derive(Debug, Error)]
pub enum MpasIoError {
    /// I/O error when reading a file. Produced through `fs-err`, so the
    /// message already names the offending path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The streams document is not well-formed XML.
    #[error(
        "Error parsing streams XML{}: {source}",
        path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default()
    )]
    Xml {
        path: Option<PathBuf>,
        #[source]
        source: roxmltree::Error,
    },

    /// Namelist key is absent.
    #[error("Namelist key '{key}' not found")]
    KeyNotFound { key: String },

    /// Stored value does not parse as an integer.
    #[error("Cannot convert '{value}' for key '{key}' to an integer: {source}")]
    InvalidInteger {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Stored value does not parse as a float.
    #[error("Cannot convert '{value}' for key '{key}' to a float: {source}")]
    InvalidFloat {
        key: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// Attempted to mutate a read-only namelist mapping.
    #[error("Cannot modify key '{key}': namelist mapping is read-only")]
    ReadOnly { key: String },

    /// A path was requested from a stream attribute that does not exist.
    #[error("Stream '{stream}' has no attribute '{attribute}'")]
    MissingAttribute { stream: String, attribute: String },

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MpasIoError {
    /// Create a new key-not-found error.
    pub fn key_not_found<S: Into<String>>(key: S) -> Self {
        MpasIoError::KeyNotFound { key: key.into() }
    }

    /// Create a new read-only error.
    pub fn read_only<S: Into<String>>(key: S) -> Self {
        MpasIoError::ReadOnly { key: key.into() }
    }

    /// Create a new missing attribute error.
    pub fn missing_attribute<S: Into<String>>(stream: S, attribute: S) -> Self {
        MpasIoError::MissingAttribute {
            stream: stream.into(),
            attribute: attribute.into(),
        }
    }

    /// Get the error category for logging purposes.
    pub fn category(&self) -> &'static str {
        match self {
            MpasIoError::Io(_) => "io",
            MpasIoError::Xml { .. } => "xml",
            MpasIoError::KeyNotFound { .. } | MpasIoError::MissingAttribute { .. } => "lookup",
            MpasIoError::InvalidInteger { .. } | MpasIoError::InvalidFloat { .. } => "conversion",
            MpasIoError::ReadOnly { .. } => "immutability",
            #[cfg(feature = "json")]
            MpasIoError::Json(_) => "serialization",
        }
    }
}
