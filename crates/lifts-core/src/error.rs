//! Error types for lifts-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lifts-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Marker introducing an embedded array was not found in the source
    #[error("marker '{marker}' not found in '{path}'")]
    MarkerNotFound { marker: String, path: PathBuf },

    /// No array literal found after the marker
    #[error("no array literal found in '{path}'")]
    ArrayNotFound { path: PathBuf },

    /// CSV parsing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// JSON deserialization error with source context
    #[error("JSON error in '{path}': {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Non-numeric entry total in a registration
    #[error("invalid entry total '{value}' for '{name}'")]
    EntryTotal { name: String, value: String },

    /// Malformed weight category string
    #[error("invalid weight category '{value}' for '{name}'")]
    Category { name: String, value: String },

    /// Unsupported output format
    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    /// Unsupported dataset kind
    #[error("unknown dataset kind: {0}")]
    UnknownKind(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
