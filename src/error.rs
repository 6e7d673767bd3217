//! Error types for the gallery

use std::path::PathBuf;
use thiserror::Error;

/// Startup and persistence errors
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Key/value store failure (open, schema, read or write)
    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for the expected shape
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Config parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Neither a data directory nor a home directory could be found
    #[error("Could not determine user data directory")]
    NoDataDir,
}

/// Result type alias for gallery operations
pub type Result<T> = std::result::Result<T, GalleryError>;

/// Image load failures. Cloneable so they can ride along in UI messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {}", .0.display(), .1)]
    Read(PathBuf, String),

    #[error("Failed to decode {}: {}", .0.display(), .1)]
    Decode(PathBuf, String),

    #[error("Task join error: {0}")]
    Join(String),
}
