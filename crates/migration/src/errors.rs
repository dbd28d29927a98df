//! Error types for the migration crate

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for migration operations
pub type Result<T> = std::result::Result<T, MigrationError>;

/// Errors raised while scanning, rewriting or renaming files.
///
/// Every variant that concerns a single file carries its path so that the
/// reporters can print it next to the failure.
#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove {path:?}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The temporary file could not be moved over its destination
    #[error("failed to persist {path:?}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error walking directory: {0}")]
    Walk(#[from] ignore::Error),

    #[error("failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("alias folder {0:?} is configured more than once")]
    DuplicateAlias(String),

    #[error("invalid import pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
