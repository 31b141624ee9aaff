use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Error types for the podplayer application.
///
/// Covers configuration loading. Player and catalog
/// operations carry their own error types in their service modules.
#[derive(Error, Debug)]
pub enum PodplayerError {
    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error (for compatibility)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for podplayer operations.
pub type Result<T> = std::result::Result<T, PodplayerError>;

impl PodplayerError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        PodplayerError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error tagged with the path that failed.
    pub fn io_at(error: impl fmt::Display, path: &Path) -> Self {
        PodplayerError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
