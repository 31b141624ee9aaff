use std::path::PathBuf;

/// Errors that can occur while loading an episode catalog
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read episode catalog '{path}': {source}")]
    Io {
        /// Catalog file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The catalog content is not valid JSON or TOML for an episode list
    #[error("failed to parse episode catalog ({format}): {details}")]
    Parse {
        /// Format that was attempted ("json" or "toml")
        format: &'static str,
        /// Parser error details
        details: String,
    },

    /// An episode is missing required data
    #[error("episode #{position} is invalid: {reason}")]
    InvalidEpisode {
        /// 1-based position of the episode in the catalog
        position: usize,
        /// What is wrong with it
        reason: String,
    },

    /// No episode matches the given identifier
    #[error("no episode matches '{0}'")]
    NotFound(String),

    /// More than one episode matches the given identifier
    #[error("'{identifier}' matches several episodes: {matches}")]
    Ambiguous {
        /// Identifier that was looked up
        identifier: String,
        /// Titles of the matching episodes
        matches: String,
    },
}
