use std::{fs, path::Path};

use serde::Deserialize;
use tracing::{info, instrument};

use super::CatalogError;
use crate::services::player::Episode;

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    episodes: Vec<Episode>,
}

/// A validated, ordered list of episodes.
///
/// JSON catalogs are a top-level array of episodes. TOML catalogs use an
/// `[[episodes]]` array of tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeCatalog {
    episodes: Vec<Episode>,
}

impl EpisodeCatalog {
    /// Build a catalog, rejecting malformed episodes.
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidEpisode` for the first episode with an
    /// empty title or url, or a negative or non-finite duration
    pub fn new(episodes: Vec<Episode>) -> Result<Self, CatalogError> {
        for (index, episode) in episodes.iter().enumerate() {
            validate(index + 1, episode)?;
        }

        Ok(Self { episodes })
    }

    /// Parse a JSON array of episodes.
    ///
    /// # Errors
    /// Returns error if the JSON is malformed or an episode is invalid
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let episodes: Vec<Episode> =
            serde_json::from_str(content).map_err(|e| CatalogError::Parse {
                format: "json",
                details: e.to_string(),
            })?;

        Self::new(episodes)
    }

    /// Parse a TOML document with an `[[episodes]]` array.
    ///
    /// # Errors
    /// Returns error if the TOML is malformed or an episode is invalid
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: TomlCatalog = toml::from_str(content).map_err(|e| CatalogError::Parse {
            format: "toml",
            details: e.to_string(),
        })?;

        Self::new(catalog.episodes)
    }

    /// Load a catalog file. Files ending in `.toml` are read as TOML,
    /// everything else as JSON.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or validated
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let catalog = if is_toml {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        info!(episodes = catalog.len(), "Loaded episode catalog");
        Ok(catalog)
    }

    /// All episodes, in catalog order.
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Episode at a 0-based position.
    pub fn get(&self, index: usize) -> Option<&Episode> {
        self.episodes.get(index)
    }

    /// Number of episodes.
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Whether the catalog has no episodes.
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Resolve an identifier to a 0-based position.
    ///
    /// Accepts a 1-based number ("1", "2", ...) or a case-insensitive
    /// part of an episode title. A full title wins over titles that merely
    /// contain it.
    ///
    /// # Errors
    /// Returns `CatalogError::NotFound` when nothing matches and
    /// `CatalogError::Ambiguous` when a title fragment matches several episodes
    pub fn find(&self, identifier: &str) -> Result<usize, CatalogError> {
        if let Ok(number) = identifier.parse::<usize>() {
            return if number > 0 && number <= self.episodes.len() {
                Ok(number - 1)
            } else {
                Err(CatalogError::NotFound(format!(
                    "{identifier} (valid range: 1-{})",
                    self.episodes.len()
                )))
            };
        }

        let needle = identifier.to_lowercase();
        if let Some(exact) = self
            .episodes
            .iter()
            .position(|episode| episode.title.to_lowercase() == needle)
        {
            return Ok(exact);
        }

        let matches: Vec<usize> = self
            .episodes
            .iter()
            .enumerate()
            .filter(|(_, episode)| episode.title.to_lowercase().contains(&needle))
            .map(|(index, _)| index)
            .collect();

        match matches.as_slice() {
            [] => Err(CatalogError::NotFound(identifier.to_string())),
            [single] => Ok(*single),
            several => {
                let titles: Vec<&str> = several
                    .iter()
                    .map(|&index| self.episodes[index].title.as_str())
                    .collect();
                Err(CatalogError::Ambiguous {
                    identifier: identifier.to_string(),
                    matches: titles.join(", "),
                })
            }
        }
    }
}

fn validate(position: usize, episode: &Episode) -> Result<(), CatalogError> {
    let reason = if episode.title.trim().is_empty() {
        "title is empty"
    } else if episode.url.trim().is_empty() {
        "url is empty"
    } else if !episode.duration.is_finite() || episode.duration < 0.0 {
        "duration must be a non-negative number of seconds"
    } else {
        return Ok(());
    };

    Err(CatalogError::InvalidEpisode {
        position,
        reason: reason.to_string(),
    })
}
