use std::sync::Arc;

use serde::{Deserialize, Serialize, ser::SerializeStruct};

/// One playable podcast episode.
///
/// Immutable once constructed. Well-formedness is checked by the episode
/// source before episodes reach the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Credited participants
    #[serde(default)]
    pub members: String,

    /// Thumbnail image URL
    #[serde(default)]
    pub thumbnail: String,

    /// Length in seconds
    pub duration: f64,

    /// Playable media URL
    pub url: String,
}

impl Episode {
    /// Create an episode from its metadata.
    pub fn new(
        title: impl Into<String>,
        members: impl Into<String>,
        thumbnail: impl Into<String>,
        duration: f64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            members: members.into(),
            thumbnail: thumbnail.into(),
            duration,
            url: url.into(),
        }
    }
}

/// Immutable copy of the player state at one point in time.
///
/// The episode list is shared between snapshots, so cloning one is cheap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerSnapshot {
    /// Queue in playback order
    pub episode_list: Arc<Vec<Episode>>,

    /// Position of the current episode in `episode_list`.
    ///
    /// Always `0` when the list is empty.
    pub current_episode_index: usize,

    /// Whether playback is running
    pub is_playing: bool,

    /// Whether the audio driver should replay the current episode when it ends
    pub is_looping: bool,

    /// Whether next-episode navigation picks at random
    pub is_shuffling: bool,
}

impl PlayerSnapshot {
    /// Whether there is an episode before the current one.
    pub fn has_previous(&self) -> bool {
        self.current_episode_index > 0
    }

    /// Whether `play_next` can move. Always true while shuffling.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_episode_index + 1 < self.episode_list.len()
    }

    /// The episode at the current position, if any.
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.episode_list.is_empty()
    }
}

impl Serialize for PlayerSnapshot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("PlayerSnapshot", 7)?;
        state.serialize_field("episode_list", self.episode_list.as_slice())?;
        state.serialize_field("current_episode_index", &self.current_episode_index)?;
        state.serialize_field("is_playing", &self.is_playing)?;
        state.serialize_field("is_looping", &self.is_looping)?;
        state.serialize_field("is_shuffling", &self.is_shuffling)?;
        state.serialize_field("has_previous", &self.has_previous())?;
        state.serialize_field("has_next", &self.has_next())?;
        state.end()
    }
}
