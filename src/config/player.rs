use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Policies for the edge cases of the playback state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Whether clearing the queue also stops playback.
    ///
    /// Loop and shuffle are preferences and survive a clear either way.
    pub stop_on_clear: bool,

    /// Whether shuffle navigation avoids picking the episode that is
    /// currently playing. Only applies to queues of two or more episodes.
    pub shuffle_avoids_repeat: bool,

    /// Whether the next episode starts on its own when a track ends.
    pub autoplay_next: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            stop_on_clear: true,
            shuffle_avoids_repeat: false,
            autoplay_next: true,
        }
    }
}
