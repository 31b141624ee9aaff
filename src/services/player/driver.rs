use tracing::{debug, instrument};

use super::{PlayerError, PlayerState};
use crate::config::PlayerConfig;

/// What happened after the audio driver reported the end of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackEndOutcome {
    /// Looping is on; the same episode starts again
    Replayed,

    /// Playback moved on to the next episode
    Advanced,

    /// Nothing left to play; playback stays stopped
    Stopped,
}

/// Decides what follows the end of a track.
///
/// The audio driver reports completion with `set_playing_state(false)`.
/// It then either replays the current episode when looping, moves on when
/// there is a next episode and autoplay is enabled, or stays stopped.
#[derive(Debug, Clone, Copy)]
pub struct TrackEndPolicy {
    autoplay_next: bool,
}

impl TrackEndPolicy {
    /// Build the policy from the player configuration.
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            autoplay_next: config.autoplay_next,
        }
    }

    /// Handle the end of the current track.
    #[instrument(skip_all)]
    pub fn on_track_ended(&self, player: &PlayerState) -> TrackEndOutcome {
        player.set_playing_state(false);

        let snapshot = player.snapshot();
        let outcome = if snapshot.is_empty() {
            TrackEndOutcome::Stopped
        } else if snapshot.is_looping {
            player.set_playing_state(true);
            TrackEndOutcome::Replayed
        } else if self.autoplay_next && snapshot.has_next() {
            player.play_next();
            player.set_playing_state(true);
            TrackEndOutcome::Advanced
        } else {
            TrackEndOutcome::Stopped
        };

        debug!(?outcome, "Track ended");
        outcome
    }
}

/// Media URL the audio driver should load for the current episode.
///
/// # Errors
/// Returns `PlayerError::EmptyQueue` when nothing is queued
pub fn now_playing_url(player: &PlayerState) -> Result<String, PlayerError> {
    player
        .current_episode()
        .map(|episode| episode.url)
        .ok_or(PlayerError::EmptyQueue)
}
