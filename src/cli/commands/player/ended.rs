use std::sync::Arc;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    services::{PlayerState, TrackEndOutcome, TrackEndPolicy},
};

use super::utils::current_title;

/// Command that reports the end of the current track, as the audio
/// driver would
pub struct EndedCommand {
    player: Arc<PlayerState>,
    policy: TrackEndPolicy,
}

impl EndedCommand {
    /// Creates a new EndedCommand
    pub fn new(player: Arc<PlayerState>, policy: TrackEndPolicy) -> Self {
        Self { player, policy }
    }
}

impl Command for EndedCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let outcome = self.policy.on_track_ended(&self.player);
        let title = current_title(&self.player.snapshot());

        Ok(match outcome {
            TrackEndOutcome::Replayed => format!("Replaying: {title}"),
            TrackEndOutcome::Advanced => format!("Now playing: {title}"),
            TrackEndOutcome::Stopped => "Playback finished".to_string(),
        })
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "ended".to_string(),
            description: "Report that the current episode finished playing".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["player ended".to_string()],
        }
    }
}
