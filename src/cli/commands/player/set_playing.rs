use std::sync::Arc;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::PlayerState,
};

use super::utils::parse_bool;

/// Command to set the playing flag, as the audio driver does
pub struct SetPlayingCommand {
    player: Arc<PlayerState>,
}

impl SetPlayingCommand {
    /// Creates a new SetPlayingCommand
    pub fn new(player: Arc<PlayerState>) -> Self {
        Self { player }
    }
}

impl Command for SetPlayingCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let value = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <state> argument for 'set-playing'".to_string())
        })?;
        let playing = parse_bool("state", value)?;

        self.player.set_playing_state(playing);

        Ok(format!("Playing: {playing}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set-playing".to_string(),
            description: "Set whether playback is running".to_string(),
            category: "player".to_string(),
            args: vec![CommandArg {
                name: "state".to_string(),
                description: "true to mark playback as running, false as stopped".to_string(),
                required: true,
                value_type: ArgType::Boolean,
            }],
            examples: vec![
                "player set-playing false".to_string(),
                "player set-playing on".to_string(),
            ],
        }
    }
}
