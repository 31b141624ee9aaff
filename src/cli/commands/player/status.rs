use std::sync::Arc;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_snapshot,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::PlayerState,
};

/// Command to show the current player snapshot
pub struct StatusCommand {
    player: Arc<PlayerState>,
}

impl StatusCommand {
    /// Creates a new StatusCommand
    pub fn new(player: Arc<PlayerState>) -> Self {
        Self { player }
    }
}

impl Command for StatusCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let snapshot = self.player.snapshot();

        match args.first().map(String::as_str) {
            None | Some("text") => Ok(format_snapshot(&snapshot)),
            Some("json") => serde_json::to_string_pretty(&snapshot)
                .map_err(|e| CliError::InvalidArguments(format!("Cannot render snapshot: {e}"))),
            Some(other) => Err(CliError::InvalidArguments(format!(
                "Unknown format '{other}', expected 'text' or 'json'"
            ))),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "Show the queue, position and flags".to_string(),
            category: "player".to_string(),
            args: vec![CommandArg {
                name: "format".to_string(),
                description: "Output format: text (default) or json".to_string(),
                required: false,
                value_type: ArgType::String,
            }],
            examples: vec![
                "player status".to_string(),
                "player status json".to_string(),
            ],
        }
    }
}
