use std::sync::Arc;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    services::PlayerState,
};

/// Command to empty the queue
pub struct ClearCommand {
    player: Arc<PlayerState>,
}

impl ClearCommand {
    /// Creates a new ClearCommand
    pub fn new(player: Arc<PlayerState>) -> Self {
        Self { player }
    }
}

impl Command for ClearCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        self.player.clear_player_state();
        Ok("Queue cleared".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "clear".to_string(),
            description: "Empty the queue".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["player clear".to_string()],
        }
    }
}
