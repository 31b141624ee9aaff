use std::sync::Arc;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    services::PlayerState,
};

use super::utils::current_title;

/// Command to skip to the next episode
///
/// Picks a random episode while shuffle is on.
pub struct NextCommand {
    player: Arc<PlayerState>,
}

impl NextCommand {
    /// Creates a new NextCommand
    pub fn new(player: Arc<PlayerState>) -> Self {
        Self { player }
    }
}

impl Command for NextCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        if !self.player.has_next() {
            return Ok("Already at the last episode".to_string());
        }

        self.player.play_next();
        Ok(format!("Now playing: {}", current_title(&self.player.snapshot())))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "next".to_string(),
            description: "Skip to the next episode".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["player next".to_string()],
        }
    }
}

/// Command to go back to the previous episode
pub struct PreviousCommand {
    player: Arc<PlayerState>,
}

impl PreviousCommand {
    /// Creates a new PreviousCommand
    pub fn new(player: Arc<PlayerState>) -> Self {
        Self { player }
    }
}

impl Command for PreviousCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        if !self.player.has_previous() {
            return Ok("Already at the first episode".to_string());
        }

        self.player.play_previous();
        Ok(format!("Now playing: {}", current_title(&self.player.snapshot())))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "previous".to_string(),
            description: "Go back to the previous episode".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["player previous".to_string()],
        }
    }
}
