use std::sync::Arc;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    services::{EpisodeCatalog, PlayerState},
};

use super::utils::{current_title, episode_arg};

/// Command to queue the whole catalog and start at one episode
pub struct PlayListCommand {
    player: Arc<PlayerState>,
    catalog: Arc<EpisodeCatalog>,
}

impl PlayListCommand {
    /// Creates a new PlayListCommand
    pub fn new(player: Arc<PlayerState>, catalog: Arc<EpisodeCatalog>) -> Self {
        Self { player, catalog }
    }
}

impl Command for PlayListCommand {
    /// Queue every catalog episode in order.
    ///
    /// Starts at the first episode unless one is given.
    fn execute(&self, args: &[String]) -> CommandResult {
        let start = match args.first() {
            Some(identifier) => self.catalog.find(identifier)?,
            None => 0,
        };

        self.player
            .play_list(self.catalog.episodes().to_vec(), start)?;

        let snapshot = self.player.snapshot();
        Ok(format!(
            "Queued {} episodes, playing: {}",
            snapshot.episode_list.len(),
            current_title(&snapshot)
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "play-list".to_string(),
            description: "Queue all episodes and start playing".to_string(),
            category: "player".to_string(),
            args: vec![episode_arg(false)],
            examples: vec![
                "player play-list".to_string(),
                "player play-list 3".to_string(),
            ],
        }
    }
}
