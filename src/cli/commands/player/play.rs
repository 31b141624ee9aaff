use std::sync::Arc;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    services::{CatalogError, EpisodeCatalog, PlayerState},
};

use super::utils::episode_arg;

/// Command to play a single episode, replacing the queue
pub struct PlayCommand {
    player: Arc<PlayerState>,
    catalog: Arc<EpisodeCatalog>,
}

impl PlayCommand {
    /// Creates a new PlayCommand
    pub fn new(player: Arc<PlayerState>, catalog: Arc<EpisodeCatalog>) -> Self {
        Self { player, catalog }
    }
}

impl Command for PlayCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let identifier = args.first().map(String::as_str).unwrap_or_default();
        let index = self.catalog.find(identifier)?;
        let episode = self
            .catalog
            .get(index)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(identifier.to_string()))?;
        let title = episode.title.clone();

        self.player.play(episode);

        Ok(format!("Playing: {title}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "play".to_string(),
            description: "Play one episode on its own, replacing the queue".to_string(),
            category: "player".to_string(),
            args: vec![episode_arg(true)],
            examples: vec![
                "player play 2".to_string(),
                "player play pilot".to_string(),
            ],
        }
    }
}
