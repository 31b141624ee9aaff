use std::sync::Arc;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::{format_episode_line, format_header},
        types::CommandMetadata,
    },
    services::EpisodeCatalog,
};

/// Command to list the episodes of the loaded catalog
pub struct ListCommand {
    catalog: Arc<EpisodeCatalog>,
}

impl ListCommand {
    /// Creates a new ListCommand
    pub fn new(catalog: Arc<EpisodeCatalog>) -> Self {
        Self { catalog }
    }
}

impl Command for ListCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        if self.catalog.is_empty() {
            return Ok("No episodes loaded. Start podplayer with --episodes <file>.".to_string());
        }

        let mut lines = vec![format_header(&format!("Episodes ({})", self.catalog.len()))];
        lines.extend(
            self.catalog
                .episodes()
                .iter()
                .enumerate()
                .map(|(index, episode)| format_episode_line(index + 1, episode, false)),
        );

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List the episodes available to play".to_string(),
            category: "episodes".to_string(),
            args: vec![],
            examples: vec!["episodes list".to_string()],
        }
    }
}
