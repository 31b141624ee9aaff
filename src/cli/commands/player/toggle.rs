use std::sync::Arc;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    services::{PlayerSnapshot, PlayerState},
};

/// Flag flipped by a [`ToggleCommand`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Play/pause
    Play,

    /// Replay the current episode when it ends
    Loop,

    /// Random next-episode navigation
    Shuffle,
}

impl Toggle {
    fn command_name(self) -> &'static str {
        match self {
            Toggle::Play => "toggle-play",
            Toggle::Loop => "loop",
            Toggle::Shuffle => "shuffle",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Toggle::Play => "Playback",
            Toggle::Loop => "Loop",
            Toggle::Shuffle => "Shuffle",
        }
    }

    fn read(self, snapshot: &PlayerSnapshot) -> bool {
        match self {
            Toggle::Play => snapshot.is_playing,
            Toggle::Loop => snapshot.is_looping,
            Toggle::Shuffle => snapshot.is_shuffling,
        }
    }
}

/// Command to flip one of the player's flags
pub struct ToggleCommand {
    player: Arc<PlayerState>,
    toggle: Toggle,
}

impl ToggleCommand {
    /// Creates a command flipping `toggle`
    pub fn new(player: Arc<PlayerState>, toggle: Toggle) -> Self {
        Self { player, toggle }
    }
}

impl Command for ToggleCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        match self.toggle {
            Toggle::Play => self.player.toggle_play(),
            Toggle::Loop => self.player.toggle_loop(),
            Toggle::Shuffle => self.player.toggle_shuffle(),
        }

        let state = if self.toggle.read(&self.player.snapshot()) {
            "on"
        } else {
            "off"
        };
        Ok(format!("{}: {state}", self.toggle.label()))
    }

    fn metadata(&self) -> CommandMetadata {
        let description = match self.toggle {
            Toggle::Play => "Toggle between playing and paused",
            Toggle::Loop => "Toggle replaying the current episode when it ends",
            Toggle::Shuffle => "Toggle random order for the next episode",
        };

        CommandMetadata {
            name: self.toggle.command_name().to_string(),
            description: description.to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec![format!("player {}", self.toggle.command_name())],
        }
    }
}
