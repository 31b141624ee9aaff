//! Playback control commands.
mod clear;
mod ended;
mod navigation;
mod play;
mod play_list;
mod set_playing;
mod status;
mod toggle;
mod utils;

use std::sync::Arc;

pub use clear::ClearCommand;
pub use ended::EndedCommand;
pub use navigation::{NextCommand, PreviousCommand};
pub use play::PlayCommand;
pub use play_list::PlayListCommand;
pub use set_playing::SetPlayingCommand;
pub use status::StatusCommand;
pub use toggle::{Toggle, ToggleCommand};

use crate::{
    cli::CommandRegistry,
    services::{EpisodeCatalog, PlayerState, TrackEndPolicy},
};

/// Registers all playback commands in the "player" category.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `player` - Shared player state the commands operate on
/// * `catalog` - Episode catalog that `play` and `play-list` pick from
pub fn register_commands(
    registry: &mut CommandRegistry,
    player: Arc<PlayerState>,
    catalog: Arc<EpisodeCatalog>,
) {
    const CATEGORY_NAME: &str = "player";

    let policy = TrackEndPolicy::from_config(player.config());

    registry.register_command(
        CATEGORY_NAME,
        Box::new(PlayCommand::new(player.clone(), catalog.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(PlayListCommand::new(player.clone(), catalog)),
    );
    for toggle in [Toggle::Play, Toggle::Loop, Toggle::Shuffle] {
        registry.register_command(
            CATEGORY_NAME,
            Box::new(ToggleCommand::new(player.clone(), toggle)),
        );
    }
    registry.register_command(
        CATEGORY_NAME,
        Box::new(SetPlayingCommand::new(player.clone())),
    );
    registry.register_command(CATEGORY_NAME, Box::new(ClearCommand::new(player.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(NextCommand::new(player.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(PreviousCommand::new(player.clone())));
    registry.register_command(
        CATEGORY_NAME,
        Box::new(EndedCommand::new(player.clone(), policy)),
    );
    registry.register_command(CATEGORY_NAME, Box::new(StatusCommand::new(player)));
}
