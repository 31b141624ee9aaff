//! Episode catalog commands.
mod list;

use std::sync::Arc;

pub use list::ListCommand;

use crate::{cli::CommandRegistry, services::EpisodeCatalog};

/// Registers all catalog commands in the "episodes" category.
pub fn register_commands(registry: &mut CommandRegistry, catalog: Arc<EpisodeCatalog>) {
    const CATEGORY_NAME: &str = "episodes";

    registry.register_command(CATEGORY_NAME, Box::new(ListCommand::new(catalog)));
}
