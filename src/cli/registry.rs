use std::{collections::HashMap, sync::Arc};

use crate::{
    config::Config,
    services::{EpisodeCatalog, PlayerState},
};

use super::{
    CliError, Command,
    commands::{config, episodes, player},
    types::{ArgType, CommandMetadata},
};

/// Registry for CLI commands organized by category.
///
/// ```text
/// registry
/// ├── player
/// │   ├── play
/// │   ├── play-list
/// │   ├── next
/// │   └── ...
/// ├── episodes
/// │   └── list
/// └── config
///     ├── show
///     └── schema
/// ```
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new() -> Self {
        Self {
            categories: HashMap::new(),
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's metadata name is its key within the category. A
    /// command registered under an existing name replaces the old one.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or the command
    /// doesn't exist, `CliError::InvalidArguments` if the argument count
    /// doesn't fit the command's metadata. Other errors come from the
    /// command itself.
    pub fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!(
                "Failed to find command '{command_name}' in '{category}'"
            ))
        })?;

        let metadata = found_command.metadata();
        let args = Self::join_trailing_text(&metadata, args);
        Self::validate_args(&metadata, &args)?;

        found_command.execute(&args)
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically for consistent display.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut categories: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<String> = commands.keys().cloned().collect();
                command_list.sort();

                (category.clone(), command_list)
            })
            .collect();

        categories.sort();

        categories
    }

    /// Metadata of every command in a category, sorted by name.
    pub fn category_metadata(&self, category: &str) -> Vec<CommandMetadata> {
        let mut metadata: Vec<CommandMetadata> = self
            .categories
            .get(category)
            .map(|commands| commands.values().map(|command| command.metadata()).collect())
            .unwrap_or_default();

        metadata.sort_by(|a, b| a.name.cmp(&b.name));
        metadata
    }

    /// Folds surplus words into a trailing free-text argument.
    ///
    /// Input lines are split on whitespace, so a multi-word title arrives as
    /// several arguments. When the last declared argument is a string, the
    /// words past it are joined back into it.
    fn join_trailing_text(metadata: &CommandMetadata, args: &[String]) -> Vec<String> {
        let declared = metadata.args.len();
        let trailing_text = metadata
            .args
            .last()
            .is_some_and(|arg| arg.value_type == ArgType::String);

        if !trailing_text || args.len() <= declared {
            return args.to_vec();
        }

        let mut joined = args[..declared - 1].to_vec();
        joined.push(args[declared - 1..].join(" "));
        joined
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers every built-in command, sharing the player and catalog
    /// between them.
    pub fn register_all_commands(
        &mut self,
        player: Arc<PlayerState>,
        catalog: Arc<EpisodeCatalog>,
        config: Arc<Config>,
    ) {
        player::register_commands(self, player, Arc::clone(&catalog));
        episodes::register_commands(self, catalog);
        config::register_commands(self, config);
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
