use std::sync::Arc;

use crate::{
    config::Config,
    services::{EpisodeCatalog, PlayerState},
};

use super::{
    CliError, CommandRegistry,
    formatting::{
        format_category, format_command, format_description, format_header, format_subheader,
        format_usage,
    },
};

/// High-level service for managing and executing CLI commands.
///
/// Commands are organized by category and can be listed or executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all built-in commands registered.
    ///
    /// The player and catalog are shared with every command that needs them.
    pub fn new(player: Arc<PlayerState>, catalog: Arc<EpisodeCatalog>, config: Arc<Config>) -> Self {
        let mut registry = CommandRegistry::new();
        registry.register_all_commands(player, catalog, config);

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// `help` as the category (or as the command inside a category) returns
    /// help text instead of running anything.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the
    /// category, or the error the command itself returns.
    pub fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        match (category, command_name) {
            ("help", _) | ("", _) => Ok(self.help()),
            (category, "help") | (category, "") => self.category_help(category),
            _ => self.registry.execute(category, command_name, args),
        }
    }

    /// Executes one input line of the form `<category> <command> [args...]`.
    ///
    /// Blank lines produce empty output.
    ///
    /// # Errors
    /// Same as [`CliService::execute_command`].
    pub fn execute_line(&self, line: &str) -> Result<String, CliError> {
        let words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            return Ok(String::new());
        }

        let category = words[0].as_str();
        let command = words.get(1).map(String::as_str).unwrap_or("");
        let args = words.get(2..).unwrap_or(&[]);

        self.execute_command(category, command, args)
    }

    /// Lists all available commands organized by category.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    /// Overview of every category and command.
    pub fn help(&self) -> String {
        let mut lines = vec![format_header("podplayer commands"), String::new()];

        for (category, _) in self.list_all() {
            lines.push(format_category(&category));
            for metadata in self.registry.category_metadata(&category) {
                lines.push(format!(
                    "  {:<14} {}",
                    format_command(&metadata.name),
                    format_description(&metadata.description)
                ));
            }
            lines.push(String::new());
        }

        lines.push(format_usage("Run '<category> help' for arguments and examples."));
        lines.join("\n")
    }

    fn category_help(&self, category: &str) -> Result<String, CliError> {
        let commands = self.registry.category_metadata(category);
        if commands.is_empty() {
            return Err(CliError::CommandNotFound(format!(
                "Failed to find category '{category}'"
            )));
        }

        let mut lines = vec![format_header(category), String::new()];
        for metadata in commands {
            let args: Vec<String> = metadata
                .args
                .iter()
                .map(|arg| {
                    if arg.required {
                        format!("<{}>", arg.name)
                    } else {
                        format!("[{}]", arg.name)
                    }
                })
                .collect();

            lines.push(format!(
                "{} {}",
                format_command(&metadata.name),
                args.join(" ")
            ));
            lines.push(format!("  {}", format_description(&metadata.description)));

            for arg in &metadata.args {
                lines.push(format!(
                    "    {} ({}): {}",
                    format_subheader(&arg.name),
                    arg.value_type.hint(),
                    arg.description
                ));
            }
            for example in &metadata.examples {
                lines.push(format!("    {}", format_usage(example)));
            }
            lines.push(String::new());
        }

        Ok(lines.join("\n"))
    }
}
