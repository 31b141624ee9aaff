use thiserror::Error;

use crate::services::{CatalogError, PlayerError};

/// Errors that can occur during CLI command execution.
///
/// Each variant carries enough context to tell the user what went wrong
/// without a backtrace.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Returned when argument validation fails, such as missing required
    /// arguments, too many arguments, or values that don't parse.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The player rejected the operation.
    #[error("Player error: {0}")]
    Player(#[from] PlayerError),

    /// The episode catalog could not resolve or provide episodes.
    #[error("Episode error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration could not be rendered.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for command execution results.
///
/// All CLI commands return either their output text or a `CliError`.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
///
/// Drives argument-count validation and help generation.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "episode", "state").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for validation and help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A numeric value.
    Number,

    /// A boolean value (true/false, on/off, yes/no, 1/0).
    Boolean,
}

impl ArgType {
    /// Short hint shown next to the argument name in help text.
    pub fn hint(&self) -> &'static str {
        match self {
            ArgType::String => "text",
            ArgType::Number => "number",
            ArgType::Boolean => "bool",
        }
    }
}

/// Complete metadata for a CLI command.
///
/// Single source of truth for a command's identity, arguments, usage
/// examples, and category.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "next", "play-list").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "player", "episodes").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their dependencies through their constructors.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against the
    /// command's metadata; the command validates the values themselves.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid argument values or when the player
    /// or catalog rejects the request.
    fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
