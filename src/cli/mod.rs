//! Command-line interface for driving the player.
//!
//! Provides a hierarchical command system over the shared player state
//! and episode catalog. Commands are organized by category and generate
//! their help text from metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
