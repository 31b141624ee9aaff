use crate::{
    cli::{CliError, CommandArg, types::ArgType},
    services::PlayerSnapshot,
};

/// Parses a user-supplied boolean.
///
/// Accepts true/false, on/off, yes/no and 1/0, case-insensitively.
///
/// # Errors
/// Returns `CliError::InvalidArguments` for any other value
pub fn parse_bool(arg: &str, value: &str) -> Result<bool, CliError> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(CliError::InvalidArguments(format!(
            "'{value}' is not a valid value for <{arg}>, expected true or false"
        ))),
    }
}

/// Argument definition shared by commands that pick an episode from the catalog.
pub fn episode_arg(required: bool) -> CommandArg {
    CommandArg {
        name: "episode".to_string(),
        description: "Episode number from 'episodes list' (1, 2, ...) or part of its title"
            .to_string(),
        required,
        value_type: ArgType::String,
    }
}

/// Title of the current episode, or a placeholder when the queue is empty.
pub fn current_title(snapshot: &PlayerSnapshot) -> String {
    snapshot
        .current_episode()
        .map(|episode| episode.title.clone())
        .unwrap_or_else(|| "nothing queued".to_string())
}
