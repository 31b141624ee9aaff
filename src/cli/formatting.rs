//! Formatting utilities for CLI output.
//!
//! Provides consistent, colored rendering of help text, episodes and
//! player snapshots.

use crate::services::{Episode, PlayerSnapshot};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Blue color
    pub const BLUE: &'static str = "\x1b[34m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats subheaders with styling
pub fn format_subheader(text: &str) -> String {
    format!(
        "{}{}{}{}",
        Colors::BOLD,
        Colors::YELLOW,
        text,
        Colors::RESET
    )
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats category names with styling
pub fn format_category(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::BLUE, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats usage examples with styling
pub fn format_usage(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a duration in seconds as `m:ss`, or `h:mm:ss` from one hour up.
///
/// Fractions of a second are dropped.
///
/// # Examples
///
/// ```
/// use podplayer::cli::formatting::format_duration;
///
/// assert_eq!(format_duration(65.9), "1:05");
/// assert_eq!(format_duration(3725.0), "1:02:05");
/// ```
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// One numbered line describing an episode, `position` being 1-based.
pub fn format_episode_line(position: usize, episode: &Episode, current: bool) -> String {
    let marker = if current { ">" } else { " " };
    let members = if episode.members.is_empty() {
        String::new()
    } else {
        format!(" {}", format_description(&format!("({})", episode.members)))
    };

    format!(
        "{marker} {position:>3}. {} [{}]{members}",
        episode.title,
        format_duration(episode.duration)
    )
}

/// Human-readable rendering of a player snapshot.
pub fn format_snapshot(snapshot: &PlayerSnapshot) -> String {
    let on_off = |flag: bool| if flag { "on" } else { "off" };

    let now_playing = match snapshot.current_episode() {
        Some(episode) => format!(
            "{} ({}/{})",
            episode.title,
            snapshot.current_episode_index + 1,
            snapshot.episode_list.len()
        ),
        None => "nothing queued".to_string(),
    };

    let mut lines = vec![
        format!(
            "{} {}",
            format_subheader(if snapshot.is_playing { "Playing:" } else { "Paused:" }),
            now_playing
        ),
        format!(
            "loop: {}  shuffle: {}  previous: {}  next: {}",
            on_off(snapshot.is_looping),
            on_off(snapshot.is_shuffling),
            on_off(snapshot.has_previous()),
            on_off(snapshot.has_next())
        ),
    ];

    for (index, episode) in snapshot.episode_list.iter().enumerate() {
        lines.push(format_episode_line(
            index + 1,
            episode,
            index == snapshot.current_episode_index,
        ));
    }

    lines.join("\n")
}
