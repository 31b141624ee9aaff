/// Configuration inspection commands
pub mod config;
/// Episode catalog commands
pub mod episodes;
/// Playback control commands
pub mod player;
