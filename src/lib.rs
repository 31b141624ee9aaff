//! podplayer - playback state for a podcast player.
//!
//! The heart of the crate is [`services::PlayerState`]: an explicitly
//! owned, shared state holder for the episode queue, the current position
//! and the play/loop/shuffle flags. Consumers read immutable snapshots and
//! are notified of every change.
//!
//! - Episode queue with sequential and shuffled navigation
//! - Synchronous subscriptions and async watch streams of snapshots
//! - Episode catalogs loaded from JSON or TOML
//! - Line-oriented CLI for driving the player
//!
//! # Quick Start
//!
//! ```rust
//! use podplayer::{
//!     config::PlayerConfig,
//!     services::{Episode, PlayerState},
//! };
//!
//! let player = PlayerState::new(PlayerConfig::default());
//! let _subscription = player.subscribe(|snapshot| {
//!     println!("now at episode {}", snapshot.current_episode_index);
//! });
//!
//! let episodes = vec![
//!     Episode::new("Pilot", "Ana", "", 1800.0, "https://example.com/1.mp3"),
//!     Episode::new("Second", "Ana", "", 1500.0, "https://example.com/2.mp3"),
//! ];
//! player.play_list(episodes, 0).unwrap();
//! player.play_next();
//!
//! assert_eq!(player.snapshot().current_episode_index, 1);
//! ```

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Line-oriented command interface.
pub mod cli;

/// Player state and episode source services.
pub mod services;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{PodplayerError, Result};
