//! Playback state for the episode queue.
//!
//! [`PlayerState`] owns the queue, the current position and the
//! play/loop/shuffle flags. Consumers read immutable [`PlayerSnapshot`]s,
//! either through a synchronous [`Subscription`] or an async watch stream.

/// Track-end handling on behalf of the audio driver
pub mod driver;
/// Player error types
pub mod error;
/// Synchronous subscriber registry
pub mod observers;
/// The state owner and its operations
pub mod state;
/// Episode and snapshot value types
pub mod types;

#[cfg(test)]
mod tests;

pub use driver::{TrackEndOutcome, TrackEndPolicy, now_playing_url};
pub use error::PlayerError;
pub use observers::Subscription;
pub use state::PlayerState;
pub use types::{Episode, PlayerSnapshot};
