/// Shared reactive building blocks
pub mod common;
/// Episode source: loading and validating episode catalogs
pub mod episodes;
/// Playback state, navigation and subscriptions
pub mod player;

pub use episodes::{CatalogError, EpisodeCatalog};
pub use player::{
    Episode, PlayerError, PlayerSnapshot, PlayerState, Subscription, TrackEndOutcome,
    TrackEndPolicy,
};
