//! Episode source.
//!
//! Loads episode lists from JSON or TOML files and checks that every
//! episode is well-formed before it is handed to the player.

mod catalog;
mod error;


pub use catalog::EpisodeCatalog;
pub use error::CatalogError;
