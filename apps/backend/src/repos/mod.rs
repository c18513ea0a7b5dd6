//! Typed accessors over the key-value store.
//!
//! Each entity lives under a fixed key. Catalog entities (players, matches,
//! opponents, fielding, logo) are seeded with built-in defaults the first
//! time they are read.

pub mod defaults;
pub mod fielding;
pub mod matches;
pub mod opponents;
pub mod players;
pub mod scorecards;
pub mod store;
pub mod team_logo;

pub use store::{FileStore, KeyValueStore, MemoryStore};
