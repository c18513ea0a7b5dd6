//! Club squad.

use crate::entities::Player;
use crate::errors::domain::DomainError;
use crate::repos::defaults;
use crate::repos::store::{load_or_seed, save_json, KeyValueStore};

pub const KEY: &str = "cricket_players";

pub fn load_players(store: &dyn KeyValueStore) -> Result<Vec<Player>, DomainError> {
    load_or_seed(store, KEY, defaults::players)
}

pub fn save_players(store: &dyn KeyValueStore, players: &[Player]) -> Result<(), DomainError> {
    save_json(store, KEY, players)
}
