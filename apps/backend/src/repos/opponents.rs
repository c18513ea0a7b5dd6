//! Opposing clubs and their squads.

use crate::entities::Opponent;
use crate::errors::domain::DomainError;
use crate::repos::defaults;
use crate::repos::store::{load_or_seed, save_json, KeyValueStore};

pub const KEY: &str = "cricket_opponents";

pub fn load_opponents(store: &dyn KeyValueStore) -> Result<Vec<Opponent>, DomainError> {
    load_or_seed(store, KEY, defaults::opponents)
}

pub fn save_opponents(store: &dyn KeyValueStore, opponents: &[Opponent]) -> Result<(), DomainError> {
    save_json(store, KEY, opponents)
}

/// Case-insensitive lookup by club name.
pub fn find_by_name(
    store: &dyn KeyValueStore,
    name: &str,
) -> Result<Option<Opponent>, DomainError> {
    let wanted = name.trim();
    Ok(load_opponents(store)?
        .into_iter()
        .find(|o| o.name.eq_ignore_ascii_case(wanted)))
}
