use crate::entities::FieldingStrategy;
use crate::errors::domain::DomainError;
use crate::repos::defaults;
use crate::repos::store::{load_or_seed, save_json, KeyValueStore};

pub const KEY: &str = "cricket_fielding";

pub fn load_strategies(store: &dyn KeyValueStore) -> Result<Vec<FieldingStrategy>, DomainError> {
    load_or_seed(store, KEY, defaults::fielding_strategies)
}

pub fn save_strategies(
    store: &dyn KeyValueStore,
    strategies: &[FieldingStrategy],
) -> Result<(), DomainError> {
    save_json(store, KEY, strategies)
}
