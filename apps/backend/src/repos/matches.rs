//! Fixture calendar.

use crate::entities::ScheduledMatch;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::defaults;
use crate::repos::store::{load_or_seed, save_json, KeyValueStore};

pub const KEY: &str = "cricket_matches";

pub fn load_matches(store: &dyn KeyValueStore) -> Result<Vec<ScheduledMatch>, DomainError> {
    load_or_seed(store, KEY, defaults::matches)
}

pub fn save_matches(store: &dyn KeyValueStore, matches: &[ScheduledMatch]) -> Result<(), DomainError> {
    save_json(store, KEY, matches)
}

/// Fetch one fixture by id.
///
/// # Returns
/// * `Err(DomainError::NotFound)` - If no fixture has this id
pub fn require_match(
    store: &dyn KeyValueStore,
    match_id: &str,
) -> Result<ScheduledMatch, DomainError> {
    load_matches(store)?
        .into_iter()
        .find(|m| m.id == match_id)
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Match, format!("Match {match_id} not found"))
        })
}
