//! Saved scorecards, one key per match. Written only on explicit save.

use crate::entities::ScorecardRecord;
use crate::errors::domain::DomainError;
use crate::repos::store::{load_json, save_json, KeyValueStore};

const KEY_PREFIX: &str = "cricket_scorecard:";

pub fn key_for(match_id: &str) -> String {
    format!("{KEY_PREFIX}{match_id}")
}

pub fn load_scorecard(
    store: &dyn KeyValueStore,
    match_id: &str,
) -> Result<Option<ScorecardRecord>, DomainError> {
    load_json(store, &key_for(match_id))
}

pub fn save_scorecard(
    store: &dyn KeyValueStore,
    match_id: &str,
    record: &ScorecardRecord,
) -> Result<(), DomainError> {
    save_json(store, &key_for(match_id), record)
}
