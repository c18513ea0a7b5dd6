//! Club badge, stored as an image data URL. Absent until one is uploaded.

use crate::errors::domain::DomainError;
use crate::repos::store::{load_or_seed, save_json, KeyValueStore};

pub const KEY: &str = "cricket_team_logo";

pub fn load_logo(store: &dyn KeyValueStore) -> Result<Option<String>, DomainError> {
    load_or_seed(store, KEY, || None)
}

pub fn save_logo(store: &dyn KeyValueStore, logo: Option<&str>) -> Result<(), DomainError> {
    save_json(store, KEY, &logo)
}
