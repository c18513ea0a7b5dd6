use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::repos::{FileStore, KeyValueStore, MemoryStore};
use crate::services::{RosterService, ScorecardService};

/// Application state shared by all workers.
pub struct AppState {
    pub config: AppConfig,
    pub roster: RosterService,
    pub scorecards: ScorecardService,
}

impl AppState {
    /// Wire services over the configured store: a file store when
    /// `data_dir` is set, in-memory otherwise.
    pub fn build(config: AppConfig) -> Result<Self, AppError> {
        let store: Arc<dyn KeyValueStore> = match &config.data_dir {
            Some(dir) => Arc::new(FileStore::open(dir)?),
            None => {
                info!("no data dir configured; scorecards will not survive a restart");
                Arc::new(MemoryStore::new())
            }
        };
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: AppConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let roster = RosterService::new(store.clone(), config.club_name.clone());
        let scorecards = ScorecardService::new(store, roster.clone(), config.celebration);
        Self {
            config,
            roster,
            scorecards,
        }
    }

    /// In-memory state with default configuration.
    pub fn for_tests() -> Self {
        Self::with_store(AppConfig::default(), Arc::new(MemoryStore::new()))
    }
}
