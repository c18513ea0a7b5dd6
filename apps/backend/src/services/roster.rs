//! Roster and fixture lookups for the scoring screens, plus the stored
//! fielding plans and club logo.

use std::sync::Arc;

use tracing::debug;

use crate::domain::RosterEntry;
use crate::entities::{FieldingStrategy, ScheduledMatch};
use crate::error::AppError;
use crate::repos::{fielding, matches, opponents, players, team_logo, KeyValueStore};

/// Read-only view over the club squad, opponents and fixtures.
#[derive(Clone)]
pub struct RosterService {
    store: Arc<dyn KeyValueStore>,
    club_name: String,
}

impl RosterService {
    pub fn new(store: Arc<dyn KeyValueStore>, club_name: impl Into<String>) -> Self {
        Self {
            store,
            club_name: club_name.into(),
        }
    }

    pub fn club_name(&self) -> &str {
        &self.club_name
    }

    /// Selection candidates for `team`: the club squad when `team` is the
    /// club, otherwise the named opponent's squad. Unknown teams have none.
    pub fn candidates(&self, team: &str) -> Result<Vec<RosterEntry>, AppError> {
        let team = team.trim();
        if team.eq_ignore_ascii_case(&self.club_name) {
            let squad = players::load_players(self.store.as_ref())?;
            return Ok(squad.iter().map(|p| p.roster_entry()).collect());
        }
        match opponents::find_by_name(self.store.as_ref(), team)? {
            Some(opponent) => Ok(opponent.players),
            None => {
                debug!(team, "no roster for team");
                Ok(Vec::new())
            }
        }
    }

    pub fn scheduled_matches(&self) -> Result<Vec<ScheduledMatch>, AppError> {
        Ok(matches::load_matches(self.store.as_ref())?)
    }

    pub fn scheduled_match(&self, match_id: &str) -> Result<ScheduledMatch, AppError> {
        Ok(matches::require_match(self.store.as_ref(), match_id)?)
    }

    pub fn fielding_strategies(&self) -> Result<Vec<FieldingStrategy>, AppError> {
        Ok(fielding::load_strategies(self.store.as_ref())?)
    }

    pub fn save_fielding_strategies(&self, strategies: &[FieldingStrategy]) -> Result<(), AppError> {
        Ok(fielding::save_strategies(self.store.as_ref(), strategies)?)
    }

    pub fn team_logo(&self) -> Result<Option<String>, AppError> {
        Ok(team_logo::load_logo(self.store.as_ref())?)
    }

    pub fn save_team_logo(&self, logo: Option<&str>) -> Result<(), AppError> {
        Ok(team_logo::save_logo(self.store.as_ref(), logo)?)
    }
}
