//! Live scoring sessions, one per match.
//!
//! Sessions are held in memory and are the source of truth while a match is
//! being scored. The store is only written on an explicit save.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::{info, warn};

use crate::domain::snapshot::ScorecardView;
use crate::domain::{
    BallEvent, BallInput, BattingField, BowlingField, DismissalKind, InningsNo, RosterEntry,
    ScoreOutcome, ScorecardData, ScoringSession,
};
use crate::entities::ScorecardRecord;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::repos::{scorecards, KeyValueStore};
use crate::services::roster::RosterService;

/// Which live pointer a selection fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LiveRole {
    Striker,
    NonStriker,
    Bowler,
}

pub struct ScorecardService {
    store: Arc<dyn KeyValueStore>,
    roster: RosterService,
    celebration: Duration,
    sessions: Mutex<HashMap<String, ScoringSession>>,
}

impl ScorecardService {
    pub fn new(store: Arc<dyn KeyValueStore>, roster: RosterService, celebration: Duration) -> Self {
        Self {
            store,
            roster,
            celebration,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Open the scorecard for `match_id`.
    ///
    /// An already-open session is returned unchanged. Otherwise a saved
    /// scorecard is resumed, or a fresh one is prefilled from the fixture.
    pub fn start(&self, match_id: &str, now: OffsetDateTime) -> Result<ScorecardView, AppError> {
        if let Some(session) = self.sessions.lock().get(match_id) {
            return Ok(session.view(now));
        }

        let session = match scorecards::load_scorecard(self.store.as_ref(), match_id)? {
            Some(record) => {
                info!(match_id, balls = record.commentary.len(), "scorecard resumed");
                ScoringSession::restore(record.data, record.commentary, record.live_state)
            }
            None => {
                let fixture = self.roster.scheduled_match(match_id)?;
                info!(match_id, opponent = %fixture.opponent, "scorecard started");
                ScoringSession::new(ScorecardData::new(
                    fixture.match_info(self.roster.club_name()),
                ))
            }
        }
        .with_celebration_duration(self.celebration);

        let mut sessions = self.sessions.lock();
        let session = sessions.entry(match_id.to_owned()).or_insert(session);
        Ok(session.view(now))
    }

    pub fn view(&self, match_id: &str, now: OffsetDateTime) -> Result<ScorecardView, AppError> {
        self.with_session(match_id, |s| Ok(s.view(now)))
    }

    pub fn select(
        &self,
        match_id: &str,
        role: LiveRole,
        player: &RosterEntry,
    ) -> Result<(), AppError> {
        self.with_session(match_id, |s| match role {
            LiveRole::Striker => s.select_striker(player),
            LiveRole::NonStriker => s.select_non_striker(player),
            LiveRole::Bowler => s.select_bowler(player),
        })
    }

    pub fn score(
        &self,
        match_id: &str,
        input: BallInput,
        now: OffsetDateTime,
    ) -> Result<ScoreOutcome, AppError> {
        self.with_session(match_id, |s| s.score_ball(input, now))
    }

    pub fn confirm_wicket(
        &self,
        match_id: &str,
        kind: DismissalKind,
        fielder: Option<String>,
        now: OffsetDateTime,
    ) -> Result<BallEvent, AppError> {
        self.with_session(match_id, |s| s.confirm_wicket(kind, fielder, now))
    }

    pub fn cancel_wicket(&self, match_id: &str) -> Result<bool, AppError> {
        self.with_session(match_id, |s| Ok(s.cancel_wicket()))
    }

    pub fn undo(&self, match_id: &str) -> Result<bool, AppError> {
        self.with_session(match_id, |s| Ok(s.undo()))
    }

    pub fn switch_innings(&self, match_id: &str, no: InningsNo) -> Result<(), AppError> {
        self.with_session(match_id, |s| {
            s.switch_innings(no);
            Ok(())
        })
    }

    pub fn add_batting_row(
        &self,
        match_id: &str,
        no: InningsNo,
        player: &RosterEntry,
    ) -> Result<(), AppError> {
        self.with_session(match_id, |s| {
            s.add_batting_row(no, player);
            Ok(())
        })
    }

    pub fn add_bowling_row(
        &self,
        match_id: &str,
        no: InningsNo,
        player: &RosterEntry,
    ) -> Result<(), AppError> {
        self.with_session(match_id, |s| {
            s.add_bowling_row(no, player);
            Ok(())
        })
    }

    pub fn remove_batting_row(&self, match_id: &str, no: InningsNo, id: &str) -> Result<(), AppError> {
        self.with_session(match_id, |s| s.remove_batting_row(no, id))
    }

    pub fn remove_bowling_row(&self, match_id: &str, no: InningsNo, id: &str) -> Result<(), AppError> {
        self.with_session(match_id, |s| s.remove_bowling_row(no, id))
    }

    pub fn edit_batting(
        &self,
        match_id: &str,
        no: InningsNo,
        id: &str,
        field: BattingField,
        raw: &str,
    ) -> Result<(), AppError> {
        self.with_session(match_id, |s| s.edit_batting(no, id, field, raw))
    }

    pub fn edit_bowling(
        &self,
        match_id: &str,
        no: InningsNo,
        id: &str,
        field: BowlingField,
        raw: &str,
    ) -> Result<(), AppError> {
        self.with_session(match_id, |s| s.edit_bowling(no, id, field, raw))
    }

    pub fn set_bye_runs(&self, match_id: &str, no: InningsNo, raw: &str) -> Result<(), AppError> {
        self.with_session(match_id, |s| {
            s.set_bye_runs(no, raw);
            Ok(())
        })
    }

    /// Persist the session. A failed write is logged and reported; the
    /// in-memory session is left as it was.
    pub fn save(&self, match_id: &str) -> Result<(), AppError> {
        let record = self.with_session(match_id, |s| {
            Ok(ScorecardRecord {
                data: s.data().clone(),
                commentary: s.commentary().to_vec(),
                live_state: s.live().clone(),
            })
        })?;

        scorecards::save_scorecard(self.store.as_ref(), match_id, &record).map_err(|e| {
            warn!(match_id, error = %e, "scorecard save failed");
            AppError::from(e)
        })?;
        info!(match_id, balls = record.commentary.len(), "scorecard saved");
        Ok(())
    }

    fn with_session<T>(
        &self,
        match_id: &str,
        f: impl FnOnce(&mut ScoringSession) -> Result<T, DomainError>,
    ) -> Result<T, AppError> {
        let mut sessions = self.sessions.lock();
        let session = sessions.get_mut(match_id).ok_or_else(|| {
            AppError::not_found(
                ErrorCode::ScorecardNotFound,
                format!("No open scorecard for match {match_id}"),
            )
        })?;
        Ok(f(session)?)
    }
}
