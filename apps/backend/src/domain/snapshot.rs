//! Public snapshot of a scoring session for rendering clients.
//!
//! Display-derived figures (strike rate, economy, average) are computed here
//! and never stored in the ledgers.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::delivery::{CelebrationKind, NextStep};
use crate::domain::ledger::{
    BallEvent, BattingEntry, BowlingEntry, Innings, InningsNo, LiveState, MatchInfo,
};
use crate::domain::overs::{bowling_average, bowling_strike_rate, economy, strike_rate, Overs};
use crate::domain::session::ScoringSession;
use crate::domain::wicket_flow::PendingWicket;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingRowView {
    #[serde(flatten)]
    pub entry: BattingEntry,
    pub strike_rate: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingRowView {
    #[serde(flatten)]
    pub entry: BowlingEntry,
    pub economy: String,
    pub average: String,
    pub strike_rate: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InningsView {
    pub innings: InningsNo,
    pub label: String,
    pub batting: Vec<BattingRowView>,
    pub bowling: Vec<BowlingRowView>,
    pub bye_runs: u32,
    pub extras: u32,
    pub total_runs: u32,
    pub wickets: u32,
    pub overs: Overs,
    pub run_rate: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardView {
    pub info: MatchInfo,
    pub current: InningsNo,
    pub innings: Vec<InningsView>,
    pub live: LiveState,
    pub next_step: NextStep,
    pub pending_wicket: Option<PendingWicket>,
    pub celebration: Option<CelebrationKind>,
    pub validation_errors: Vec<String>,
    pub commentary: Vec<BallEvent>,
    pub can_undo: bool,
}

fn innings_view(no: InningsNo, innings: &Innings) -> InningsView {
    InningsView {
        innings: no,
        label: no.label().to_string(),
        batting: innings
            .batting
            .iter()
            .map(|b| BattingRowView {
                strike_rate: strike_rate(b.runs, b.balls),
                entry: b.clone(),
            })
            .collect(),
        bowling: innings
            .bowling
            .iter()
            .map(|b| BowlingRowView {
                economy: economy(b.runs, b.overs),
                average: bowling_average(b.runs, b.wickets),
                strike_rate: bowling_strike_rate(b.overs, b.wickets),
                entry: b.clone(),
            })
            .collect(),
        bye_runs: innings.bye_runs,
        extras: innings.extras,
        total_runs: innings.total_runs,
        wickets: innings.wickets,
        overs: innings.overs,
        run_rate: economy(innings.total_runs, innings.overs),
    }
}

/// Build the public view of a session as of `now`.
pub fn snapshot(session: &ScoringSession, now: OffsetDateTime) -> ScorecardView {
    let data = session.data();
    ScorecardView {
        info: data.info.clone(),
        current: data.current,
        innings: InningsNo::ALL
            .iter()
            .map(|&no| innings_view(no, data.innings(no)))
            .collect(),
        live: session.live().clone(),
        next_step: session.next_step(),
        pending_wicket: session.wicket_flow().pending().copied(),
        celebration: session.active_celebration(now),
        validation_errors: session
            .validation_issues()
            .iter()
            .map(ToString::to_string)
            .collect(),
        commentary: session.commentary().to_vec(),
        can_undo: session.history_len() > 0,
    }
}
