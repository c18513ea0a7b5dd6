//! Scorecard ledgers: batting and bowling rows, innings, live pointers and
//! the commentary record.
//!
//! Innings aggregate fields (`extras`, `total_runs`, `wickets`, `overs`) are
//! derived; only `domain::aggregate` writes them.

use serde::{Deserialize, Serialize};

use crate::domain::dismissal::DismissalKind;
use crate::domain::extras::ExtrasKind;
use crate::domain::overs::Overs;

/// Roster identifier; a ledger row's `id` is the player's id.
pub type PlayerId = String;

/// Selection candidate supplied by the roster collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: PlayerId,
    pub name: String,
}

impl RosterEntry {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BattingEntry {
    pub id: PlayerId,
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub how_out: DismissalKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fielder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bowler: Option<String>,
}

impl BattingEntry {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_out(&self) -> bool {
        self.how_out.counts_as_wicket()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BowlingEntry {
    pub id: PlayerId,
    pub name: String,
    pub overs: Overs,
    pub maidens: u32,
    pub runs: u32,
    pub wickets: u32,
    pub wides: u32,
    pub no_balls: u32,
    pub leg_byes: u32,
    pub dots: u32,
}

impl BowlingEntry {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Innings {
    pub batting: Vec<BattingEntry>,
    pub bowling: Vec<BowlingEntry>,
    pub bye_runs: u32,
    pub extras: u32,
    pub total_runs: u32,
    pub wickets: u32,
    pub overs: Overs,
}

impl Innings {
    pub fn batter(&self, id: &str) -> Option<&BattingEntry> {
        self.batting.iter().find(|b| b.id == id)
    }

    pub fn bowler(&self, id: &str) -> Option<&BowlingEntry> {
        self.bowling.iter().find(|b| b.id == id)
    }

    pub(crate) fn batter_mut(&mut self, id: &str) -> Option<&mut BattingEntry> {
        self.batting.iter_mut().find(|b| b.id == id)
    }

    pub(crate) fn bowler_mut(&mut self, id: &str) -> Option<&mut BowlingEntry> {
        self.bowling.iter_mut().find(|b| b.id == id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InningsNo {
    #[default]
    First,
    Second,
}

impl InningsNo {
    pub const fn index(&self) -> usize {
        match self {
            InningsNo::First => 0,
            InningsNo::Second => 1,
        }
    }

    /// 1-based number used in commentary.
    pub const fn number(&self) -> u8 {
        self.index() as u8 + 1
    }

    pub const fn label(&self) -> &'static str {
        match self {
            InningsNo::First => "1st Innings",
            InningsNo::Second => "2nd Innings",
        }
    }

    pub const ALL: [InningsNo; 2] = [InningsNo::First, InningsNo::Second];
}

/// Match metadata, prefilled from a scheduled fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchInfo {
    pub team_name: String,
    pub opponent: String,
    pub date: String,
    pub venue: String,
    pub tournament: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScorecardData {
    pub info: MatchInfo,
    pub innings: [Innings; 2],
    pub current: InningsNo,
}

impl ScorecardData {
    pub fn new(info: MatchInfo) -> Self {
        Self {
            info,
            ..Self::default()
        }
    }

    pub fn innings(&self, no: InningsNo) -> &Innings {
        &self.innings[no.index()]
    }

    pub fn current_innings(&self) -> &Innings {
        self.innings(self.current)
    }

    /// Copy of this scorecard with one innings replaced.
    pub fn with_innings(&self, no: InningsNo, innings: Innings) -> ScorecardData {
        let mut next = self.clone();
        next.innings[no.index()] = innings;
        next
    }
}

/// Who is on strike, at the other end, and bowling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveState {
    pub striker_id: Option<PlayerId>,
    pub non_striker_id: Option<PlayerId>,
    pub bowler_id: Option<PlayerId>,
}

impl LiveState {
    pub fn is_ready(&self) -> bool {
        self.striker_id.is_some() && self.non_striker_id.is_some() && self.bowler_id.is_some()
    }

    pub fn swap_strike(&mut self) {
        std::mem::swap(&mut self.striker_id, &mut self.non_striker_id);
    }
}

/// One line of ball-by-ball commentary. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallEvent {
    pub inning: u8,
    pub over: u32,
    pub ball_number: u32,
    pub striker: String,
    pub bowler: String,
    /// Runs credited to the batter.
    pub runs: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras_type: Option<ExtrasKind>,
    pub extras_runs: u32,
    pub is_wicket: bool,
    pub description: String,
}
