//! Live scoring session.
//!
//! Owns the scorecard, commentary, live pointers, undo history and the
//! transient flow state (pending wicket, pending selections, celebration).
//! Every mutation replaces the scorecard wholesale, re-aggregates it and
//! re-runs validation.

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::domain::aggregate::{aggregate_innings, aggregate_scorecard};
use crate::domain::delivery::{apply_delivery, CelebrationKind, NextStep, WicketDetails};
use crate::domain::dismissal::DismissalKind;
use crate::domain::extras::BallInput;
use crate::domain::history::{History, HistoryState};
use crate::domain::ledger::{
    BallEvent, BattingEntry, BowlingEntry, Innings, InningsNo, LiveState, RosterEntry,
    ScorecardData,
};
use crate::domain::numeric::{parse_overs, parse_stat};
use crate::domain::snapshot::{snapshot, ScorecardView};
use crate::domain::validation::{validate_scorecard, ValidationIssue};
use crate::domain::wicket_flow::{PendingWicket, WicketFlow};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Default on-screen time for a boundary or wicket highlight.
pub const DEFAULT_CELEBRATION: Duration = Duration::seconds(3);

/// Result of submitting a ball.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreOutcome {
    Scored(BallEvent),
    /// Wicket ball held until dismissal details are confirmed.
    WicketPending(PendingWicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BattingField {
    Name,
    Runs,
    Balls,
    Fours,
    Sixes,
    HowOut,
    Fielder,
    Bowler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BowlingField {
    Name,
    Overs,
    Maidens,
    Runs,
    Wickets,
    Wides,
    NoBalls,
    LegByes,
    Dots,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Celebration {
    kind: CelebrationKind,
    raised_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct ScoringSession {
    data: ScorecardData,
    commentary: Vec<BallEvent>,
    live: LiveState,
    history: History,
    wicket_flow: WicketFlow,
    next_step: NextStep,
    celebration: Option<Celebration>,
    celebration_duration: Duration,
    issues: Vec<ValidationIssue>,
}

impl ScoringSession {
    pub fn new(data: ScorecardData) -> Self {
        Self::restore(data, Vec::new(), LiveState::default())
    }

    /// Resume from persisted state. Undo history starts empty.
    pub fn restore(data: ScorecardData, commentary: Vec<BallEvent>, live: LiveState) -> Self {
        let data = aggregate_scorecard(&data);
        let issues = validate_scorecard(&data);
        let next_step = step_for(&live);
        Self {
            data,
            commentary,
            live,
            history: History::new(),
            wicket_flow: WicketFlow::Idle,
            next_step,
            celebration: None,
            celebration_duration: DEFAULT_CELEBRATION,
            issues,
        }
    }

    pub fn with_celebration_duration(mut self, duration: Duration) -> Self {
        self.celebration_duration = duration;
        self
    }

    pub fn data(&self) -> &ScorecardData {
        &self.data
    }

    pub fn commentary(&self) -> &[BallEvent] {
        &self.commentary
    }

    pub fn live(&self) -> &LiveState {
        &self.live
    }

    pub fn next_step(&self) -> NextStep {
        self.next_step
    }

    pub fn wicket_flow(&self) -> &WicketFlow {
        &self.wicket_flow
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn validation_issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Serialisable view for clients, with display-derived rates.
    pub fn view(&self, now: OffsetDateTime) -> ScorecardView {
        snapshot(self, now)
    }

    /// Highlight still on screen at `now`, if any.
    pub fn active_celebration(&self, now: OffsetDateTime) -> Option<CelebrationKind> {
        self.celebration
            .filter(|c| now - c.raised_at < self.celebration_duration)
            .map(|c| c.kind)
    }

    // ---- selection -------------------------------------------------------

    /// Put `player` on strike.
    ///
    /// After a wicket on the last ball of an over the surviving batter is
    /// already on strike, so the new batsman goes to the non-striker's end.
    pub fn select_striker(&mut self, player: &RosterEntry) -> Result<(), DomainError> {
        self.require_no_pending_wicket()?;
        if matches!(self.next_step, NextStep::AwaitingNewBatsman { .. })
            && self.live.striker_id.is_some()
            && self.live.non_striker_id.is_none()
        {
            return self.select_non_striker(player);
        }
        self.check_batter_available(player, self.live.non_striker_id.as_deref())?;
        self.ensure_batting_row(player);
        self.live.striker_id = Some(player.id.clone());
        self.finish_new_batsman();
        debug!(striker = %player.name, "striker selected");
        Ok(())
    }

    pub fn select_non_striker(&mut self, player: &RosterEntry) -> Result<(), DomainError> {
        self.require_no_pending_wicket()?;
        self.check_batter_available(player, self.live.striker_id.as_deref())?;
        self.ensure_batting_row(player);
        self.live.non_striker_id = Some(player.id.clone());
        self.finish_new_batsman();
        debug!(non_striker = %player.name, "non-striker selected");
        Ok(())
    }

    /// Leave `AwaitingNewBatsman` once both ends are filled.
    fn finish_new_batsman(&mut self) {
        let NextStep::AwaitingNewBatsman { bowler_change_due } = self.next_step else {
            return;
        };
        if self.live.striker_id.is_none() || self.live.non_striker_id.is_none() {
            return;
        }
        if bowler_change_due {
            self.live.bowler_id = None;
            self.next_step = NextStep::AwaitingNewBowler;
        } else {
            self.next_step = step_for(&self.live);
        }
    }

    pub fn select_bowler(&mut self, player: &RosterEntry) -> Result<(), DomainError> {
        self.require_no_pending_wicket()?;
        let current = self.data.current;
        if self.data.current_innings().bowler(&player.id).is_none() {
            let mut innings = self.data.current_innings().clone();
            innings
                .bowling
                .push(BowlingEntry::new(player.id.clone(), player.name.clone()));
            self.replace_innings(current, innings);
        }
        self.live.bowler_id = Some(player.id.clone());
        self.next_step = match self.next_step {
            NextStep::AwaitingNewBatsman { .. } => NextStep::AwaitingNewBatsman {
                bowler_change_due: false,
            },
            NextStep::AwaitingNewBowler | NextStep::Ready => step_for(&self.live),
        };
        debug!(bowler = %player.name, "bowler selected");
        Ok(())
    }

    // ---- scoring ---------------------------------------------------------

    /// Score one ball. Wicket balls are held for confirmation instead.
    pub fn score_ball(
        &mut self,
        input: BallInput,
        now: OffsetDateTime,
    ) -> Result<ScoreOutcome, DomainError> {
        self.require_no_pending_wicket()?;
        match self.next_step {
            NextStep::AwaitingNewBatsman { .. } => {
                return Err(DomainError::validation(
                    ValidationKind::SelectionPending,
                    "Select the new batsman before the next ball",
                ))
            }
            NextStep::AwaitingNewBowler => {
                return Err(DomainError::validation(
                    ValidationKind::SelectionPending,
                    "Over complete: select the next bowler",
                ))
            }
            NextStep::Ready => {}
        }
        if !self.live.is_ready() {
            return Err(DomainError::validation(
                ValidationKind::MissingSelection,
                "Please select striker, non-striker and bowler before scoring",
            ));
        }

        input.check_runs()?;

        if input.is_wicket {
            self.wicket_flow.begin(&input)?;
            let pending = PendingWicket::from_input(&input);
            debug!(runs = input.runs, "wicket ball awaiting confirmation");
            return Ok(ScoreOutcome::WicketPending(pending));
        }

        self.commit(&input, None, now).map(ScoreOutcome::Scored)
    }

    /// Commit the pending wicket ball with its dismissal details.
    pub fn confirm_wicket(
        &mut self,
        kind: DismissalKind,
        fielder: Option<String>,
        now: OffsetDateTime,
    ) -> Result<BallEvent, DomainError> {
        let mut flow = self.wicket_flow;
        let (input, details) = flow.confirm(kind, fielder)?;
        let event = self.commit(&input, Some(&details), now)?;
        self.wicket_flow = flow;
        Ok(event)
    }

    /// Discard the pending wicket ball. Returns whether one was pending.
    pub fn cancel_wicket(&mut self) -> bool {
        let cancelled = self.wicket_flow.cancel();
        if cancelled {
            debug!("pending wicket cancelled");
        }
        cancelled
    }

    /// Restore the state from before the most recent ball.
    ///
    /// Returns `false` (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.data = snapshot.data;
        self.commentary = snapshot.commentary;
        self.live = snapshot.live_state;
        self.wicket_flow = WicketFlow::Idle;
        self.next_step = step_for(&self.live);
        self.celebration = None;
        self.issues = validate_scorecard(&self.data);
        info!(remaining = self.history.len(), "ball undone");
        true
    }

    fn commit(
        &mut self,
        input: &BallInput,
        wicket: Option<&WicketDetails>,
        now: OffsetDateTime,
    ) -> Result<BallEvent, DomainError> {
        let outcome = apply_delivery(&self.data, &self.live, input, wicket)?;

        self.history.push(HistoryState {
            data: self.data.clone(),
            commentary: self.commentary.clone(),
            live_state: self.live.clone(),
        });

        self.data = outcome.data;
        self.live = outcome.live;
        self.commentary.push(outcome.event.clone());
        self.next_step = outcome.next_step;
        self.celebration = outcome
            .celebration
            .map(|kind| Celebration { kind, raised_at: now })
            .or(self.celebration);
        self.refresh_issues();
        Ok(outcome.event)
    }

    // ---- manual corrections ---------------------------------------------

    pub fn switch_innings(&mut self, no: InningsNo) {
        self.data.current = no;
        self.live = LiveState::default();
        self.wicket_flow = WicketFlow::Idle;
        self.next_step = NextStep::Ready;
        self.celebration = None;
        info!(innings = no.label(), "innings switched");
    }

    pub fn add_batting_row(&mut self, no: InningsNo, player: &RosterEntry) {
        let mut innings = self.data.innings(no).clone();
        if innings.batter(&player.id).is_none() {
            innings
                .batting
                .push(BattingEntry::new(player.id.clone(), player.name.clone()));
            self.replace_innings(no, innings);
        }
    }

    pub fn add_bowling_row(&mut self, no: InningsNo, player: &RosterEntry) {
        let mut innings = self.data.innings(no).clone();
        if innings.bowler(&player.id).is_none() {
            innings
                .bowling
                .push(BowlingEntry::new(player.id.clone(), player.name.clone()));
            self.replace_innings(no, innings);
        }
    }

    pub fn remove_batting_row(&mut self, no: InningsNo, id: &str) -> Result<(), DomainError> {
        let mut innings = self.data.innings(no).clone();
        let before = innings.batting.len();
        innings.batting.retain(|b| b.id != id);
        if innings.batting.len() == before {
            return Err(row_not_found("batting", id));
        }
        self.replace_innings(no, innings);
        if no == self.data.current {
            for slot in [&mut self.live.striker_id, &mut self.live.non_striker_id] {
                if slot.as_deref() == Some(id) {
                    *slot = None;
                }
            }
        }
        Ok(())
    }

    pub fn remove_bowling_row(&mut self, no: InningsNo, id: &str) -> Result<(), DomainError> {
        let mut innings = self.data.innings(no).clone();
        let before = innings.bowling.len();
        innings.bowling.retain(|b| b.id != id);
        if innings.bowling.len() == before {
            return Err(row_not_found("bowling", id));
        }
        self.replace_innings(no, innings);
        if no == self.data.current && self.live.bowler_id.as_deref() == Some(id) {
            self.live.bowler_id = None;
        }
        Ok(())
    }

    /// Hand-correct one batting field. Numeric fields coerce bad input to 0.
    pub fn edit_batting(
        &mut self,
        no: InningsNo,
        id: &str,
        field: BattingField,
        raw: &str,
    ) -> Result<(), DomainError> {
        let mut innings = self.data.innings(no).clone();
        let row = innings
            .batter_mut(id)
            .ok_or_else(|| row_not_found("batting", id))?;
        match field {
            BattingField::Name => row.name = raw.trim().to_string(),
            BattingField::Runs => row.runs = parse_stat(raw),
            BattingField::Balls => row.balls = parse_stat(raw),
            BattingField::Fours => row.fours = parse_stat(raw),
            BattingField::Sixes => row.sixes = parse_stat(raw),
            BattingField::HowOut => row.how_out = raw.parse()?,
            BattingField::Fielder => row.fielder = non_blank(raw),
            BattingField::Bowler => row.bowler = non_blank(raw),
        }
        self.replace_innings(no, innings);
        Ok(())
    }

    /// Hand-correct one bowling field. Numeric fields coerce bad input to 0.
    pub fn edit_bowling(
        &mut self,
        no: InningsNo,
        id: &str,
        field: BowlingField,
        raw: &str,
    ) -> Result<(), DomainError> {
        let mut innings = self.data.innings(no).clone();
        let row = innings
            .bowler_mut(id)
            .ok_or_else(|| row_not_found("bowling", id))?;
        match field {
            BowlingField::Name => row.name = raw.trim().to_string(),
            BowlingField::Overs => row.overs = parse_overs(raw),
            BowlingField::Maidens => row.maidens = parse_stat(raw),
            BowlingField::Runs => row.runs = parse_stat(raw),
            BowlingField::Wickets => row.wickets = parse_stat(raw),
            BowlingField::Wides => row.wides = parse_stat(raw),
            BowlingField::NoBalls => row.no_balls = parse_stat(raw),
            BowlingField::LegByes => row.leg_byes = parse_stat(raw),
            BowlingField::Dots => row.dots = parse_stat(raw),
        }
        self.replace_innings(no, innings);
        Ok(())
    }

    pub fn set_bye_runs(&mut self, no: InningsNo, raw: &str) {
        let mut innings = self.data.innings(no).clone();
        innings.bye_runs = parse_stat(raw);
        self.replace_innings(no, innings);
    }

    // ---- internals -------------------------------------------------------

    fn replace_innings(&mut self, no: InningsNo, innings: Innings) {
        self.data = self.data.with_innings(no, aggregate_innings(&innings));
        self.refresh_issues();
    }

    fn refresh_issues(&mut self) {
        self.issues = validate_scorecard(&self.data);
        for issue in &self.issues {
            warn!(innings = issue.innings.label(), credited = issue.credited, fell = issue.fell, "{issue}");
        }
    }

    fn ensure_batting_row(&mut self, player: &RosterEntry) {
        self.add_batting_row(self.data.current, player);
    }

    fn check_batter_available(
        &self,
        player: &RosterEntry,
        other_end: Option<&str>,
    ) -> Result<(), DomainError> {
        if other_end == Some(player.id.as_str()) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateBatter,
                format!("{} is already batting at the other end", player.name),
            ));
        }
        if self
            .data
            .current_innings()
            .batter(&player.id)
            .is_some_and(BattingEntry::is_out)
        {
            return Err(DomainError::validation(
                ValidationKind::BatterAlreadyOut,
                format!("{} is already out", player.name),
            ));
        }
        Ok(())
    }

    fn require_no_pending_wicket(&self) -> Result<(), DomainError> {
        if self.wicket_flow.is_pending() {
            return Err(DomainError::validation(
                ValidationKind::WicketFlowMismatch,
                "Confirm or cancel the pending wicket first",
            ));
        }
        Ok(())
    }
}

fn step_for(live: &LiveState) -> NextStep {
    if live.striker_id.is_none() && live.non_striker_id.is_some() {
        NextStep::AwaitingNewBatsman {
            bowler_change_due: false,
        }
    } else if live.bowler_id.is_none() && live.striker_id.is_some() {
        NextStep::AwaitingNewBowler
    } else {
        NextStep::Ready
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn row_not_found(table: &str, id: &str) -> DomainError {
    DomainError::not_found(
        NotFoundKind::LedgerRow,
        format!("No {table} row for player '{id}'"),
    )
}
