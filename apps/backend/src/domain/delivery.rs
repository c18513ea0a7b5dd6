//! Delivery processing: apply one ball to the current innings.
//!
//! `apply_delivery` is pure. It takes the current scorecard and live
//! pointers by reference and returns replacement values; callers swap them in
//! wholesale (after pushing an undo snapshot).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::aggregate::aggregate_scorecard;
use crate::domain::dismissal::DismissalKind;
use crate::domain::extras::{BallInput, BallKind};
use crate::domain::ledger::{BallEvent, LiveState, ScorecardData};
use crate::domain::overs::add_balls;
use crate::errors::domain::{DomainError, ValidationKind};

/// Dismissal metadata collected by the wicket flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WicketDetails {
    pub kind: DismissalKind,
    #[serde(default)]
    pub fielder: Option<String>,
}

/// Transient highlight raised by a ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelebrationKind {
    Four,
    Six,
    Wicket,
}

/// What the scorer must do before the next ball.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "camelCase")]
pub enum NextStep {
    #[default]
    Ready,
    /// Striker was dismissed. When the wicket also ended the over, the
    /// bowler change follows the new batsman.
    #[serde(rename_all = "camelCase")]
    AwaitingNewBatsman { bowler_change_due: bool },
    /// Over complete; a bowler must be chosen.
    AwaitingNewBowler,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryOutcome {
    pub data: ScorecardData,
    pub live: LiveState,
    pub event: BallEvent,
    pub celebration: Option<CelebrationKind>,
    pub next_step: NextStep,
}

/// Apply one ball. `wicket` must be present exactly when `input.is_wicket`.
pub fn apply_delivery(
    data: &ScorecardData,
    live: &LiveState,
    input: &BallInput,
    wicket: Option<&WicketDetails>,
) -> Result<DeliveryOutcome, DomainError> {
    if input.is_wicket != wicket.is_some() {
        return Err(DomainError::validation(
            ValidationKind::WicketNotConfirmed,
            "Wicket balls must be confirmed with dismissal details",
        ));
    }

    input.check_runs()?;

    let (Some(striker_id), Some(non_striker_id), Some(bowler_id)) = (
        live.striker_id.as_deref(),
        live.non_striker_id.as_deref(),
        live.bowler_id.as_deref(),
    ) else {
        return Err(DomainError::validation(
            ValidationKind::MissingSelection,
            "Please select striker, non-striker and bowler before scoring",
        ));
    };

    let current = data.current;
    let mut innings = data.current_innings().clone();
    let kind = input.kind();
    let runs = input.runs;

    let striker_name = innings
        .batter(striker_id)
        .map(|b| b.name.clone())
        .ok_or_else(|| unknown_player("striker", striker_id))?;
    if innings.batter(non_striker_id).is_none() {
        return Err(unknown_player("non-striker", non_striker_id));
    }
    let bowler_name = innings
        .bowler(bowler_id)
        .map(|b| b.name.clone())
        .ok_or_else(|| unknown_player("bowler", bowler_id))?;

    let (batter_runs, extras_runs) = match kind {
        BallKind::Wide => (0, 1 + runs),
        BallKind::NoBall => (runs, 1),
        BallKind::Bye | BallKind::LegBye => (0, runs),
        BallKind::Standard => (runs, 0),
    };

    if let Some(batter) = innings.batter_mut(striker_id) {
        if kind != BallKind::Wide {
            batter.balls = batter.balls.saturating_add(1);
        }
        if kind.credits_batter() {
            batter.runs = batter.runs.saturating_add(batter_runs);
            match batter_runs {
                4 => batter.fours = batter.fours.saturating_add(1),
                6 => batter.sixes = batter.sixes.saturating_add(1),
                _ => {}
            }
        }
        if let Some(details) = wicket {
            batter.how_out = details.kind;
            batter.fielder = details
                .fielder
                .clone()
                .filter(|_| details.kind.requires_fielder());
            batter.bowler = Some(bowler_name.clone());
        }
    }

    let mut over_complete = false;
    if let Some(bowler) = innings.bowler_mut(bowler_id) {
        match kind {
            BallKind::Wide => {
                bowler.runs = bowler.runs.saturating_add(extras_runs);
                bowler.wides = bowler.wides.saturating_add(extras_runs);
            }
            BallKind::NoBall => {
                bowler.runs = bowler.runs.saturating_add(1 + runs);
                bowler.no_balls = bowler.no_balls.saturating_add(1);
            }
            BallKind::Bye => bowler.dots = bowler.dots.saturating_add(1),
            BallKind::LegBye => {
                bowler.leg_byes = bowler.leg_byes.saturating_add(runs);
                bowler.dots = bowler.dots.saturating_add(1);
            }
            BallKind::Standard => {
                bowler.runs = bowler.runs.saturating_add(runs);
                if runs == 0 {
                    bowler.dots = bowler.dots.saturating_add(1);
                }
            }
        }
        if kind.counts_toward_over() {
            bowler.overs = add_balls(bowler.overs, 1);
            over_complete = bowler.overs.is_over_complete();
        }
        if wicket.is_some_and(|w| w.kind.credits_bowler()) {
            bowler.wickets = bowler.wickets.saturating_add(1);
        }
    }
    if kind == BallKind::Bye {
        innings.bye_runs = innings.bye_runs.saturating_add(runs);
    }

    let data = aggregate_scorecard(&data.with_innings(current, innings));

    let mut next_live = live.clone();
    let next_step = if wicket.is_some() {
        next_live.striker_id = None;
        if over_complete {
            // Survivor faces the next over; the new batsman fills the other end.
            next_live.swap_strike();
        }
        NextStep::AwaitingNewBatsman {
            bowler_change_due: over_complete,
        }
    } else {
        if runs % 2 == 1 {
            next_live.swap_strike();
        }
        if over_complete {
            next_live.swap_strike();
            next_live.bowler_id = None;
            NextStep::AwaitingNewBowler
        } else {
            NextStep::Ready
        }
    };

    let innings_overs = data.current_innings().overs;
    let event = BallEvent {
        inning: current.number(),
        over: innings_overs.completed(),
        ball_number: u32::from(innings_overs.balls()),
        striker: striker_name,
        bowler: bowler_name,
        runs: batter_runs,
        extras_type: kind.extras_kind(),
        extras_runs,
        is_wicket: wicket.is_some(),
        description: describe(kind, runs, wicket.map(|w| w.kind)),
    };

    let celebration = match (wicket, kind, runs) {
        (Some(_), _, _) => Some(CelebrationKind::Wicket),
        (None, BallKind::Bye | BallKind::LegBye, _) => None,
        (None, _, 4) => Some(CelebrationKind::Four),
        (None, _, 6) => Some(CelebrationKind::Six),
        _ => None,
    };

    debug!(
        inning = event.inning,
        over = event.over,
        ball = event.ball_number,
        description = %event.description,
        total = data.current_innings().total_runs,
        "delivery applied"
    );

    Ok(DeliveryOutcome {
        data,
        live: next_live,
        event,
        celebration,
        next_step,
    })
}

fn unknown_player(role: &str, id: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::UnknownPlayer,
        format!("Selected {role} '{id}' is not in the current innings"),
    )
}

fn plural(n: u32, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Commentary line for one ball, e.g. `Wide + 2 Runs`, `WICKET! (Caught) 1 Run`.
pub fn describe(kind: BallKind, runs: u32, dismissal: Option<DismissalKind>) -> String {
    let run_text = match kind {
        BallKind::Wide | BallKind::NoBall => {
            let label = if kind == BallKind::Wide { "Wide" } else { "No Ball" };
            if runs == 0 {
                label.to_string()
            } else {
                format!("{label} + {}", plural(runs, "Run", "Runs"))
            }
        }
        BallKind::Bye => plural(runs, "Bye", "Byes"),
        BallKind::LegBye => plural(runs, "Leg Bye", "Leg Byes"),
        BallKind::Standard => match (runs, dismissal) {
            (0, Some(_)) => String::new(),
            (0, None) => "Dot Ball".to_string(),
            (4, None) => "FOUR!".to_string(),
            (6, None) => "SIX!".to_string(),
            (n, _) => plural(n, "Run", "Runs"),
        },
    };

    match dismissal {
        Some(how) if run_text.is_empty() => format!("WICKET! ({how})"),
        Some(how) => format!("WICKET! ({how}) {run_text}"),
        None => run_text,
    }
}
