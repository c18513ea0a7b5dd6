//! Innings aggregation: derive totals from the ledgers.
//!
//! Always a full fold over the current rows, never an incremental patch,
//! so repeated calls without a ledger change are no-ops.

use crate::domain::ledger::{Innings, ScorecardData};
use crate::domain::overs::overs_from_balls;

/// Totals clamp at `u32::MAX` so hand-typed figures can never overflow.
fn saturating_sum(values: impl IntoIterator<Item = u32>) -> u32 {
    values.into_iter().fold(0, u32::saturating_add)
}

/// Return a copy of `innings` with every derived field recomputed.
pub fn aggregate_innings(innings: &Innings) -> Innings {
    let batter_runs = saturating_sum(innings.batting.iter().map(|b| b.runs));
    let wides = saturating_sum(innings.bowling.iter().map(|b| b.wides));
    let no_balls = saturating_sum(innings.bowling.iter().map(|b| b.no_balls));
    let leg_byes = saturating_sum(innings.bowling.iter().map(|b| b.leg_byes));
    let extras = saturating_sum([wides, no_balls, leg_byes, innings.bye_runs]);

    let wickets = u32::try_from(innings.batting.iter().filter(|b| b.is_out()).count())
        .unwrap_or(u32::MAX);
    let balls = saturating_sum(innings.bowling.iter().map(|b| b.overs.total_balls()));

    Innings {
        extras,
        total_runs: batter_runs.saturating_add(extras),
        wickets,
        overs: overs_from_balls(balls),
        ..innings.clone()
    }
}

/// Recompute both innings of a scorecard.
pub fn aggregate_scorecard(data: &ScorecardData) -> ScorecardData {
    let mut next = data.clone();
    for innings in next.innings.iter_mut() {
        *innings = aggregate_innings(innings);
    }
    next
}
