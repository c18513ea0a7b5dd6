//! Domain layer: the ball-by-ball scoring engine. Pure types and helpers.

pub mod aggregate;
pub mod delivery;
pub mod dismissal;
pub mod extras;
pub mod history;
pub mod ledger;
pub mod numeric;
pub mod overs;
pub mod session;
pub mod snapshot;
pub mod validation;
pub mod wicket_flow;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_aggregate;
#[cfg(test)]
mod tests_props_delivery;
#[cfg(test)]
mod tests_session;

// Re-exports for ergonomics
pub use aggregate::{aggregate_innings, aggregate_scorecard};
pub use delivery::{apply_delivery, CelebrationKind, DeliveryOutcome, NextStep, WicketDetails};
pub use dismissal::DismissalKind;
pub use extras::{BallInput, BallKind, ExtrasKind};
pub use ledger::{
    BallEvent, BattingEntry, BowlingEntry, Innings, InningsNo, LiveState, MatchInfo, PlayerId,
    RosterEntry, ScorecardData,
};
pub use overs::{add_balls, economy, overs_from_balls, strike_rate, Overs};
pub use session::{BattingField, BowlingField, ScoreOutcome, ScoringSession};
pub use validation::{validate_scorecard, ValidationIssue};
pub use wicket_flow::{PendingWicket, WicketFlow};
