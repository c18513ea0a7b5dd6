pub mod fielding;
pub mod matches;
pub mod opponents;
pub mod players;
pub mod scorecards;

pub use fielding::Model as FieldingStrategy;
pub use matches::Model as ScheduledMatch;
pub use opponents::Model as Opponent;
pub use players::Model as Player;
pub use scorecards::Model as ScorecardRecord;
