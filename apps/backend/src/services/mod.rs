pub mod roster;
pub mod scorecards;

pub use roster::RosterService;
pub use scorecards::{LiveRole, ScorecardService};
