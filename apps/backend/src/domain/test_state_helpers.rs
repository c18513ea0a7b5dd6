//! Test-only session helpers for domain unit tests.

use time::OffsetDateTime;

use crate::domain::{MatchInfo, RosterEntry, ScorecardData, ScoringSession};

pub fn player(id: &str, name: &str) -> RosterEntry {
    RosterEntry::new(id, name)
}

/// Fixed clock so celebration expiry is deterministic.
pub fn t0() -> OffsetDateTime {
    time::macros::datetime!(2024-05-18 10:00 UTC)
}

pub fn match_info() -> MatchInfo {
    MatchInfo {
        team_name: "Riverside CC".into(),
        opponent: "Hillcrest CC".into(),
        date: "2024-05-18".into(),
        venue: "Riverside Park".into(),
        tournament: "Sunday League".into(),
    }
}

/// Session with batter A on strike, batter B at the other end, bowler C.
pub fn ready_session() -> ScoringSession {
    let mut session = ScoringSession::new(ScorecardData::new(match_info()));
    session
        .select_striker(&player("a", "Alice"))
        .expect("select striker");
    session
        .select_non_striker(&player("b", "Bea"))
        .expect("select non-striker");
    session
        .select_bowler(&player("c", "Cara"))
        .expect("select bowler");
    session
}
