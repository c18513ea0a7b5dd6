use serde::{Deserialize, Serialize};

use crate::domain::MatchInfo;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Completed,
}

/// Fixture on the club calendar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub opponent: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub venue: String,
    #[serde(default)]
    pub tournament: String,
    #[serde(default)]
    pub status: MatchStatus,
}

impl Model {
    /// Scorecard header for this fixture; one-way copy, never written back.
    pub fn match_info(&self, team_name: &str) -> MatchInfo {
        MatchInfo {
            team_name: team_name.to_owned(),
            opponent: self.opponent.clone(),
            date: self.date.clone(),
            venue: self.venue.clone(),
            tournament: self.tournament.clone(),
        }
    }
}
