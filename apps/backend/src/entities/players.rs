use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, RosterEntry};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Batsman,
    Bowler,
    #[serde(rename = "All-rounder")]
    AllRounder,
    #[serde(rename = "Wicket-keeper")]
    WicketKeeper,
}

/// Club squad member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub batting_style: String,
    #[serde(default)]
    pub bowling_style: String,
    #[serde(default)]
    pub jersey_number: Option<u32>,
}

impl Model {
    pub fn roster_entry(&self) -> RosterEntry {
        RosterEntry::new(self.id.clone(), self.name.clone())
    }
}
