use serde::{Deserialize, Serialize};

use crate::domain::RosterEntry;

/// Opposing club and the squad it usually fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub home_ground: String,
    #[serde(default)]
    pub players: Vec<RosterEntry>,
}
