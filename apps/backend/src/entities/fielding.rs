use serde::{Deserialize, Serialize};

/// One fielder placement, in percent of the field diagram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPosition {
    pub label: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub player_id: Option<String>,
}

/// Named field setting. Stored and returned as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub positions: Vec<FieldPosition>,
}
