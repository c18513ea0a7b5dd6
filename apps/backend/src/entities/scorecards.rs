use serde::{Deserialize, Serialize};

use crate::domain::{BallEvent, LiveState, ScorecardData};

/// Saved scoring state for one match. Undo history is not persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub data: ScorecardData,
    #[serde(default)]
    pub commentary: Vec<BallEvent>,
    #[serde(default)]
    pub live_state: LiveState,
}
