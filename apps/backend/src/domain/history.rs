//! Snapshot-based undo stack.

use serde::{Deserialize, Serialize};

use crate::domain::ledger::{BallEvent, LiveState, ScorecardData};

/// Full scoring state captured before a ball is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryState {
    pub data: ScorecardData,
    pub commentary: Vec<BallEvent>,
    pub live_state: LiveState,
}

/// Unbounded LIFO of snapshots; lives as long as one scoring session.
#[derive(Debug, Clone, Default)]
pub struct History {
    stack: Vec<HistoryState>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: HistoryState) {
        self.stack.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<HistoryState> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
