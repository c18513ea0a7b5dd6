//! Advisory cross-checks over an aggregated scorecard.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::ledger::{InningsNo, ScorecardData};

/// Bowlers were credited with more wickets than actually fell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub innings: InningsNo,
    pub credited: u32,
    pub fell: u32,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Bowlers credited with {} wickets, but only {} fell.",
            self.innings.label(),
            self.credited,
            self.fell
        )
    }
}

impl Serialize for ValidationIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Check every innings; expects `data` to be freshly aggregated.
pub fn validate_scorecard(data: &ScorecardData) -> Vec<ValidationIssue> {
    InningsNo::ALL
        .iter()
        .filter_map(|&no| {
            let innings = data.innings(no);
            let credited = innings
                .bowling
                .iter()
                .map(|b| b.wickets)
                .fold(0, u32::saturating_add);
            (credited > innings.wickets).then_some(ValidationIssue {
                innings: no,
                credited,
                fell: innings.wickets,
            })
        })
        .collect()
}
