//! Dismissal taxonomy.
//!
//! A closed enumeration replaces free-form "how out" strings; each kind
//! carries whether it counts as a fallen wicket, whether the bowler is
//! credited, and whether a fielder is recorded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DismissalKind {
    #[default]
    #[serde(rename = "Not Out")]
    NotOut,
    Bowled,
    Caught,
    #[serde(rename = "LBW")]
    Lbw,
    #[serde(rename = "Run Out")]
    RunOut,
    Stumped,
    #[serde(rename = "Hit Wicket")]
    HitWicket,
    #[serde(rename = "Retired Hurt")]
    RetiredHurt,
    #[serde(rename = "Obstructing Field")]
    ObstructingField,
    #[serde(rename = "Timed Out")]
    TimedOut,
    #[serde(rename = "Did not bat")]
    DidNotBat,
}

impl DismissalKind {
    /// Fixed UI order.
    pub const ALL: [DismissalKind; 11] = [
        DismissalKind::NotOut,
        DismissalKind::Bowled,
        DismissalKind::Caught,
        DismissalKind::Lbw,
        DismissalKind::RunOut,
        DismissalKind::Stumped,
        DismissalKind::HitWicket,
        DismissalKind::RetiredHurt,
        DismissalKind::ObstructingField,
        DismissalKind::TimedOut,
        DismissalKind::DidNotBat,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            DismissalKind::NotOut => "Not Out",
            DismissalKind::Bowled => "Bowled",
            DismissalKind::Caught => "Caught",
            DismissalKind::Lbw => "LBW",
            DismissalKind::RunOut => "Run Out",
            DismissalKind::Stumped => "Stumped",
            DismissalKind::HitWicket => "Hit Wicket",
            DismissalKind::RetiredHurt => "Retired Hurt",
            DismissalKind::ObstructingField => "Obstructing Field",
            DismissalKind::TimedOut => "Timed Out",
            DismissalKind::DidNotBat => "Did not bat",
        }
    }

    /// Whether a batter with this status counts toward the innings' fallen wickets.
    pub const fn counts_as_wicket(&self) -> bool {
        !matches!(
            self,
            DismissalKind::NotOut | DismissalKind::RetiredHurt | DismissalKind::DidNotBat
        )
    }

    /// Whether the bowler of the ball is credited with the wicket.
    pub const fn credits_bowler(&self) -> bool {
        self.counts_as_wicket()
            && !matches!(
                self,
                DismissalKind::RunOut | DismissalKind::TimedOut | DismissalKind::ObstructingField
            )
    }

    pub const fn requires_fielder(&self) -> bool {
        matches!(
            self,
            DismissalKind::Caught | DismissalKind::RunOut | DismissalKind::Stumped
        )
    }

    /// Whether this kind may be chosen when confirming a wicket ball.
    pub const fn is_selectable_dismissal(&self) -> bool {
        !matches!(
            self,
            DismissalKind::NotOut | DismissalKind::DidNotBat | DismissalKind::RetiredHurt
        )
    }
}

impl fmt::Display for DismissalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DismissalKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.is_empty() {
            return Ok(DismissalKind::NotOut);
        }
        DismissalKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidDismissal,
                    format!("Unknown dismissal type '{wanted}'"),
                )
            })
    }
}
