//! Extras taxonomy and the raw input for one delivery.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Quick-entry run increments offered for every extras type.
pub const QUICK_RUNS: [u32; 5] = [0, 1, 2, 3, 4];

/// Most runs a single ball may carry, extras included.
pub const MAX_BALL_RUNS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtrasKind {
    #[serde(rename = "WD")]
    Wide,
    #[serde(rename = "NB")]
    NoBall,
    #[serde(rename = "B")]
    Bye,
    #[serde(rename = "LB")]
    LegBye,
}

impl ExtrasKind {
    pub const ALL: [ExtrasKind; 4] = [
        ExtrasKind::Wide,
        ExtrasKind::NoBall,
        ExtrasKind::Bye,
        ExtrasKind::LegBye,
    ];

    pub const fn code(&self) -> &'static str {
        match self {
            ExtrasKind::Wide => "WD",
            ExtrasKind::NoBall => "NB",
            ExtrasKind::Bye => "B",
            ExtrasKind::LegBye => "LB",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            ExtrasKind::Wide => "Wide",
            ExtrasKind::NoBall => "No Ball",
            ExtrasKind::Bye => "Bye",
            ExtrasKind::LegBye => "Leg Bye",
        }
    }
}

impl fmt::Display for ExtrasKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one ball as entered by the scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BallInput {
    pub runs: u32,
    pub is_wide: bool,
    pub is_no_ball: bool,
    pub is_wicket: bool,
    pub is_bye: bool,
    pub is_leg_bye: bool,
}

impl BallInput {
    pub fn runs(runs: u32) -> Self {
        Self {
            runs,
            ..Self::default()
        }
    }

    pub fn extra(kind: ExtrasKind, runs: u32) -> Self {
        let mut input = Self::runs(runs);
        match kind {
            ExtrasKind::Wide => input.is_wide = true,
            ExtrasKind::NoBall => input.is_no_ball = true,
            ExtrasKind::Bye => input.is_bye = true,
            ExtrasKind::LegBye => input.is_leg_bye = true,
        }
        input
    }

    pub fn with_wicket(mut self) -> Self {
        self.is_wicket = true;
        self
    }

    /// Reject run counts no single ball can produce.
    pub fn check_runs(&self) -> Result<(), DomainError> {
        if self.runs > MAX_BALL_RUNS {
            return Err(DomainError::validation(
                ValidationKind::InvalidRuns,
                format!(
                    "A ball can carry at most {MAX_BALL_RUNS} runs, got {}",
                    self.runs
                ),
            ));
        }
        Ok(())
    }

    /// Classify in priority order: wide, no-ball, bye, leg-bye, standard.
    pub fn kind(&self) -> BallKind {
        if self.is_wide {
            BallKind::Wide
        } else if self.is_no_ball {
            BallKind::NoBall
        } else if self.is_bye {
            BallKind::Bye
        } else if self.is_leg_bye {
            BallKind::LegBye
        } else {
            BallKind::Standard
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallKind {
    Wide,
    NoBall,
    Bye,
    LegBye,
    Standard,
}

impl BallKind {
    pub fn extras_kind(&self) -> Option<ExtrasKind> {
        match self {
            BallKind::Wide => Some(ExtrasKind::Wide),
            BallKind::NoBall => Some(ExtrasKind::NoBall),
            BallKind::Bye => Some(ExtrasKind::Bye),
            BallKind::LegBye => Some(ExtrasKind::LegBye),
            BallKind::Standard => None,
        }
    }

    /// Legal deliveries advance the bowler's over.
    pub fn counts_toward_over(&self) -> bool {
        !matches!(self, BallKind::Wide | BallKind::NoBall)
    }

    pub fn credits_batter(&self) -> bool {
        matches!(self, BallKind::NoBall | BallKind::Standard)
    }
}
