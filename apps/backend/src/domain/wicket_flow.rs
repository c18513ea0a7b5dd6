//! Two-step wicket confirmation.
//!
//! A wicket ball is intercepted and held as a `PendingWicket` until the
//! scorer picks the dismissal type (and fielder, where relevant). Nothing is
//! written to the ledgers or the undo stack until confirmation.

use serde::{Deserialize, Serialize};

use crate::domain::delivery::WicketDetails;
use crate::domain::dismissal::DismissalKind;
use crate::domain::extras::BallInput;
use crate::errors::domain::{DomainError, ValidationKind};

/// Run and extras flags of the ball on which the wicket fell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingWicket {
    pub runs: u32,
    pub is_wide: bool,
    pub is_no_ball: bool,
    pub is_bye: bool,
    pub is_leg_bye: bool,
}

impl PendingWicket {
    pub fn from_input(input: &BallInput) -> Self {
        Self {
            runs: input.runs,
            is_wide: input.is_wide,
            is_no_ball: input.is_no_ball,
            is_bye: input.is_bye,
            is_leg_bye: input.is_leg_bye,
        }
    }

    pub fn to_input(&self) -> BallInput {
        BallInput {
            runs: self.runs,
            is_wide: self.is_wide,
            is_no_ball: self.is_no_ball,
            is_wicket: true,
            is_bye: self.is_bye,
            is_leg_bye: self.is_leg_bye,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "pending", rename_all = "camelCase")]
pub enum WicketFlow {
    #[default]
    Idle,
    PendingConfirmation(PendingWicket),
}

impl WicketFlow {
    pub fn is_pending(&self) -> bool {
        matches!(self, WicketFlow::PendingConfirmation(_))
    }

    pub fn pending(&self) -> Option<&PendingWicket> {
        match self {
            WicketFlow::PendingConfirmation(p) => Some(p),
            WicketFlow::Idle => None,
        }
    }

    /// Hold a wicket ball for confirmation.
    pub fn begin(&mut self, input: &BallInput) -> Result<(), DomainError> {
        if self.is_pending() {
            return Err(DomainError::validation(
                ValidationKind::WicketFlowMismatch,
                "A wicket is already awaiting confirmation",
            ));
        }
        *self = WicketFlow::PendingConfirmation(PendingWicket::from_input(input));
        Ok(())
    }

    /// Drop the pending wicket. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        *self = WicketFlow::Idle;
        was_pending
    }

    /// Validate the dismissal and hand back the ball to commit.
    ///
    /// The flow only returns to `Idle` on success, so a rejected dismissal
    /// type leaves the wicket pending for another attempt.
    pub fn confirm(
        &mut self,
        kind: DismissalKind,
        fielder: Option<String>,
    ) -> Result<(BallInput, WicketDetails), DomainError> {
        let WicketFlow::PendingConfirmation(pending) = *self else {
            return Err(DomainError::validation(
                ValidationKind::WicketFlowMismatch,
                "No wicket is awaiting confirmation",
            ));
        };
        if !kind.is_selectable_dismissal() {
            return Err(DomainError::validation(
                ValidationKind::InvalidDismissal,
                format!("'{kind}' is not a valid dismissal for a wicket ball"),
            ));
        }
        let fielder = fielder
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty() && shows_fielder(kind));

        *self = WicketFlow::Idle;
        Ok((pending.to_input(), WicketDetails { kind, fielder }))
    }
}

/// Dismissal types offered when confirming a wicket, in UI order.
pub fn dismissal_choices() -> Vec<DismissalKind> {
    DismissalKind::ALL
        .iter()
        .copied()
        .filter(DismissalKind::is_selectable_dismissal)
        .collect()
}

/// Whether the fielder picker applies to this dismissal type.
pub fn shows_fielder(kind: DismissalKind) -> bool {
    kind.requires_fielder()
}
