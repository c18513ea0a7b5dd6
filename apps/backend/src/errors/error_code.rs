//! Error codes for the Scorebook API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Scoring validation
    /// Striker, non-striker or bowler must be chosen first
    SelectionRequired,
    /// Live pointer refers to a player missing from the ledger
    UnknownPlayer,
    /// Same batter at both ends
    DuplicateBatter,
    /// Batter already dismissed
    BatterAlreadyOut,
    /// Dismissal kind not allowed for an active wicket
    InvalidDismissal,
    /// Wicket confirm/cancel out of sequence
    WicketFlowMismatch,
    /// New batsman or bowler must be chosen before the next ball
    SelectionPending,
    /// Wicket ball must go through the confirmation flow
    WicketNotConfirmed,
    /// Run count outside what one ball can carry
    InvalidRuns,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Scheduled match not found
    MatchNotFound,
    /// No live scorecard for this match
    ScorecardNotFound,
    /// Player not found
    PlayerNotFound,
    /// Ledger row not found
    RowNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Persistence store unavailable
    StoreUnavailable,
    /// Persisted blob could not be decoded
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SelectionRequired => "SELECTION_REQUIRED",
            Self::UnknownPlayer => "UNKNOWN_PLAYER",
            Self::DuplicateBatter => "DUPLICATE_BATTER",
            Self::BatterAlreadyOut => "BATTER_ALREADY_OUT",
            Self::InvalidDismissal => "INVALID_DISMISSAL",
            Self::WicketFlowMismatch => "WICKET_FLOW_MISMATCH",
            Self::SelectionPending => "SELECTION_PENDING",
            Self::WicketNotConfirmed => "WICKET_NOT_CONFIRMED",
            Self::InvalidRuns => "INVALID_RUNS",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::MatchNotFound => "MATCH_NOT_FOUND",
            Self::ScorecardNotFound => "SCORECARD_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::RowNotFound => "ROW_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
