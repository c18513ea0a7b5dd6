//! Over/ball arithmetic in the cricket `overs.balls` convention.
//!
//! `4.3` means four completed overs plus three balls, never 4.3 decimal
//! overs. Every helper here keeps that convention intact; rates convert to a
//! true fraction (`balls / 6`) only at the point of division.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const BALLS_PER_OVER: u32 = 6;

/// An overs figure in `overs.balls` form. `balls` is always `0..=5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Overs {
    completed: u32,
    balls: u8,
}

impl Overs {
    pub const ZERO: Overs = Overs {
        completed: 0,
        balls: 0,
    };

    pub fn from_balls(total_balls: u32) -> Self {
        Self {
            completed: total_balls / BALLS_PER_OVER,
            balls: (total_balls % BALLS_PER_OVER) as u8,
        }
    }

    /// Decompose a typed-in `overs.balls` decimal into a normalised figure.
    ///
    /// Uses `floor(ov) * 6 + round(frac * 10)`, so an out-of-range ball digit
    /// carries into the next over (`4.7` becomes `5.1`). Negative and
    /// non-finite input is treated as zero.
    pub fn from_decimal(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self::ZERO;
        }
        let whole = value.floor();
        let frac_balls = ((value - whole) * 10.0).round() as u32;
        Self::from_balls(
            (whole as u32)
                .saturating_mul(BALLS_PER_OVER)
                .saturating_add(frac_balls),
        )
    }

    pub fn total_balls(&self) -> u32 {
        self.completed * BALLS_PER_OVER + u32::from(self.balls)
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn balls(&self) -> u8 {
        self.balls
    }

    /// True on an over boundary after at least one ball.
    pub fn is_over_complete(&self) -> bool {
        self.balls == 0 && self.completed > 0
    }

    pub fn as_decimal(&self) -> f64 {
        f64::from(self.completed) + f64::from(self.balls) / 10.0
    }

    /// True-fraction overs (`balls / 6`) for rate calculations.
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.total_balls()) / f64::from(BALLS_PER_OVER)
    }
}

impl From<f64> for Overs {
    fn from(value: f64) -> Self {
        Overs::from_decimal(value)
    }
}

impl From<Overs> for f64 {
    fn from(overs: Overs) -> Self {
        overs.as_decimal()
    }
}

impl fmt::Display for Overs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.completed, self.balls)
    }
}

pub fn overs_from_balls(total_balls: u32) -> Overs {
    Overs::from_balls(total_balls)
}

pub fn add_balls(current: Overs, balls_to_add: u32) -> Overs {
    Overs::from_balls(current.total_balls().saturating_add(balls_to_add))
}

/// Batting strike rate, runs per hundred balls, to two decimals.
pub fn strike_rate(runs: u32, balls: u32) -> String {
    if balls == 0 {
        return "0.00".to_string();
    }
    format!("{:.2}", f64::from(runs) / f64::from(balls) * 100.0)
}

/// Runs conceded per (true-fraction) over, to two decimals.
pub fn economy(runs: u32, overs: Overs) -> String {
    if overs.total_balls() == 0 {
        return "0.00".to_string();
    }
    format!("{:.2}", f64::from(runs) / overs.as_fraction())
}

/// Runs conceded per wicket; `-` before the first wicket.
pub fn bowling_average(runs: u32, wickets: u32) -> String {
    if wickets == 0 {
        return "-".to_string();
    }
    format!("{:.2}", f64::from(runs) / f64::from(wickets))
}

/// Balls bowled per wicket; `-` before the first wicket.
pub fn bowling_strike_rate(overs: Overs, wickets: u32) -> String {
    if wickets == 0 {
        return "-".to_string();
    }
    format!("{:.2}", f64::from(overs.total_balls()) / f64::from(wickets))
}
