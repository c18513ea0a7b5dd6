//! Numeric parse boundary for hand-typed stat fields.
//!
//! Malformed input never surfaces as an error here; it becomes zero.

use crate::domain::overs::Overs;

/// Parse a whole-number stat. Blank, negative or non-numeric input is `0`;
/// a fractional value is truncated.
pub fn parse_stat(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<u32>() {
        return v;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.trunc().min(f64::from(u32::MAX)) as u32,
        _ => 0,
    }
}

/// Parse an `overs.balls` figure such as `4.3`.
pub fn parse_overs(raw: &str) -> Overs {
    raw.trim()
        .parse::<f64>()
        .map(Overs::from_decimal)
        .unwrap_or(Overs::ZERO)
}
