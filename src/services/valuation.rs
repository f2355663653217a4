//! Deterministic mapping from health score to token value.
//!
//! Out-of-range scores extrapolate linearly rather than clamping, so
//! historical observations never need retroactive correction.

/// Base value used for asset valuation
pub const BASE_ASSET_VALUE: f64 = 100.0;

/// Derive a token value from a health score against a base value
pub fn token_value(health_score: f64, base_value: f64) -> f64 {
    base_value * (health_score / 100.0)
}
