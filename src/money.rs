//! Shared numeric primitives: rate conversion, currency rounding, and
//! redistribution-percentage validation

use std::collections::HashSet;

use crate::budget::RedistributionTarget;
use crate::error::{EngineError, Result};

/// Tolerance on the redistribution percentage sum, in percentage points.
/// Loose enough to absorb floating-point accumulation from repeated decimal
/// input (e.g. 33.33 + 33.33 + 33.34), tight enough to reject 99.9 or 100.1.
pub const PERCENT_SUM_EPSILON: f64 = 0.01;

/// Convert a nominal annual rate in percent to a monthly decimal rate.
///
/// `5.0` (5% annual) becomes `0.05 / 12`.
pub fn monthly_rate_from_annual(annual_rate_pct: f64) -> Result<f64> {
    if annual_rate_pct < 0.0 {
        return Err(EngineError::invalid(format!(
            "annual rate must be non-negative, got {annual_rate_pct}"
        )));
    }
    Ok(annual_rate_pct / 100.0 / 12.0)
}

/// Round a currency amount to 2 decimal places.
///
/// Presentation-boundary helper only. Simulation loops carry full precision;
/// rounding inside the loop would compound error over hundreds of months.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Check that a redistribution target list is well-formed: non-empty, every
/// percentage in (0, 100], category ids distinct, and the percentages summing
/// to 100 within [`PERCENT_SUM_EPSILON`].
pub fn validate_redistribution_targets(targets: &[RedistributionTarget]) -> bool {
    if targets.is_empty() {
        return false;
    }

    let mut seen = HashSet::with_capacity(targets.len());
    let mut sum = 0.0;
    for target in targets {
        if target.percentage <= 0.0 || target.percentage > 100.0 {
            return false;
        }
        if !seen.insert(target.category_id.as_str()) {
            return false;
        }
        sum += target.percentage;
    }

    (sum - 100.0).abs() <= PERCENT_SUM_EPSILON
}
