//! Output structures for savings growth projections

use serde::{Deserialize, Serialize};

/// Balance snapshot taken at each 12-month boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySample {
    /// Simulated year, 1-indexed
    pub year: u32,

    /// Balance at the year boundary
    pub balance: f64,

    /// Initial amount plus all contributions paid so far
    pub contributions: f64,

    /// Growth over contributions: `balance - contributions`
    pub returns: f64,
}

/// Result of a savings growth simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsProjectionResult {
    /// Balance at the end of the horizon
    pub future_value: f64,

    /// Initial amount plus every monthly contribution over the horizon
    pub total_contributions: f64,

    /// `future_value - total_contributions`
    pub total_returns: f64,

    /// First year whose sampled balance met the target, when one was given
    /// and reached; `Some(0)` when the initial amount already covers it
    pub years_to_target: Option<u32>,

    /// One sample per simulated year
    pub yearly_samples: Vec<YearlySample>,
}
