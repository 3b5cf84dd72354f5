//! Return assumptions for savings growth projections

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Nominal annual return assumption driving the compounding loop
///
/// The three named strategies carry fixed rates and are not user-editable.
/// `Custom` covers simulator sliders where the "strategy" is just a rate;
/// the compounding path is identical for all variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SavingsStrategy {
    /// 4% nominal annual
    Conservative,
    /// 6% nominal annual
    Moderate,
    /// 8% nominal annual
    Aggressive,
    /// Arbitrary non-negative annual rate in percent
    Custom { annual_rate_pct: f64 },
}

impl SavingsStrategy {
    pub fn annual_rate_pct(&self) -> f64 {
        match self {
            SavingsStrategy::Conservative => 4.0,
            SavingsStrategy::Moderate => 6.0,
            SavingsStrategy::Aggressive => 8.0,
            SavingsStrategy::Custom { annual_rate_pct } => *annual_rate_pct,
        }
    }
}

impl fmt::Display for SavingsStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SavingsStrategy::Conservative => f.write_str("conservative"),
            SavingsStrategy::Moderate => f.write_str("moderate"),
            SavingsStrategy::Aggressive => f.write_str("aggressive"),
            SavingsStrategy::Custom { annual_rate_pct } => {
                write!(f, "custom ({annual_rate_pct}%)")
            }
        }
    }
}

impl FromStr for SavingsStrategy {
    type Err = String;

    /// Accepts a strategy name or a bare number treated as a custom rate
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "conservative" => Ok(SavingsStrategy::Conservative),
            "moderate" => Ok(SavingsStrategy::Moderate),
            "aggressive" => Ok(SavingsStrategy::Aggressive),
            other => other
                .parse::<f64>()
                .map(|annual_rate_pct| SavingsStrategy::Custom { annual_rate_pct })
                .map_err(|_| {
                    format!(
                        "unknown savings strategy '{s}' (expected conservative, moderate, \
                         aggressive, or a numeric annual rate)"
                    )
                }),
        }
    }
}
