//! Extra-payment prioritization strategies

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the monthly extra payment is targeted across open debts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    /// Highest interest rate first; minimizes total interest
    Avalanche,
    /// Smallest balance first; maximizes early psychological wins
    Snowball,
    /// 50/50 blend of normalized rate and inverse normalized balance,
    /// trading off interest cost against clearing small debts quickly
    Combined,
}

impl PayoffStrategy {
    pub const ALL: [PayoffStrategy; 3] = [
        PayoffStrategy::Avalanche,
        PayoffStrategy::Snowball,
        PayoffStrategy::Combined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffStrategy::Avalanche => "avalanche",
            PayoffStrategy::Snowball => "snowball",
            PayoffStrategy::Combined => "combined",
        }
    }

    /// Pick which open debt receives this month's extra payment.
    ///
    /// `open` holds `(input_index, balance, annual_rate_pct)` for every debt
    /// still carrying a balance. Returns the position within `open`. All
    /// orderings are total and fall back to input order, so a given portfolio
    /// always ranks identically.
    pub(crate) fn select_target(&self, open: &[(usize, f64, f64)]) -> usize {
        debug_assert!(!open.is_empty());
        match self {
            PayoffStrategy::Avalanche => pick_best(open, |&(_, balance, rate)| (rate, balance)),
            PayoffStrategy::Snowball => {
                pick_best(open, |&(_, balance, rate)| (-balance, rate))
            }
            PayoffStrategy::Combined => {
                let (min_rate, max_rate) = span(open.iter().map(|&(_, _, r)| r));
                let (min_bal, max_bal) = span(open.iter().map(|&(_, b, _)| b));
                pick_best(open, |&(_, balance, rate)| {
                    let rate_score = normalize(rate, min_rate, max_rate);
                    let balance_score = 1.0 - normalize(balance, min_bal, max_bal);
                    let score = 0.5 * rate_score + 0.5 * balance_score;
                    (score, rate)
                })
            }
        }
    }
}

/// Highest key wins; earlier input order breaks exact ties
fn pick_best<K, F>(open: &[(usize, f64, f64)], key: F) -> usize
where
    K: PartialOrd,
    F: Fn(&(usize, f64, f64)) -> K,
{
    let mut best = 0;
    let mut best_key = key(&open[0]);
    for (pos, entry) in open.iter().enumerate().skip(1) {
        let k = key(entry);
        if k > best_key {
            best = pos;
            best_key = k;
        }
    }
    best
}

fn span(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Normalize into [0, 1]; a degenerate span is neutral rather than biased
fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max - min <= f64::EPSILON {
        0.5
    } else {
        (value - min) / (max - min)
    }
}

impl fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoffStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "avalanche" => Ok(PayoffStrategy::Avalanche),
            "snowball" => Ok(PayoffStrategy::Snowball),
            "combined" => Ok(PayoffStrategy::Combined),
            other => Err(format!(
                "unknown payoff strategy '{other}' (expected avalanche, snowball, or combined)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // (input_index, balance, annual rate %)
    const OPEN: [(usize, f64, f64); 3] = [
        (0, 8_000.0, 19.9), // high rate, mid balance
        (1, 500.0, 4.0),    // low rate, small balance
        (2, 20_000.0, 6.5), // mid rate, large balance
    ];

    #[test]
    fn test_avalanche_targets_highest_rate() {
        assert_eq!(PayoffStrategy::Avalanche.select_target(&OPEN), 0);
    }

    #[test]
    fn test_snowball_targets_smallest_balance() {
        assert_eq!(PayoffStrategy::Snowball.select_target(&OPEN), 1);
    }

    #[test]
    fn test_avalanche_rate_tie_breaks_by_balance() {
        let open = [(0, 1_000.0, 10.0), (1, 5_000.0, 10.0)];
        assert_eq!(PayoffStrategy::Avalanche.select_target(&open), 1);
    }

    #[test]
    fn test_snowball_balance_tie_breaks_by_rate() {
        let open = [(0, 1_000.0, 3.0), (1, 1_000.0, 12.0)];
        assert_eq!(PayoffStrategy::Snowball.select_target(&open), 1);
    }

    #[test]
    fn test_combined_balances_rate_against_size() {
        // Debt 0 has the best rate score (1.0) and the best balance score
        // (1.0 minus normalized mid balance beats the large debt), so the
        // blend must not pick the large high-balance debt
        let target = PayoffStrategy::Combined.select_target(&OPEN);
        assert_ne!(target, 2);
    }

    #[test]
    fn test_combined_identical_debts_keep_input_order() {
        let open = [(0, 1_000.0, 5.0), (1, 1_000.0, 5.0)];
        assert_eq!(PayoffStrategy::Combined.select_target(&open), 0);
    }

    #[test]
    fn test_parse_round_trip() {
        for strategy in PayoffStrategy::ALL {
            assert_eq!(strategy.as_str().parse::<PayoffStrategy>(), Ok(strategy));
        }
        assert!("aggressive".parse::<PayoffStrategy>().is_err());
    }
}
