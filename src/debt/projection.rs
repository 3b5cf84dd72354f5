//! Output structures for debt payoff projections

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::strategy::PayoffStrategy;

/// One month of the portfolio roll-forward, recorded when detailed output is
/// requested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Simulated month, 1-indexed
    pub month: u32,

    /// Debts still carrying a balance at the end of the month
    pub open_debts: u32,

    /// Interest accrued across all debts this month
    pub interest_accrued: f64,

    /// Minimum payments actually applied this month
    pub minimums_paid: f64,

    /// Extra payment actually applied this month
    pub extra_applied: f64,

    /// Total remaining balance at the end of the month
    pub total_balance: f64,
}

/// Result of a debt payoff simulation
///
/// Derived, never persisted; recomputed on every call. All currency values
/// carry full precision; rounding happens at presentation boundaries only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtProjectionResult {
    /// Strategy the simulation ran under
    pub strategy: PayoffStrategy,

    /// Months until the last debt closed
    pub months_to_pay_off: u32,

    /// Total money applied: minimums plus extra actually absorbed
    pub total_paid: f64,

    /// Total interest accrued across all debts and months
    pub total_interest: f64,

    /// Sum of contractual minimums plus the configured extra payment
    pub monthly_payment_total: f64,

    /// Anchor date plus the payoff horizon, calendar month arithmetic
    pub payoff_date: NaiveDate,

    /// Per-month roll-forward; empty unless detailed output was requested
    pub schedule: Vec<ScheduleRow>,
}

impl DebtProjectionResult {
    /// The zero projection for an empty (or already cleared) portfolio
    pub(crate) fn zero(strategy: PayoffStrategy, as_of: NaiveDate) -> Self {
        Self {
            strategy,
            months_to_pay_off: 0,
            total_paid: 0.0,
            total_interest: 0.0,
            monthly_payment_total: 0.0,
            payoff_date: as_of,
            schedule: Vec::new(),
        }
    }
}
