//! Budget records and surplus allocation

mod allocator;

pub use allocator::{allocate, AllocationEffect, AllocationTransaction, DelegationTarget};

use serde::{Deserialize, Serialize};

/// A budget category for one period, as supplied by the storage layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Category identifier (e.g. "groceries")
    pub category: String,

    /// Allocated amount for the period, must be positive
    pub amount: f64,

    /// What to do with money left over at period end, if configured
    pub surplus_strategy: Option<SurplusStrategy>,
}

impl Budget {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            amount,
            surplus_strategy: None,
        }
    }
}

/// One (category, percentage) share of a redistributed surplus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedistributionTarget {
    /// Category receiving the share
    pub category_id: String,

    /// Share of the surplus in percent, (0, 100]
    pub percentage: f64,
}

impl RedistributionTarget {
    pub fn new(category_id: impl Into<String>, percentage: f64) -> Self {
        Self {
            category_id: category_id.into(),
            percentage,
        }
    }
}

/// What happens to a budget's surplus at the end of the period
///
/// A closed set so that a newly added strategy forces every match site to be
/// revisited, rather than falling through a string comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SurplusStrategy {
    /// Surplus is added on top of next period's budget amount
    Rollover,

    /// Surplus is left alone
    Ignore,

    /// Surplus is routed into a savings record by the caller
    Save,

    /// Surplus is routed into an investment record by the caller
    Invest,

    /// Surplus is split across other categories by percentage
    Redistribute { targets: Vec<RedistributionTarget> },
}
