//! Surplus allocation: compute the follow-on effect of an unspent budget
//!
//! Pure computation. The caller persists whatever the effect describes; this
//! module never touches storage, so calling it twice with the same inputs
//! yields the same effect both times.

use serde::{Deserialize, Serialize};

use super::{Budget, SurplusStrategy};
use crate::error::{EngineError, Result};
use crate::money;

/// Where a delegated surplus is routed by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelegationTarget {
    Savings,
    Investment,
}

/// A single allocation transaction produced by redistribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationTransaction {
    /// Category receiving the amount
    pub category_id: String,

    /// Amount allocated to the category
    pub amount: f64,
}

/// The computed effect of applying a surplus strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "lowercase")]
pub enum AllocationEffect {
    /// Nothing to persist: no surplus, or the strategy leaves it alone
    NoChange,

    /// Next period's budget for this category becomes `new_amount`
    Rollover { category: String, new_amount: f64 },

    /// The caller routes `amount` into a savings or investment record
    Delegated {
        destination: DelegationTarget,
        amount: f64,
    },

    /// One transaction per redistribution target; amounts sum to the surplus
    Redistributed {
        transactions: Vec<AllocationTransaction>,
    },
}

/// Compute the effect of a budget period's surplus under the given strategy.
///
/// `surplus = max(0, budget.amount - spent)`. For rollover, `next_period_amount`
/// is the successor budget's existing amount; when the caller has not created
/// one yet, the current amount is used as the base.
pub fn allocate(
    budget: &Budget,
    spent: f64,
    next_period_amount: Option<f64>,
    strategy: &SurplusStrategy,
) -> Result<AllocationEffect> {
    if budget.amount <= 0.0 {
        return Err(EngineError::invalid(format!(
            "budget amount must be positive, got {}",
            budget.amount
        )));
    }
    if spent < 0.0 {
        return Err(EngineError::invalid(format!(
            "spent amount must be non-negative, got {spent}"
        )));
    }

    // Malformed targets are rejected even when there is no surplus to split
    if let SurplusStrategy::Redistribute { targets } = strategy {
        if !money::validate_redistribution_targets(targets) {
            return Err(EngineError::invalid(
                "redistribution targets must be non-empty, distinct, with percentages in (0, 100] summing to 100",
            ));
        }
    }

    let surplus = (budget.amount - spent).max(0.0);
    if surplus == 0.0 {
        return Ok(AllocationEffect::NoChange);
    }

    let effect = match strategy {
        SurplusStrategy::Rollover => AllocationEffect::Rollover {
            category: budget.category.clone(),
            new_amount: next_period_amount.unwrap_or(budget.amount) + surplus,
        },
        SurplusStrategy::Ignore => AllocationEffect::NoChange,
        SurplusStrategy::Save => AllocationEffect::Delegated {
            destination: DelegationTarget::Savings,
            amount: surplus,
        },
        SurplusStrategy::Invest => AllocationEffect::Delegated {
            destination: DelegationTarget::Investment,
            amount: surplus,
        },
        SurplusStrategy::Redistribute { targets } => {
            // Validated sums may sit up to PERCENT_SUM_EPSILON away from 100;
            // dividing by the actual sum keeps the amounts adding up to the
            // surplus instead of leaking the drift
            let total_pct: f64 = targets.iter().map(|t| t.percentage).sum();
            let transactions = targets
                .iter()
                .map(|t| AllocationTransaction {
                    category_id: t.category_id.clone(),
                    amount: surplus * (t.percentage / total_pct),
                })
                .collect();
            AllocationEffect::Redistributed { transactions }
        }
    };

    Ok(effect)
}
