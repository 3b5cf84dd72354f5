//! Core compounding loop for savings growth projections

use serde::{Deserialize, Serialize};

use super::growth::{SavingsProjectionResult, YearlySample};
use super::strategy::SavingsStrategy;
use crate::error::{EngineError, Result};
use crate::money;

/// Longest supported projection horizon in years
pub const MAX_PROJECTION_YEARS: u32 = 50;

/// Inputs for a savings growth simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsProjectionParams {
    /// Starting balance, non-negative
    pub initial_amount: f64,

    /// Contribution added at the end of every month, non-negative
    pub monthly_contribution: f64,

    /// Projection horizon, 1 to [`MAX_PROJECTION_YEARS`]
    pub years: u32,

    /// Return assumption
    pub strategy: SavingsStrategy,

    /// Optional balance goal for time-to-target reporting
    pub target_amount: Option<f64>,
}

impl SavingsProjectionParams {
    fn validate(&self) -> Result<()> {
        if self.initial_amount < 0.0 {
            return Err(EngineError::invalid(format!(
                "initial amount must be non-negative, got {}",
                self.initial_amount
            )));
        }
        if self.monthly_contribution < 0.0 {
            return Err(EngineError::invalid(format!(
                "monthly contribution must be non-negative, got {}",
                self.monthly_contribution
            )));
        }
        if self.years == 0 || self.years > MAX_PROJECTION_YEARS {
            return Err(EngineError::invalid(format!(
                "projection horizon must be 1-{MAX_PROJECTION_YEARS} years, got {}",
                self.years
            )));
        }
        if let Some(target) = self.target_amount {
            if target < 0.0 {
                return Err(EngineError::invalid(format!(
                    "target amount must be non-negative, got {target}"
                )));
            }
        }
        Ok(())
    }
}

/// Month-by-month compounding simulator
///
/// Pure: holds only its params; identical inputs produce identical results.
pub struct SavingsProjectionEngine {
    params: SavingsProjectionParams,
}

impl SavingsProjectionEngine {
    pub fn new(params: SavingsProjectionParams) -> Self {
        Self { params }
    }

    /// Compound the balance monthly over the horizon.
    ///
    /// Each month interest lands before the contribution. A sample is taken
    /// at every 12-month boundary; the target check runs only on those
    /// samples, and the first crossing wins.
    pub fn project(&self) -> Result<SavingsProjectionResult> {
        self.params.validate()?;
        // Rejects a negative custom rate
        let monthly_rate = money::monthly_rate_from_annual(self.params.strategy.annual_rate_pct())?;

        let mut balance = self.params.initial_amount;
        let mut contributions = self.params.initial_amount;
        let mut yearly_samples = Vec::with_capacity(self.params.years as usize);

        let mut years_to_target = match self.params.target_amount {
            Some(target) if balance >= target => Some(0),
            _ => None,
        };

        for month in 1..=self.params.years * 12 {
            balance += balance * monthly_rate;
            balance += self.params.monthly_contribution;
            contributions += self.params.monthly_contribution;

            if month % 12 == 0 {
                let year = month / 12;
                yearly_samples.push(YearlySample {
                    year,
                    balance,
                    contributions,
                    returns: balance - contributions,
                });

                if years_to_target.is_none() {
                    if let Some(target) = self.params.target_amount {
                        if balance >= target {
                            years_to_target = Some(year);
                        }
                    }
                }
            }
        }

        log::debug!(
            "savings projection ({}) over {} years: {:.2} -> {:.2}",
            self.params.strategy,
            self.params.years,
            self.params.initial_amount,
            balance
        );

        Ok(SavingsProjectionResult {
            future_value: balance,
            total_contributions: contributions,
            total_returns: balance - contributions,
            years_to_target,
            yearly_samples,
        })
    }
}
