//! Batch runner for simulator UIs
//!
//! Anchors a set of runs on one date, then lets callers compare strategies
//! or sweep a parameter without re-assembling configs. The engines stay
//! single-threaded and pure; parallelism lives only here.

use chrono::{Local, NaiveDate};
use rayon::prelude::*;

use crate::debt::{
    Debt, DebtProjectionConfig, DebtProjectionEngine, DebtProjectionResult, PayoffStrategy,
};
use crate::error::Result;
use crate::savings::{
    SavingsProjectionEngine, SavingsProjectionParams, SavingsProjectionResult, SavingsStrategy,
};

/// Pre-anchored batch runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let results = runner.compare_payoff_strategies(&debts, 200.0)?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Date anchor shared by every run in the batch, so repeated batches on
    /// the same inputs stay byte-identical
    as_of: NaiveDate,
}

impl ScenarioRunner {
    /// Runner anchored at today's date
    pub fn new() -> Self {
        Self {
            as_of: Local::now().date_naive(),
        }
    }

    /// Runner anchored at a fixed date (tests, replays)
    pub fn anchored(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Run all three payoff strategies on one portfolio
    pub fn compare_payoff_strategies(
        &self,
        debts: &[Debt],
        extra_payment: f64,
    ) -> Result<Vec<DebtProjectionResult>> {
        PayoffStrategy::ALL
            .iter()
            .map(|&strategy| {
                let config =
                    DebtProjectionConfig::new(strategy, extra_payment).anchored(self.as_of);
                DebtProjectionEngine::new(config).project(debts)
            })
            .collect()
    }

    /// Sweep the extra-payment amount under one strategy, for payment sliders
    pub fn extra_payment_sweep(
        &self,
        debts: &[Debt],
        strategy: PayoffStrategy,
        amounts: &[f64],
    ) -> Result<Vec<DebtProjectionResult>> {
        amounts
            .par_iter()
            .map(|&extra| {
                let config = DebtProjectionConfig::new(strategy, extra).anchored(self.as_of);
                DebtProjectionEngine::new(config).project(debts)
            })
            .collect()
    }

    /// Sweep the annual return rate for rate sliders, swapping a custom rate
    /// into otherwise fixed params
    pub fn savings_rate_sweep(
        &self,
        base: &SavingsProjectionParams,
        rates_pct: &[f64],
    ) -> Result<Vec<SavingsProjectionResult>> {
        rates_pct
            .par_iter()
            .map(|&annual_rate_pct| {
                let params = SavingsProjectionParams {
                    strategy: SavingsStrategy::Custom { annual_rate_pct },
                    ..base.clone()
                };
                SavingsProjectionEngine::new(params).project()
            })
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> ScenarioRunner {
        ScenarioRunner::anchored(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
    }

    fn debts() -> Vec<Debt> {
        vec![
            Debt::outgoing("d1", "Visa", 2_500.0, 21.0, 80.0),
            Debt::outgoing("d2", "Car loan", 9_000.0, 6.0, 260.0),
        ]
    }

    #[test]
    fn test_compare_covers_all_strategies() {
        let results = runner().compare_payoff_strategies(&debts(), 150.0).unwrap();

        assert_eq!(results.len(), 3);
        let strategies: Vec<_> = results.iter().map(|r| r.strategy).collect();
        assert_eq!(strategies, PayoffStrategy::ALL);
    }

    #[test]
    fn test_extra_payment_sweep_is_monotone() {
        let amounts = [0.0, 100.0, 250.0, 500.0];
        let results = runner()
            .extra_payment_sweep(&debts(), PayoffStrategy::Avalanche, &amounts)
            .unwrap();

        assert_eq!(results.len(), amounts.len());
        for pair in results.windows(2) {
            assert!(pair[1].months_to_pay_off <= pair[0].months_to_pay_off);
        }
    }

    #[test]
    fn test_rate_sweep_orders_future_values() {
        let base = SavingsProjectionParams {
            initial_amount: 1_000.0,
            monthly_contribution: 100.0,
            years: 10,
            strategy: SavingsStrategy::Moderate,
            target_amount: None,
        };

        let results = runner()
            .savings_rate_sweep(&base, &[3.0, 5.0, 7.0])
            .unwrap();

        assert_eq!(results.len(), 3);
        assert!(results[1].future_value > results[0].future_value);
        assert!(results[2].future_value > results[1].future_value);
    }

    #[test]
    fn test_sweep_propagates_invalid_rate() {
        let base = SavingsProjectionParams {
            initial_amount: 0.0,
            monthly_contribution: 100.0,
            years: 5,
            strategy: SavingsStrategy::Moderate,
            target_amount: None,
        };

        assert!(runner().savings_rate_sweep(&base, &[4.0, -1.0]).is_err());
    }
}
