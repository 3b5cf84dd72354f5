//! Core simulation loop for monthly debt amortization

use chrono::{Local, Months, NaiveDate};

use super::data::Debt;
use super::projection::{DebtProjectionResult, ScheduleRow};
use super::state::DebtState;
use super::strategy::PayoffStrategy;
use crate::error::{EngineError, Result};

/// Hard cap on simulated months (50 years). Guarantees termination; hitting
/// it with open balances means the portfolio is economically unpayable at the
/// configured payment level.
pub const MAX_PROJECTION_MONTHS: u32 = 600;

/// Configuration for a payoff simulation run
#[derive(Debug, Clone)]
pub struct DebtProjectionConfig {
    /// How the extra payment is targeted
    pub strategy: PayoffStrategy,

    /// Extra amount applied each month on top of minimums, non-negative
    pub extra_payment: f64,

    /// Anchor for the payoff date. Captured once up front; the simulation
    /// loop itself never consults the wall clock.
    pub as_of: NaiveDate,

    /// Whether to record the per-month schedule
    pub detailed_output: bool,
}

impl DebtProjectionConfig {
    /// Config anchored at today's date, without the per-month schedule
    pub fn new(strategy: PayoffStrategy, extra_payment: f64) -> Self {
        Self {
            strategy,
            extra_payment,
            as_of: Local::now().date_naive(),
            detailed_output: false,
        }
    }

    pub fn anchored(mut self, as_of: NaiveDate) -> Self {
        self.as_of = as_of;
        self
    }

    pub fn with_schedule(mut self) -> Self {
        self.detailed_output = true;
        self
    }
}

/// Month-by-month payoff simulator for a debt portfolio
///
/// Pure: holds only its config, and identical inputs always produce identical
/// results.
pub struct DebtProjectionEngine {
    config: DebtProjectionConfig,
}

impl DebtProjectionEngine {
    pub fn new(config: DebtProjectionConfig) -> Self {
        Self { config }
    }

    /// Simulate paying off `debts` under the configured strategy.
    ///
    /// Each month every open debt accrues interest and receives its own
    /// minimum payment, then the entire extra payment goes to the single
    /// highest-ranked open debt. Incoming (receivable) records are skipped;
    /// they have no payment schedule.
    pub fn project(&self, debts: &[Debt]) -> Result<DebtProjectionResult> {
        if self.config.extra_payment < 0.0 {
            return Err(EngineError::invalid(format!(
                "extra payment must be non-negative, got {}",
                self.config.extra_payment
            )));
        }
        for debt in debts {
            debt.validate()?;
        }

        let mut states: Vec<DebtState> = debts
            .iter()
            .filter(|d| d.is_outgoing() && d.current_balance > 0.0)
            .map(DebtState::from_debt)
            .collect();

        if states.is_empty() {
            return Ok(DebtProjectionResult::zero(
                self.config.strategy,
                self.config.as_of,
            ));
        }

        let monthly_payment_total: f64 = states.iter().map(|s| s.minimum_payment).sum::<f64>()
            + self.config.extra_payment;

        let mut total_paid = 0.0;
        let mut total_interest = 0.0;
        let mut months = 0;
        let mut schedule = Vec::new();

        for month in 1..=MAX_PROJECTION_MONTHS {
            let mut month_interest = 0.0;
            let mut month_minimums = 0.0;

            for state in states.iter_mut().filter(|s| s.is_open()) {
                let outcome = state.accrue_and_pay_minimum();
                month_interest += outcome.interest;
                month_minimums += outcome.paid;
            }

            // The whole extra payment lands on one debt; overshoot does not
            // reallocate within the month
            let mut extra_applied = 0.0;
            if self.config.extra_payment > 0.0 {
                // Positions here index `states`, which preserves input order
                let open: Vec<(usize, f64, f64)> = states
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.is_open())
                    .map(|(pos, s)| (pos, s.balance, s.annual_rate_pct))
                    .collect();
                if !open.is_empty() {
                    let (target_pos, _, _) = open[self.config.strategy.select_target(&open)];
                    extra_applied = states[target_pos].apply_extra(self.config.extra_payment);
                }
            }

            total_interest += month_interest;
            total_paid += month_minimums + extra_applied;
            months = month;

            let remaining: f64 = states.iter().map(|s| s.balance).sum();
            if self.config.detailed_output {
                schedule.push(ScheduleRow {
                    month,
                    open_debts: states.iter().filter(|s| s.is_open()).count() as u32,
                    interest_accrued: month_interest,
                    minimums_paid: month_minimums,
                    extra_applied,
                    total_balance: remaining,
                });
            }

            if states.iter().all(|s| !s.is_open()) {
                log::debug!(
                    "{} payoff closed after {} months, {:.2} interest",
                    self.config.strategy,
                    months,
                    total_interest
                );
                break;
            }

            if month == MAX_PROJECTION_MONTHS {
                log::warn!(
                    "payoff simulation capped at {} months with {:.2} outstanding",
                    MAX_PROJECTION_MONTHS,
                    remaining
                );
                return Err(EngineError::UnpayableDebtSet {
                    cap_months: MAX_PROJECTION_MONTHS,
                    remaining_balance: remaining,
                });
            }
        }

        let payoff_date = self
            .config
            .as_of
            .checked_add_months(Months::new(months))
            .ok_or_else(|| EngineError::invalid("payoff date out of calendar range"))?;

        Ok(DebtProjectionResult {
            strategy: self.config.strategy,
            months_to_pay_off: months,
            total_paid,
            total_interest,
            monthly_payment_total,
            payoff_date,
            schedule,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn engine(strategy: PayoffStrategy, extra: f64) -> DebtProjectionEngine {
        DebtProjectionEngine::new(DebtProjectionConfig::new(strategy, extra).anchored(anchor()))
    }

    fn sample_portfolio() -> Vec<Debt> {
        vec![
            Debt::outgoing("d1", "Visa", 3_000.0, 19.9, 90.0),
            Debt::outgoing("d2", "Car loan", 11_000.0, 6.5, 320.0),
            Debt::outgoing("d3", "Personal loan", 900.0, 11.0, 50.0),
        ]
    }

    #[test]
    fn test_empty_portfolio_yields_zero_projection() {
        let result = engine(PayoffStrategy::Avalanche, 100.0).project(&[]).unwrap();

        assert_eq!(result.months_to_pay_off, 0);
        assert_relative_eq!(result.total_paid, 0.0);
        assert_relative_eq!(result.total_interest, 0.0);
        assert_eq!(result.payoff_date, anchor());
    }

    #[test]
    fn test_negative_balance_rejected() {
        let debts = vec![Debt::outgoing("d1", "Visa", -10.0, 19.9, 90.0)];
        assert!(matches!(
            engine(PayoffStrategy::Avalanche, 0.0).project(&debts),
            Err(EngineError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_negative_extra_payment_rejected() {
        assert!(engine(PayoffStrategy::Avalanche, -1.0)
            .project(&sample_portfolio())
            .is_err());
    }

    #[test]
    fn test_single_debt_payoff_month_count() {
        // 1000 at 12% annual, 100/month minimum: closes in 11 months
        let debts = vec![Debt::outgoing("d1", "Card", 1_000.0, 12.0, 100.0)];
        let result = engine(PayoffStrategy::Avalanche, 0.0).project(&debts).unwrap();

        assert_eq!(result.months_to_pay_off, 11);
        assert!(result.total_interest > 0.0);
        // Everything paid equals principal plus interest
        assert_relative_eq!(
            result.total_paid,
            1_000.0 + result.total_interest,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_payoff_date_uses_calendar_months() {
        let debts = vec![Debt::outgoing("d1", "Card", 290.0, 12.0, 100.0)];
        let result = engine(PayoffStrategy::Avalanche, 0.0).project(&debts).unwrap();

        assert_eq!(result.months_to_pay_off, 3);
        assert_eq!(
            result.payoff_date,
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap()
        );
    }

    #[test]
    fn test_unpayable_portfolio_is_an_error() {
        // Interest dwarfs the payment; must surface, never a silent 50 years
        let debts = vec![Debt::outgoing("d1", "Loan shark", 100_000.0, 100.0, 1.0)];
        let result = engine(PayoffStrategy::Avalanche, 0.0).project(&debts);

        assert!(matches!(
            result,
            Err(EngineError::UnpayableDebtSet {
                cap_months: MAX_PROJECTION_MONTHS,
                ..
            })
        ));
    }

    #[test]
    fn test_strategies_identical_at_zero_extra() {
        let debts = sample_portfolio();
        let avalanche = engine(PayoffStrategy::Avalanche, 0.0).project(&debts).unwrap();
        let snowball = engine(PayoffStrategy::Snowball, 0.0).project(&debts).unwrap();
        let combined = engine(PayoffStrategy::Combined, 0.0).project(&debts).unwrap();

        assert_eq!(avalanche.months_to_pay_off, snowball.months_to_pay_off);
        assert_eq!(avalanche.months_to_pay_off, combined.months_to_pay_off);
        assert_relative_eq!(avalanche.total_interest, snowball.total_interest);
        assert_relative_eq!(avalanche.total_interest, combined.total_interest);
    }

    #[test]
    fn test_more_extra_never_slower_or_costlier() {
        let debts = sample_portfolio();
        let mut previous: Option<DebtProjectionResult> = None;

        for extra in [0.0, 50.0, 150.0, 400.0] {
            let result = engine(PayoffStrategy::Avalanche, extra).project(&debts).unwrap();
            if let Some(prev) = previous {
                assert!(result.months_to_pay_off <= prev.months_to_pay_off);
                assert!(result.total_interest <= prev.total_interest + 1e-9);
            }
            previous = Some(result);
        }
    }

    #[test]
    fn test_avalanche_interest_at_most_snowball() {
        let debts = sample_portfolio();
        let avalanche = engine(PayoffStrategy::Avalanche, 200.0).project(&debts).unwrap();
        let snowball = engine(PayoffStrategy::Snowball, 200.0).project(&debts).unwrap();

        assert!(avalanche.total_interest <= snowball.total_interest + 1e-9);
    }

    #[test]
    fn test_repeat_runs_are_identical() {
        let debts = sample_portfolio();
        let first = engine(PayoffStrategy::Combined, 175.0).project(&debts).unwrap();
        let second = engine(PayoffStrategy::Combined, 175.0).project(&debts).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_incoming_debts_are_skipped() {
        let mut debts = sample_portfolio();
        debts.push(Debt {
            id: "d4".to_string(),
            name: "Loan to Sam".to_string(),
            current_balance: 5_000.0,
            annual_rate_pct: None,
            minimum_payment: 0.0,
            due_date: None,
            direction: crate::debt::DebtDirection::Incoming,
        });

        let with = engine(PayoffStrategy::Avalanche, 100.0).project(&debts).unwrap();
        let without = engine(PayoffStrategy::Avalanche, 100.0)
            .project(&debts[..3])
            .unwrap();

        assert_eq!(with.months_to_pay_off, without.months_to_pay_off);
        assert_relative_eq!(with.total_interest, without.total_interest);
    }

    #[test]
    fn test_detailed_schedule_balances_decrease() {
        let debts = sample_portfolio();
        let config = DebtProjectionConfig::new(PayoffStrategy::Avalanche, 100.0)
            .anchored(anchor())
            .with_schedule();
        let result = DebtProjectionEngine::new(config).project(&debts).unwrap();

        assert_eq!(result.schedule.len() as u32, result.months_to_pay_off);
        for pair in result.schedule.windows(2) {
            assert!(pair[1].total_balance <= pair[0].total_balance);
        }
        assert_relative_eq!(
            result.schedule.last().unwrap().total_balance,
            0.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_monthly_payment_total_reported() {
        let result = engine(PayoffStrategy::Avalanche, 150.0)
            .project(&sample_portfolio())
            .unwrap();
        assert_relative_eq!(result.monthly_payment_total, 90.0 + 320.0 + 50.0 + 150.0);
    }
}
