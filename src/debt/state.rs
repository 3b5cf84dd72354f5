//! Per-debt state tracked through the amortization loop

use super::data::Debt;

/// Mutable simulation state for one outgoing debt
#[derive(Debug, Clone)]
pub(crate) struct DebtState {
    /// Remaining balance at the current point of the simulation
    pub balance: f64,

    /// Monthly decimal rate derived from the debt's annual rate
    pub monthly_rate: f64,

    /// Annual rate in percent, kept for strategy ranking
    pub annual_rate_pct: f64,

    /// Contractual minimum payment per month
    pub minimum_payment: f64,
}

/// Interest accrued and payment applied for one debt in one month
#[derive(Debug, Clone, Copy)]
pub(crate) struct MonthOutcome {
    pub interest: f64,
    pub paid: f64,
}

impl DebtState {
    pub fn from_debt(debt: &Debt) -> Self {
        Self {
            balance: debt.current_balance,
            monthly_rate: debt.monthly_rate(),
            annual_rate_pct: debt.annual_rate_pct.unwrap_or(0.0),
            minimum_payment: debt.minimum_payment,
        }
    }

    pub fn is_open(&self) -> bool {
        self.balance > 0.0
    }

    /// Accrue one month of interest, then apply the minimum payment.
    ///
    /// Interest compounds before the payment lands; the payment is clamped so
    /// the balance floors at zero instead of going negative.
    pub fn accrue_and_pay_minimum(&mut self) -> MonthOutcome {
        let interest = self.balance * self.monthly_rate;
        self.balance += interest;

        let paid = self.minimum_payment.min(self.balance);
        self.balance -= paid;

        MonthOutcome { interest, paid }
    }

    /// Apply as much of `extra` as the balance absorbs; returns the amount
    /// actually applied. Overshoot is forfeited for the month, not carried.
    pub fn apply_extra(&mut self, extra: f64) -> f64 {
        let applied = extra.min(self.balance);
        self.balance -= applied;
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn state(balance: f64, annual_rate_pct: f64, minimum: f64) -> DebtState {
        let debt = Debt::outgoing("d", "d", balance, annual_rate_pct, minimum);
        DebtState::from_debt(&debt)
    }

    #[test]
    fn test_interest_accrues_before_payment() {
        let mut s = state(1_200.0, 12.0, 100.0);
        let outcome = s.accrue_and_pay_minimum();

        // 1% monthly on 1200, then the 100 minimum
        assert_relative_eq!(outcome.interest, 12.0, epsilon = 1e-9);
        assert_relative_eq!(outcome.paid, 100.0);
        assert_relative_eq!(s.balance, 1_112.0, epsilon = 1e-9);
    }

    #[test]
    fn test_final_payment_floors_at_zero() {
        let mut s = state(50.0, 12.0, 100.0);
        let outcome = s.accrue_and_pay_minimum();

        assert_relative_eq!(outcome.paid, 50.5, epsilon = 1e-9);
        assert_relative_eq!(s.balance, 0.0);
        assert!(!s.is_open());
    }

    #[test]
    fn test_extra_payment_clamps_to_balance() {
        let mut s = state(80.0, 12.0, 10.0);
        let applied = s.apply_extra(200.0);

        assert_relative_eq!(applied, 80.0);
        assert_relative_eq!(s.balance, 0.0);
    }
}
