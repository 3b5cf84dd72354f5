//! Debt records as supplied by the storage layer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Direction of a debt relative to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtDirection {
    /// A liability: the user owes this money and pays it down monthly
    Outgoing,
    /// A receivable: money owed to the user; carries no payment schedule
    Incoming,
}

/// A single debt record
///
/// Created and edited outside this crate; the projection engine consumes it
/// read-only. Outgoing debts must carry a positive interest rate and minimum
/// payment; incoming debts need neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    /// Stable identifier assigned by the storage layer
    pub id: String,

    /// Display name ("Car loan", "Visa")
    pub name: String,

    /// Outstanding balance, non-negative
    pub current_balance: f64,

    /// Nominal annual interest rate in percent; required for outgoing debts
    pub annual_rate_pct: Option<f64>,

    /// Contractual minimum payment per month
    pub minimum_payment: f64,

    /// Next due date, informational only
    pub due_date: Option<NaiveDate>,

    /// Whether the user owes (outgoing) or is owed (incoming)
    pub direction: DebtDirection,
}

impl Debt {
    /// Convenience constructor for an outgoing liability
    pub fn outgoing(
        id: impl Into<String>,
        name: impl Into<String>,
        current_balance: f64,
        annual_rate_pct: f64,
        minimum_payment: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_balance,
            annual_rate_pct: Some(annual_rate_pct),
            minimum_payment,
            due_date: None,
            direction: DebtDirection::Outgoing,
        }
    }

    pub fn is_outgoing(&self) -> bool {
        self.direction == DebtDirection::Outgoing
    }

    /// Monthly decimal rate, zero when no rate is recorded
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct.unwrap_or(0.0) / 100.0 / 12.0
    }

    /// Reject records the simulator cannot price
    pub(crate) fn validate(&self) -> Result<()> {
        if self.current_balance < 0.0 {
            return Err(EngineError::invalid(format!(
                "debt '{}' has negative balance {}",
                self.name, self.current_balance
            )));
        }
        if self.minimum_payment < 0.0 {
            return Err(EngineError::invalid(format!(
                "debt '{}' has negative minimum payment {}",
                self.name, self.minimum_payment
            )));
        }
        if let Some(rate) = self.annual_rate_pct {
            if rate < 0.0 {
                return Err(EngineError::invalid(format!(
                    "debt '{}' has negative interest rate {rate}",
                    self.name
                )));
            }
        }
        if self.is_outgoing() {
            match self.annual_rate_pct {
                None => {
                    return Err(EngineError::invalid(format!(
                        "outgoing debt '{}' is missing an interest rate",
                        self.name
                    )))
                }
                Some(rate) if rate <= 0.0 => {
                    return Err(EngineError::invalid(format!(
                        "outgoing debt '{}' requires a positive interest rate, got {rate}",
                        self.name
                    )))
                }
                Some(_) => {}
            }
            if self.current_balance > 0.0 && self.minimum_payment <= 0.0 {
                return Err(EngineError::invalid(format!(
                    "outgoing debt '{}' requires a positive minimum payment",
                    self.name
                )));
            }
        }
        Ok(())
    }
}
