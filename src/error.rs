//! Error types shared by the projection and allocation engines

use thiserror::Error;

/// Crate-wide result alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the projection and allocation engines
///
/// All engine failures are synchronous and returned to the immediate caller.
/// Bad input is rejected up front as [`EngineError::InvalidParameter`] before
/// any simulation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Input violated a constraint (negative amount, out-of-range horizon,
    /// missing required interest rate, malformed redistribution targets)
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The debt simulation reached its iteration cap with balances still
    /// open: interest accrual exceeds total payment capacity. Surfaced
    /// distinctly so callers never mistake the cap for a real payoff date.
    #[error("debts not payable within {cap_months} months: {remaining_balance:.2} still outstanding")]
    UnpayableDebtSet {
        cap_months: u32,
        remaining_balance: f64,
    },
}

impl EngineError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        EngineError::InvalidParameter(msg.into())
    }
}
