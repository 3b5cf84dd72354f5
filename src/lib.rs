//! Finance Engine - projection and allocation core for a personal-finance tracker
//!
//! This library provides:
//! - Debt payoff simulation under competing prioritization strategies
//! - Savings growth projection with fixed or custom return assumptions
//! - Budget surplus allocation (rollover, redistribution, delegation)
//! - Multi-scenario batch runs for simulator UIs

pub mod budget;
pub mod debt;
pub mod error;
pub mod money;
pub mod savings;
pub mod scenario;

// Re-export commonly used types
pub use budget::{allocate, AllocationEffect, Budget, RedistributionTarget, SurplusStrategy};
pub use debt::{
    Debt, DebtProjectionConfig, DebtProjectionEngine, DebtProjectionResult, PayoffStrategy,
};
pub use error::{EngineError, Result};
pub use savings::{
    SavingsProjectionEngine, SavingsProjectionParams, SavingsProjectionResult, SavingsStrategy,
};
pub use scenario::ScenarioRunner;
