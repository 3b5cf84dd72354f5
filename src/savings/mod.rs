//! Savings growth simulation: return assumptions and the compounding engine

mod engine;
mod growth;
mod strategy;

pub use engine::{SavingsProjectionEngine, SavingsProjectionParams, MAX_PROJECTION_YEARS};
pub use growth::{SavingsProjectionResult, YearlySample};
pub use strategy::SavingsStrategy;
