//! Debt payoff simulation: records, strategies, and the projection engine

mod data;
mod engine;
pub mod loader;
mod projection;
mod state;
mod strategy;

pub use data::{Debt, DebtDirection};
pub use engine::{DebtProjectionConfig, DebtProjectionEngine, MAX_PROJECTION_MONTHS};
pub use projection::{DebtProjectionResult, ScheduleRow};
pub use strategy::PayoffStrategy;
