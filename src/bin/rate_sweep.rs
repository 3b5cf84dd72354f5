//! Sweep savings projections across a grid of annual return rates
//!
//! Emits a JSON response for API or chart integration. Accepts config via
//! environment variables:
//!   SWEEP_RATES   comma-separated annual rates in percent (default 2..=10)
//!   INITIAL       starting balance (default 0)
//!   CONTRIBUTION  monthly contribution (default 500)
//!   YEARS         projection horizon in years (default 20)
//!   TARGET        optional balance goal

use serde::Serialize;
use std::env;
use std::time::Instant;

use finance_engine::savings::{SavingsProjectionParams, SavingsStrategy};
use finance_engine::scenario::ScenarioRunner;

#[derive(Serialize)]
struct SweepResponse {
    initial_amount: f64,
    monthly_contribution: f64,
    years: u32,
    target_amount: Option<f64>,
    points: Vec<SweepPoint>,
    execution_time_ms: u64,
}

#[derive(Serialize)]
struct SweepPoint {
    annual_rate_pct: f64,
    future_value: f64,
    total_returns: f64,
    years_to_target: Option<u32>,
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let start = Instant::now();

    let rates: Vec<f64> = match env::var("SWEEP_RATES") {
        Ok(raw) => raw
            .split(',')
            .map(|r| r.trim().parse::<f64>())
            .collect::<Result<_, _>>()?,
        Err(_) => (2..=10).map(f64::from).collect(),
    };

    let base = SavingsProjectionParams {
        initial_amount: env_f64("INITIAL", 0.0),
        monthly_contribution: env_f64("CONTRIBUTION", 500.0),
        years: env_f64("YEARS", 20.0) as u32,
        strategy: SavingsStrategy::Moderate,
        target_amount: env::var("TARGET").ok().and_then(|v| v.parse().ok()),
    };

    log::info!("sweeping {} rates over {} years", rates.len(), base.years);

    let results = ScenarioRunner::new().savings_rate_sweep(&base, &rates)?;

    let points = rates
        .iter()
        .zip(&results)
        .map(|(&annual_rate_pct, r)| SweepPoint {
            annual_rate_pct,
            future_value: r.future_value,
            total_returns: r.total_returns,
            years_to_target: r.years_to_target,
        })
        .collect();

    let response = SweepResponse {
        initial_amount: base.initial_amount,
        monthly_contribution: base.monthly_contribution,
        years: base.years,
        target_amount: base.target_amount,
        points,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
