//! Finance Engine CLI
//!
//! Thin driver around the projection and allocation engines: loads records,
//! invokes the relevant engine, prints raw results as a table or JSON.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use finance_engine::budget::{allocate, Budget, RedistributionTarget, SurplusStrategy};
use finance_engine::debt::{loader, DebtProjectionConfig, DebtProjectionEngine, PayoffStrategy};
use finance_engine::money::round_currency;
use finance_engine::savings::{SavingsProjectionEngine, SavingsProjectionParams, SavingsStrategy};
use finance_engine::scenario::ScenarioRunner;

#[derive(Parser)]
#[command(name = "finance-engine", version, about = "Debt, savings, and budget projections")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate paying off a debt portfolio loaded from CSV
    Debt {
        /// CSV file with columns Id,Name,Balance,AnnualRatePct,MinimumPayment,DueDate,Direction
        #[arg(long)]
        debts: PathBuf,

        /// Extra payment applied each month on top of minimums
        #[arg(long, default_value_t = 0.0)]
        extra: f64,

        /// avalanche, snowball, or combined
        #[arg(long, default_value = "avalanche")]
        strategy: PayoffStrategy,

        /// Run all three strategies and print them side by side
        #[arg(long)]
        compare: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Project savings growth under a return assumption
    Savings {
        #[arg(long, default_value_t = 0.0)]
        initial: f64,

        #[arg(long, default_value_t = 0.0)]
        contribution: f64,

        #[arg(long)]
        years: u32,

        /// conservative, moderate, aggressive, or a numeric annual rate
        #[arg(long, default_value = "moderate")]
        strategy: SavingsStrategy,

        /// Balance goal for time-to-target reporting
        #[arg(long)]
        target: Option<f64>,

        #[arg(long)]
        json: bool,
    },

    /// Compute the effect of a budget period's surplus
    Allocate {
        /// Budget category name
        #[arg(long, default_value = "budget")]
        category: String,

        /// Allocated amount for the period
        #[arg(long)]
        amount: f64,

        /// Amount spent during the period
        #[arg(long)]
        spent: f64,

        /// rollover, ignore, save, invest, or redistribute
        #[arg(long)]
        strategy: String,

        /// Redistribution share as "category:percentage"; repeatable
        #[arg(long = "target")]
        targets: Vec<String>,

        /// Existing next-period budget amount, if one was already created
        #[arg(long)]
        next_amount: Option<f64>,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Debt {
            debts,
            extra,
            strategy,
            compare,
            json,
        } => run_debt(&debts, extra, strategy, compare, json),
        Command::Savings {
            initial,
            contribution,
            years,
            strategy,
            target,
            json,
        } => run_savings(initial, contribution, years, strategy, target, json),
        Command::Allocate {
            category,
            amount,
            spent,
            strategy,
            targets,
            next_amount,
            json,
        } => run_allocate(&category, amount, spent, &strategy, &targets, next_amount, json),
    }
}

fn run_debt(
    path: &PathBuf,
    extra: f64,
    strategy: PayoffStrategy,
    compare: bool,
    json: bool,
) -> anyhow::Result<()> {
    let debts = loader::load_debts(path)?;
    log::info!("loaded {} debt records from {}", debts.len(), path.display());

    let results = if compare {
        ScenarioRunner::new().compare_payoff_strategies(&debts, extra)?
    } else {
        vec![DebtProjectionEngine::new(DebtProjectionConfig::new(strategy, extra)).project(&debts)?]
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!(
        "{:>10} {:>7} {:>12} {:>12} {:>12} {:>12}",
        "Strategy", "Months", "Paid", "Interest", "Monthly", "Payoff"
    );
    println!("{}", "-".repeat(70));
    for r in &results {
        println!(
            "{:>10} {:>7} {:>12.2} {:>12.2} {:>12.2} {:>12}",
            r.strategy.as_str(),
            r.months_to_pay_off,
            round_currency(r.total_paid),
            round_currency(r.total_interest),
            round_currency(r.monthly_payment_total),
            r.payoff_date,
        );
    }
    Ok(())
}

fn run_savings(
    initial: f64,
    contribution: f64,
    years: u32,
    strategy: SavingsStrategy,
    target: Option<f64>,
    json: bool,
) -> anyhow::Result<()> {
    let params = SavingsProjectionParams {
        initial_amount: initial,
        monthly_contribution: contribution,
        years,
        strategy,
        target_amount: target,
    };
    let result = SavingsProjectionEngine::new(params).project()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{:>5} {:>14} {:>14} {:>14}",
        "Year", "Balance", "Contributed", "Returns"
    );
    println!("{}", "-".repeat(50));
    for sample in &result.yearly_samples {
        println!(
            "{:>5} {:>14.2} {:>14.2} {:>14.2}",
            sample.year,
            round_currency(sample.balance),
            round_currency(sample.contributions),
            round_currency(sample.returns),
        );
    }

    println!("\nSummary:");
    println!("  Future Value: {:.2}", result.future_value);
    println!("  Contributions: {:.2}", result.total_contributions);
    println!("  Returns: {:.2}", result.total_returns);
    match result.years_to_target {
        Some(y) => println!("  Years To Target: {y}"),
        None if target.is_some() => println!("  Years To Target: not reached"),
        None => {}
    }
    Ok(())
}

fn run_allocate(
    category: &str,
    amount: f64,
    spent: f64,
    strategy: &str,
    raw_targets: &[String],
    next_amount: Option<f64>,
    json: bool,
) -> anyhow::Result<()> {
    let strategy = match strategy {
        "rollover" => SurplusStrategy::Rollover,
        "ignore" => SurplusStrategy::Ignore,
        "save" => SurplusStrategy::Save,
        "invest" => SurplusStrategy::Invest,
        "redistribute" => SurplusStrategy::Redistribute {
            targets: raw_targets
                .iter()
                .map(|raw| parse_target(raw))
                .collect::<anyhow::Result<_>>()?,
        },
        other => bail!("unknown surplus strategy '{other}'"),
    };

    let budget = Budget::new(category, amount);
    let effect = allocate(&budget, spent, next_amount, &strategy)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&effect)?);
    } else {
        println!("{effect:#?}");
    }
    Ok(())
}

/// Parse "category:percentage" into a redistribution target
fn parse_target(raw: &str) -> anyhow::Result<RedistributionTarget> {
    let (category, pct) = raw
        .split_once(':')
        .with_context(|| format!("target '{raw}' is not category:percentage"))?;
    let percentage: f64 = pct
        .parse()
        .with_context(|| format!("bad percentage in target '{raw}'"))?;
    Ok(RedistributionTarget::new(category, percentage))
}
