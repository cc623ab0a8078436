//! Sweep extra monthly payments for one strategy
//!
//! Runs the projection for every extra payment from $0 to --max-extra in
//! --step increments and writes one summary row per amount.

use anyhow::{Context, Result};
use clap::Parser;
use debt_payoff::debt::{load_debt_file, DEFAULT_DEBTS_PATH};
use debt_payoff::scenario::extra_payment_steps;
use debt_payoff::{Cents, ScenarioRunner, Strategy};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "extra_payment_sweep", about = "Compare payoff outcomes across extra payments")]
struct Args {
    /// Debt list (.csv) or saved debt book (.json)
    #[arg(long, env = "DEBT_PAYOFF_FILE", default_value = DEFAULT_DEBTS_PATH)]
    debts: PathBuf,

    #[arg(long, env = "DEBT_PAYOFF_STRATEGY", value_enum, default_value_t = Strategy::Avalanche)]
    strategy: Strategy,

    /// Largest extra payment in dollars
    #[arg(long, default_value_t = 500.0)]
    max_extra: f64,

    /// Increment between extra payments in dollars
    #[arg(long, default_value_t = 25.0)]
    step: f64,

    #[arg(long, default_value = "extra_payment_sweep.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let book = load_debt_file(&args.debts)
        .with_context(|| format!("Failed to load debts from {}", args.debts.display()))?;
    println!("Loaded {} debts in {:?}", book.list.len(), start.elapsed());

    let extras = extra_payment_steps(
        Cents::from_dollars(args.max_extra),
        Cents::from_dollars(args.step),
    );
    let runner = ScenarioRunner::new(book.list);
    let reports = runner
        .sweep_extra_payments(args.strategy, &extras)
        .context("Sweep failed")?;

    let mut file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    writeln!(file, "ExtraPayment,PayoffMonths,TotalInterest,InterestSaved,TimeSaved")?;

    for report in &reports {
        writeln!(
            file,
            "{:.2},{},{:.2},{:.2},{}",
            report.extra_payment.dollars(),
            report.summary.payoff_time_months,
            report.summary.total_interest.dollars(),
            report.savings.interest_saved.dollars(),
            report.savings.time_saved,
        )?;
    }

    println!(
        "Ran {} {} scenarios over {} debts in {:?}, written to {}",
        reports.len(),
        args.strategy,
        runner.debts().len(),
        start.elapsed(),
        args.output.display()
    );

    Ok(())
}
