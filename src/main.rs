//! Debt Payoff CLI
//!
//! Loads a debt list, runs the payoff projection and prints the plan

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use debt_payoff::debt::{load_debt_file, DebtRepository, InMemoryDebtRepository, DEFAULT_DEBTS_PATH};
use debt_payoff::projection::{progress_percent, write_plans_csv};
use debt_payoff::{Cents, PayoffConfig, PayoffEngine, ProjectionReport, Strategy};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "debt-payoff", version, about = "Project debt payoff under avalanche or snowball")]
struct Cli {
    /// Debt list (.csv) or saved debt book (.json)
    #[arg(long, env = "DEBT_PAYOFF_FILE", default_value = DEFAULT_DEBTS_PATH)]
    debts: PathBuf,

    /// Payoff ordering; defaults to the book's saved strategy
    #[arg(long, env = "DEBT_PAYOFF_STRATEGY", value_enum)]
    strategy: Option<Strategy>,

    /// Extra monthly payment in dollars; defaults to the book's saved amount
    #[arg(long, env = "DEBT_PAYOFF_EXTRA")]
    extra: Option<f64>,

    /// First payment date for the debt-free date (defaults to today)
    #[arg(long, env = "DEBT_PAYOFF_START_DATE")]
    start_date: Option<NaiveDate>,

    /// Print the full report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Also write the plan rows to this CSV file
    #[arg(long, env = "DEBT_PAYOFF_OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let book = load_debt_file(&cli.debts)
        .with_context(|| format!("Failed to load debts from {}", cli.debts.display()))?;

    let extra_payment = match cli.extra {
        Some(dollars) => Cents::from_dollars(dollars),
        None => book.extra_payment,
    };
    let config = PayoffConfig {
        strategy: cli.strategy.unwrap_or(book.strategy),
        extra_payment,
    };

    let repository = InMemoryDebtRepository::with_debts(book.list);
    let debts = repository.list();

    let engine = PayoffEngine::new(config);
    let report = engine
        .report(&debts)
        .context("Unable to compute a payoff plan")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let start = cli.start_date.unwrap_or_else(|| Local::now().date_naive());
        print_report(&report, start);
    }

    if let Some(path) = &cli.output {
        let file = File::create(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        write_plans_csv(BufWriter::new(file), &report.plans)
            .with_context(|| format!("Unable to write {}", path.display()))?;
        if !cli.json {
            println!("\nPlan written to: {}", path.display());
        }
    }

    Ok(())
}

fn print_report(report: &ProjectionReport, start: NaiveDate) {
    let summary = &report.summary;

    println!("Debt Payoff Plan");
    println!("================\n");
    println!("Strategy:      {}", report.strategy);
    println!("Extra payment: {}/month", report.extra_payment);
    println!();

    if report.plans.is_empty() {
        println!("No debts to pay off.");
        return;
    }

    println!(
        "{:>5} {:<24} {:<14} {:>14} {:>8} {:>12} {:>7} {:>12} {:>9}",
        "Order", "Debt", "Type", "Balance", "APR", "Payment", "Months", "Interest", "Progress"
    );
    println!("{}", "-".repeat(115));

    for plan in &report.plans {
        println!(
            "{:>5} {:<24} {:<14} {:>14} {:>7.2}% {:>12} {:>7} {:>12} {:>8.1}%",
            plan.order,
            plan.debt.name,
            plan.debt.kind.label(),
            plan.debt.balance.to_string(),
            plan.debt.interest_rate,
            plan.monthly_payment.to_string(),
            plan.months_to_payoff,
            plan.total_interest.to_string(),
            progress_percent(&plan.debt, summary.total_debt),
        );
    }

    println!("\nSummary:");
    println!("  Total Debt:             {} across {} debts", summary.total_debt, summary.debt_count);
    println!("  Total Minimum Payments: {}/month", summary.total_minimum_payments);
    println!("  Total Interest:         {}", summary.total_interest);
    println!(
        "  Payoff Time:            {}y {}m",
        summary.payoff_years(),
        summary.payoff_remaining_months()
    );
    match summary.debt_free_date(start) {
        Some(date) => println!("  Debt Free:              {}", date.format("%B %Y")),
        None => println!("  Debt Free:              beyond the supported calendar"),
    }

    let savings = &report.savings;
    println!("\nVersus minimum payments only:");
    println!("  Baseline Interest: {}", savings.baseline_interest);
    println!("  Baseline Months:   {}", savings.baseline_months);
    println!("  Interest Saved:    {}", savings.interest_saved);
    println!("  Time Saved:        {} months", savings.time_saved);
}
