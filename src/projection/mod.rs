//! Payoff projection: ordering, amortization, cascading plans and savings

mod amortization;
mod baseline;
mod engine;
mod ordering;
mod plan;

pub use amortization::{amortize, months_to_payoff, Amortization, MonthCountError};
pub use baseline::{compute_baseline_savings, Savings};
pub use engine::{compute_payoff_plans, PayoffConfig, PayoffEngine};
pub use ordering::order_debts;
pub use plan::{progress_percent, write_plans_csv, PayoffPlan, PayoffSummary, ProjectionReport};
