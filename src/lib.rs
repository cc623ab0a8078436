//! Debt Payoff - projection engine for avalanche and snowball payoff plans
//!
//! This library provides:
//! - Debt records, validation, import/export and a repository seam
//! - Closed-form amortization per debt
//! - Cascading payoff plans ordered by strategy
//! - Savings against a minimum-payments-only baseline
//! - Batch comparison of strategies and extra-payment amounts

pub mod debt;
pub mod error;
pub mod money;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use debt::{Debt, DebtBook, DebtKind, DebtRepository, Strategy};
pub use error::{LoadError, PayoffError};
pub use money::Cents;
pub use projection::{
    compute_baseline_savings, compute_payoff_plans, PayoffConfig, PayoffEngine, PayoffPlan,
    PayoffSummary, ProjectionReport, Savings,
};
pub use scenario::ScenarioRunner;
