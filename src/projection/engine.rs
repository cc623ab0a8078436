//! Payoff projection engine
//!
//! Orders debts by strategy, then walks them in sequence. Only the first
//! debt in the order receives the extra payment; each later debt is
//! amortized at its own minimum, with its payoff month offset by the months
//! consumed by the debts before it. Freed minimums are tracked but never
//! applied past the first debt, which understates how fast debts after the
//! first really pay off under a month-by-month rollover.

use super::amortization::amortize;
use super::baseline::compute_baseline_savings;
use super::ordering::order_debts;
use super::plan::{PayoffPlan, PayoffSummary, ProjectionReport};
use crate::debt::{Debt, Strategy};
use crate::error::PayoffError;
use crate::money::Cents;
use log::{debug, info, warn};

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoffConfig {
    /// Ordering policy
    pub strategy: Strategy,

    /// Budget on top of all minimum payments, every month
    pub extra_payment: Cents,
}

impl Default for PayoffConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Avalanche,
            extra_payment: Cents::ZERO,
        }
    }
}

/// Reject debts the amortization math cannot handle
pub(crate) fn check_debt(debt: &Debt) -> Result<(), PayoffError> {
    let reason = if !debt.balance.is_positive() {
        Some(format!("balance must be greater than 0, got {}", debt.balance))
    } else if !debt.interest_rate.is_finite() || debt.interest_rate < 0.0 {
        Some(format!(
            "interest rate must be a non-negative number, got {}",
            debt.interest_rate
        ))
    } else if !debt.minimum_payment.is_positive() {
        Some(format!(
            "minimum payment must be greater than 0, got {}",
            debt.minimum_payment
        ))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(PayoffError::InvalidDebt {
            id: debt.id.clone(),
            name: debt.name.clone(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct PayoffEngine {
    config: PayoffConfig,
}

impl PayoffEngine {
    /// Create a new engine with the given config
    pub fn new(config: PayoffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PayoffConfig {
        &self.config
    }

    /// Compute the ordered payoff plan for `debts`
    pub fn project(&self, debts: &[Debt]) -> Result<Vec<PayoffPlan>, PayoffError> {
        let result = self.try_project(debts);
        if let Err(err) = &result {
            warn!("Payoff projection rejected: {}", err);
        }
        result
    }

    fn try_project(&self, debts: &[Debt]) -> Result<Vec<PayoffPlan>, PayoffError> {
        let PayoffConfig {
            strategy,
            extra_payment,
        } = self.config;

        if extra_payment.is_negative() {
            return Err(PayoffError::InvalidExtraPayment(extra_payment));
        }
        for debt in debts {
            check_debt(debt)?;
        }

        let ordered = order_debts(debts, strategy);
        debug!(
            "{} order: {}",
            strategy,
            ordered.iter().map(|d| d.id.as_str()).collect::<Vec<_>>().join(", ")
        );

        let mut plans = Vec::with_capacity(ordered.len());
        let mut remaining_extra = extra_payment;
        let mut cumulative_months: u32 = 0;

        for (index, debt) in ordered.into_iter().enumerate() {
            let out_of_range = |payment: Cents, reason: &str| PayoffError::OutOfRange {
                id: debt.id.clone(),
                name: debt.name.clone(),
                payment,
                reason: reason.to_string(),
            };

            let extra_for_debt = if index == 0 { remaining_extra } else { Cents::ZERO };
            let monthly_payment = debt
                .minimum_payment
                .checked_add(extra_for_debt)
                .ok_or_else(|| out_of_range(debt.minimum_payment, "payment plus extra is too large"))?;

            let amortization = amortize(debt, monthly_payment)?;

            cumulative_months = cumulative_months
                .checked_add(amortization.months)
                .ok_or_else(|| out_of_range(monthly_payment, "cumulative payoff months overflow"))?;

            plans.push(PayoffPlan {
                debt: debt.clone(),
                order: index as u32 + 1,
                monthly_payment,
                months_alone: amortization.months,
                months_to_payoff: cumulative_months,
                total_interest: amortization.total_interest,
            });

            remaining_extra += debt.minimum_payment;
        }

        info!(
            "Projected {} debts ({}, {} extra): paid off in {} months",
            plans.len(),
            strategy,
            extra_payment,
            cumulative_months
        );

        Ok(plans)
    }

    /// Compute plans, aggregates and baseline savings in one pass
    pub fn report(&self, debts: &[Debt]) -> Result<ProjectionReport, PayoffError> {
        let plans = self.project(debts)?;
        let summary = PayoffSummary::from_plans(&plans);
        let savings = compute_baseline_savings(debts, &plans)?;

        Ok(ProjectionReport {
            strategy: self.config.strategy,
            extra_payment: self.config.extra_payment,
            plans,
            summary,
            savings,
        })
    }
}

/// Compute the ordered payoff plan for `debts` under `strategy`
pub fn compute_payoff_plans(
    debts: &[Debt],
    strategy: Strategy,
    extra_payment: Cents,
) -> Result<Vec<PayoffPlan>, PayoffError> {
    PayoffEngine::new(PayoffConfig {
        strategy,
        extra_payment,
    })
    .project(debts)
}
