//! Payoff plan output structures

use super::baseline::Savings;
use crate::debt::{Debt, Strategy};
use crate::money::Cents;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Schedule for one debt within a strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffPlan {
    pub debt: Debt,

    /// 1-based position in the payoff sequence
    pub order: u32,

    /// Payment used to amortize this debt (minimum plus any extra)
    pub monthly_payment: Cents,

    /// Months to pay off this debt on its own at `monthly_payment`
    pub months_alone: u32,

    /// Months from now until this debt is paid off, after the debts before it
    pub months_to_payoff: u32,

    /// Interest paid over the life of this debt
    pub total_interest: Cents,
}

/// Aggregate figures over a plan list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffSummary {
    pub debt_count: usize,
    pub total_debt: Cents,
    pub total_minimum_payments: Cents,
    pub total_interest: Cents,
    pub payoff_time_months: u32,
}

impl PayoffSummary {
    pub fn from_plans(plans: &[PayoffPlan]) -> Self {
        Self {
            debt_count: plans.len(),
            total_debt: plans.iter().map(|p| p.debt.balance).sum(),
            total_minimum_payments: plans.iter().map(|p| p.debt.minimum_payment).sum(),
            total_interest: plans.iter().map(|p| p.total_interest).sum(),
            payoff_time_months: plans.iter().map(|p| p.months_to_payoff).max().unwrap_or(0),
        }
    }

    /// Whole years of the payoff time
    pub fn payoff_years(&self) -> u32 {
        self.payoff_time_months / 12
    }

    /// Months left over after the whole years
    pub fn payoff_remaining_months(&self) -> u32 {
        self.payoff_time_months % 12
    }

    /// Date the last debt is paid off when payments start on `start`
    pub fn debt_free_date(&self, start: NaiveDate) -> Option<NaiveDate> {
        start.checked_add_months(Months::new(self.payoff_time_months))
    }
}

/// Share of the total debt that this debt does not account for, in percent
///
/// Returns 0 when there is no debt at all.
pub fn progress_percent(debt: &Debt, total_debt: Cents) -> f64 {
    if !total_debt.is_positive() {
        return 0.0;
    }
    (total_debt - debt.balance).dollars() / total_debt.dollars() * 100.0
}

/// Complete result of one projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionReport {
    pub strategy: Strategy,
    pub extra_payment: Cents,
    pub plans: Vec<PayoffPlan>,
    pub summary: PayoffSummary,
    pub savings: Savings,
}

#[derive(Serialize)]
struct PlanCsvRow<'a> {
    #[serde(rename = "Order")]
    order: u32,
    #[serde(rename = "Id")]
    id: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Type")]
    kind: &'a str,
    #[serde(rename = "Balance")]
    balance: String,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
    #[serde(rename = "MonthlyPayment")]
    monthly_payment: String,
    #[serde(rename = "MonthsAlone")]
    months_alone: u32,
    #[serde(rename = "MonthsToPayoff")]
    months_to_payoff: u32,
    #[serde(rename = "TotalInterest")]
    total_interest: String,
}

/// Write plans as CSV, one row per debt in payoff order
pub fn write_plans_csv<W: Write>(writer: W, plans: &[PayoffPlan]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for plan in plans {
        csv_writer.serialize(PlanCsvRow {
            order: plan.order,
            id: &plan.debt.id,
            name: &plan.debt.name,
            kind: plan.debt.kind.label(),
            balance: format!("{:.2}", plan.debt.balance.dollars()),
            interest_rate: plan.debt.interest_rate,
            monthly_payment: format!("{:.2}", plan.monthly_payment.dollars()),
            months_alone: plan.months_alone,
            months_to_payoff: plan.months_to_payoff,
            total_interest: format!("{:.2}", plan.total_interest.dollars()),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
