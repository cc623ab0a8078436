//! Savings of a strategy against paying only the minimums
//!
//! The baseline amortizes every debt independently at its own minimum
//! payment. All debts run in parallel there, so the baseline payoff time is
//! the longest single debt rather than a cumulative timeline.

use super::amortization::amortize;
use super::engine::check_debt;
use super::plan::PayoffPlan;
use crate::debt::Debt;
use crate::error::PayoffError;
use crate::money::Cents;
use serde::{Deserialize, Serialize};

/// Comparison of a strategy plan against the minimum-only baseline
///
/// Both figures may come out negative when there is no extra payment,
/// since the strategy's cascading timeline runs debts back to back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Savings {
    pub baseline_interest: Cents,
    pub baseline_months: u32,
    pub interest_saved: Cents,
    pub time_saved: i64,
}

/// Compare `strategy_plans` against minimum-only payments on `debts`
pub fn compute_baseline_savings(
    debts: &[Debt],
    strategy_plans: &[PayoffPlan],
) -> Result<Savings, PayoffError> {
    let mut baseline_interest = Cents::ZERO;
    let mut baseline_months = 0;

    for debt in debts {
        check_debt(debt)?;
        let amortization = amortize(debt, debt.minimum_payment)?;
        baseline_interest += amortization.total_interest;
        baseline_months = baseline_months.max(amortization.months);
    }

    let strategy_interest: Cents = strategy_plans.iter().map(|p| p.total_interest).sum();
    let strategy_months = strategy_plans
        .iter()
        .map(|p| p.months_to_payoff)
        .max()
        .unwrap_or(0);

    Ok(Savings {
        baseline_interest,
        baseline_months,
        interest_saved: baseline_interest - strategy_interest,
        time_saved: baseline_months as i64 - strategy_months as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::Strategy;
    use crate::projection::compute_payoff_plans;

    fn two_cards() -> Vec<Debt> {
        vec![
            Debt::new("a", "Card A", 5000.0, 25.0, 150.0),
            Debt::new("b", "Card B", 500.0, 5.0, 25.0),
        ]
    }

    #[test]
    fn test_baseline_runs_in_parallel() {
        let debts = two_cards();
        let savings = compute_baseline_savings(&debts, &[]).unwrap();

        // Card A alone: 58 months, $3,700 interest. Card B alone: 21 months, $25.
        assert_eq!(savings.baseline_months, 58);
        assert_eq!(savings.baseline_interest, Cents::from_dollars(3_725.0));
    }

    #[test]
    fn test_zero_extra_loses_time() {
        let debts = two_cards();
        let plans = compute_payoff_plans(&debts, Strategy::Avalanche, Cents::ZERO).unwrap();
        let savings = compute_baseline_savings(&debts, &plans).unwrap();

        assert_eq!(savings.interest_saved, Cents::ZERO);
        assert_eq!(savings.time_saved, -21);
    }

    #[test]
    fn test_extra_payment_saves_interest() {
        let debts = two_cards();

        let plans = compute_payoff_plans(&debts, Strategy::Avalanche, Cents::from_dollars(50.0)).unwrap();
        let savings = compute_baseline_savings(&debts, &plans).unwrap();
        assert_eq!(savings.interest_saved, Cents::from_dollars(1_500.0));
        assert_eq!(savings.time_saved, 1);

        let plans = compute_payoff_plans(&debts, Strategy::Avalanche, Cents::from_dollars(100.0)).unwrap();
        let savings = compute_baseline_savings(&debts, &plans).unwrap();
        assert_eq!(savings.interest_saved, Cents::from_dollars(1_950.0));
        assert_eq!(savings.time_saved, 10);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compute_baseline_savings(&[], &[]).unwrap(), Savings::default());
    }

    #[test]
    fn test_baseline_rejects_non_convergent_minimum() {
        let debts = vec![Debt::new("card", "Store Card", 5000.0, 24.0, 90.0)];
        assert!(matches!(
            compute_baseline_savings(&debts, &[]),
            Err(PayoffError::NonConvergentPayoff { .. })
        ));
    }
}
