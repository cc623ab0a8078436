//! Payoff ordering for avalanche and snowball strategies

use crate::debt::{Debt, Strategy};

/// Sort debts into payoff order for the given strategy
///
/// Avalanche: highest interest rate first. Snowball: smallest balance first.
/// The sort is stable, so equal keys keep their input order.
pub fn order_debts(debts: &[Debt], strategy: Strategy) -> Vec<&Debt> {
    let mut ordered: Vec<&Debt> = debts.iter().collect();

    match strategy {
        Strategy::Avalanche => {
            ordered.sort_by(|a, b| b.interest_rate.total_cmp(&a.interest_rate));
        }
        Strategy::Snowball => {
            ordered.sort_by_key(|d| d.balance);
        }
    }

    ordered
}
