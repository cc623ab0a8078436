//! Scenario runner for comparing strategies and extra-payment amounts
//!
//! Holds a debt list once and runs the engine under many configurations.

use crate::debt::{Debt, Strategy};
use crate::error::PayoffError;
use crate::money::Cents;
use crate::projection::{PayoffConfig, PayoffEngine, ProjectionReport};
use rayon::prelude::*;

/// Pre-loaded scenario runner for batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(load_default_debts()?);
///
/// let reports = runner.sweep_extra_payments(Strategy::Avalanche, &extras)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    debts: Vec<Debt>,
}

impl ScenarioRunner {
    pub fn new(debts: Vec<Debt>) -> Self {
        Self { debts }
    }

    /// Run a single projection with the given config
    pub fn run(&self, config: PayoffConfig) -> Result<ProjectionReport, PayoffError> {
        PayoffEngine::new(config).report(&self.debts)
    }

    /// Run both strategies with the same extra payment, avalanche first
    pub fn compare_strategies(
        &self,
        extra_payment: Cents,
    ) -> Result<Vec<ProjectionReport>, PayoffError> {
        Strategy::ALL
            .iter()
            .map(|&strategy| {
                self.run(PayoffConfig {
                    strategy,
                    extra_payment,
                })
            })
            .collect()
    }

    /// Run one strategy over several extra payments in parallel
    ///
    /// Reports come back in the order of `extra_payments`.
    pub fn sweep_extra_payments(
        &self,
        strategy: Strategy,
        extra_payments: &[Cents],
    ) -> Result<Vec<ProjectionReport>, PayoffError> {
        extra_payments
            .par_iter()
            .map(|&extra_payment| {
                self.run(PayoffConfig {
                    strategy,
                    extra_payment,
                })
            })
            .collect()
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }
}

/// Extra payments from zero up to `max` inclusive in `step` increments
pub fn extra_payment_steps(max: Cents, step: Cents) -> Vec<Cents> {
    if !step.is_positive() || max.is_negative() {
        return vec![Cents::ZERO];
    }

    let count = max.as_i64() / step.as_i64();
    (0..=count).map(|i| Cents::new(i * step.as_i64())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> ScenarioRunner {
        ScenarioRunner::new(vec![
            Debt::new("visa", "Visa", 5000.0, 18.99, 150.0),
            Debt::new("car", "Car Loan", 12000.0, 6.5, 300.0),
            Debt::new("sam", "Loan from Sam", 800.0, 0.0, 50.0),
        ])
    }

    #[test]
    fn test_compare_strategies() {
        let runner = runner();
        assert_eq!(runner.debts().len(), 3);

        let reports = runner.compare_strategies(Cents::from_dollars(100.0)).unwrap();
        assert_eq!(reports.len(), 2);

        assert_eq!(reports[0].strategy, Strategy::Avalanche);
        assert_eq!(reports[0].plans[0].debt.id, "visa");

        assert_eq!(reports[1].strategy, Strategy::Snowball);
        assert_eq!(reports[1].plans[0].debt.id, "sam");
    }

    #[test]
    fn test_sweep_preserves_order() {
        let extras = extra_payment_steps(Cents::from_dollars(100.0), Cents::from_dollars(50.0));
        assert_eq!(extras.len(), 3);

        let reports = runner().sweep_extra_payments(Strategy::Avalanche, &extras).unwrap();
        let swept: Vec<_> = reports.iter().map(|r| r.extra_payment).collect();
        assert_eq!(swept, extras);

        // Extra payments on the avalanche plan pay down interest
        for report in &reports[1..] {
            assert!(report.savings.interest_saved.is_positive());
        }
    }

    #[test]
    fn test_sweep_fails_on_bad_debt() {
        let runner = ScenarioRunner::new(vec![Debt::new("store", "Store Card", 5000.0, 24.0, 90.0)]);
        let extras = [Cents::ZERO, Cents::from_dollars(50.0)];
        assert!(runner.sweep_extra_payments(Strategy::Snowball, &extras).is_err());
    }

    #[test]
    fn test_extra_payment_steps() {
        assert_eq!(
            extra_payment_steps(Cents::new(250), Cents::new(100)),
            vec![Cents::new(0), Cents::new(100), Cents::new(200)]
        );
        assert_eq!(extra_payment_steps(Cents::new(250), Cents::ZERO), vec![Cents::ZERO]);
    }
}
