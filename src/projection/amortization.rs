//! Closed-form amortization of a single debt at a level monthly payment

use crate::debt::Debt;
use crate::error::PayoffError;
use crate::money::Cents;
use log::debug;

/// Result of amortizing one debt at a fixed payment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amortization {
    /// Whole months until the balance reaches zero (rounded up)
    pub months: u32,

    /// Payments made beyond the principal
    pub total_interest: Cents,
}

/// Why no month count could be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthCountError {
    /// The payment never gets ahead of the interest
    NonConvergent,
    /// The count does not fit in a `u32`
    TooManyMonths,
}

/// Round a fractional month count up to whole months
fn whole_months(months: f64) -> Result<u32, MonthCountError> {
    let months = months.ceil();
    if months.is_nan() || months < 0.0 {
        return Err(MonthCountError::NonConvergent);
    }
    if months > u32::MAX as f64 {
        return Err(MonthCountError::TooManyMonths);
    }
    Ok(months as u32)
}

/// Number of months to pay off `balance` at `payment` with monthly rate `r`
///
/// months = ceil(-ln(1 - balance * r / payment) / ln(1 + r))
///
/// Both logarithms go through `ln_1p` so tiny rates keep their precision.
pub fn months_to_payoff(
    balance: f64,
    monthly_rate: f64,
    payment: f64,
) -> Result<u32, MonthCountError> {
    if monthly_rate == 0.0 {
        return whole_months(balance / payment);
    }

    let accrual_ratio = balance * monthly_rate / payment;
    if accrual_ratio.is_nan() || accrual_ratio >= 1.0 {
        return Err(MonthCountError::NonConvergent);
    }

    whole_months(-(-accrual_ratio).ln_1p() / monthly_rate.ln_1p())
}

/// Amortize a debt at the given monthly payment
///
/// Interest-free debts pay off in `ceil(balance / payment)` months with no
/// interest. Otherwise total interest is every payment made minus the
/// principal, including the full final payment.
pub fn amortize(debt: &Debt, monthly_payment: Cents) -> Result<Amortization, PayoffError> {
    let non_convergent = || PayoffError::NonConvergentPayoff {
        id: debt.id.clone(),
        name: debt.name.clone(),
        payment: monthly_payment,
        monthly_interest: debt.monthly_interest(),
    };
    let out_of_range = |reason: &str| PayoffError::OutOfRange {
        id: debt.id.clone(),
        name: debt.name.clone(),
        payment: monthly_payment,
        reason: reason.to_string(),
    };

    if !monthly_payment.is_positive() {
        return Err(non_convergent());
    }

    let monthly_rate = debt.monthly_rate();

    if monthly_rate == 0.0 {
        // Integer ceiling division keeps the zero-interest case exact
        let balance = u64::try_from(debt.balance.as_i64()).unwrap_or(0);
        let payment = monthly_payment.as_i64().unsigned_abs();
        let months = u32::try_from(balance.div_ceil(payment))
            .map_err(|_| out_of_range("more months than can be counted"))?;

        return Ok(Amortization {
            months,
            total_interest: Cents::ZERO,
        });
    }

    let months = months_to_payoff(
        debt.balance.dollars(),
        monthly_rate,
        monthly_payment.dollars(),
    )
    .map_err(|err| match err {
        MonthCountError::NonConvergent => non_convergent(),
        MonthCountError::TooManyMonths => out_of_range("more months than can be counted"),
    })?;

    let total_interest = monthly_payment
        .checked_times(months)
        .and_then(|paid| paid.checked_sub(debt.balance))
        .ok_or_else(|| out_of_range("total paid is too large to represent"))?;

    debug!(
        "Amortized {} at {}/month: {} months, {} interest",
        debt.id, monthly_payment, months, total_interest
    );

    Ok(Amortization {
        months,
        total_interest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_interest_exact() {
        let debt = Debt::new("1", "Loan from Sam", 1200.0, 0.0, 100.0);
        let result = amortize(&debt, debt.minimum_payment).unwrap();

        assert_eq!(result.months, 12);
        assert_eq!(result.total_interest, Cents::ZERO);
    }

    #[test]
    fn test_zero_interest_rounds_up() {
        let debt = Debt::new("1", "Loan from Sam", 1250.0, 0.0, 100.0);
        let result = amortize(&debt, debt.minimum_payment).unwrap();

        assert_eq!(result.months, 13);
        assert_eq!(result.total_interest, Cents::ZERO);
    }

    #[test]
    fn test_worked_example() {
        // $5,000 at 18.99% APR paying $150/month
        let debt = Debt::new("1", "Visa", 5000.0, 18.99, 150.0);
        assert_relative_eq!(debt.monthly_rate(), 0.015825, epsilon = 1e-9);

        let result = amortize(&debt, debt.minimum_payment).unwrap();
        assert_eq!(result.months, 48);
        assert_eq!(result.total_interest, Cents::from_dollars(2_200.0));
    }

    #[test]
    fn test_extra_payment_shortens_payoff() {
        let debt = Debt::new("1", "Visa", 5000.0, 18.99, 150.0);
        let minimum = amortize(&debt, debt.minimum_payment).unwrap();
        let boosted = amortize(&debt, Cents::from_dollars(250.0)).unwrap();

        assert!(boosted.months < minimum.months);
        assert!(boosted.total_interest < minimum.total_interest);
    }

    #[test]
    fn test_non_convergent_payment() {
        // Monthly interest is $100, payment is $90
        let debt = Debt::new("card", "Store Card", 5000.0, 24.0, 90.0);
        let err = amortize(&debt, debt.minimum_payment).unwrap_err();

        assert_eq!(
            err,
            PayoffError::NonConvergentPayoff {
                id: "card".to_string(),
                name: "Store Card".to_string(),
                payment: Cents::from_dollars(90.0),
                monthly_interest: Cents::from_dollars(100.0),
            }
        );
    }

    #[test]
    fn test_payment_equal_to_interest_does_not_converge() {
        let debt = Debt::new("card", "Store Card", 5000.0, 24.0, 100.0);
        assert!(amortize(&debt, debt.minimum_payment).is_err());
    }

    #[test]
    fn test_months_to_payoff_raw() {
        assert_eq!(months_to_payoff(1200.0, 0.0, 100.0), Ok(12));
        assert_eq!(months_to_payoff(5000.0, 0.02, 90.0), Err(MonthCountError::NonConvergent));
        assert_eq!(months_to_payoff(5000.0, 0.02, 100.0), Err(MonthCountError::NonConvergent));
        assert_eq!(months_to_payoff(1e12, 0.0, 0.01), Err(MonthCountError::TooManyMonths));
    }

    #[test]
    fn test_tiny_rate_still_converges() {
        // Plain ln(1 + r) rounds to zero at this rate
        let debt = Debt::new("1", "Promo Card", 1000.0, 1e-15, 100.0);
        let result = amortize(&debt, debt.minimum_payment).unwrap();

        assert_eq!(result.months, 10);
        assert_eq!(result.total_interest, Cents::ZERO);
    }

    #[test]
    fn test_zero_interest_month_count_out_of_range() {
        // 10 billion months does not fit in a u32
        let debt = Debt::new("big", "Big Loan", 100_000_000.0, 0.0, 0.01);
        let err = amortize(&debt, debt.minimum_payment).unwrap_err();

        assert!(matches!(err, PayoffError::OutOfRange { .. }), "got {:?}", err);
        assert_eq!(err.debt_id(), Some("big"));
    }

    #[test]
    fn test_saturated_balance_does_not_panic() {
        let debt = Debt::new("huge", "Huge Loan", 1e300, 0.0, 100.0);
        assert_eq!(debt.balance, Cents::new(i64::MAX));

        assert!(matches!(
            amortize(&debt, debt.minimum_payment),
            Err(PayoffError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_total_paid_overflow_is_rejected() {
        let mut debt = Debt::new("huge", "Huge Loan", 0.0, 12.0, 0.0);
        debt.balance = Cents::new(i64::MAX - 1);
        debt.minimum_payment = Cents::new(i64::MAX / 2);

        // Three payments of half the balance overflow i64
        let err = amortize(&debt, debt.minimum_payment).unwrap_err();
        assert!(matches!(err, PayoffError::OutOfRange { .. }), "got {:?}", err);
    }

    #[test]
    fn test_zero_payment_never_pays_off() {
        let debt = Debt::new("1", "Loan from Sam", 1200.0, 0.0, 100.0);
        assert!(matches!(
            amortize(&debt, Cents::ZERO),
            Err(PayoffError::NonConvergentPayoff { .. })
        ));
    }
}
