//! Record-level validation for imported debts
//!
//! These are the entry-form limits. They are stricter than what the
//! projection engine requires; the engine only rejects values that make the
//! amortization math meaningless.

use super::Debt;
use crate::money::Cents;
use std::fmt;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const MAX_BALANCE: Cents = Cents::new(10_000_000_00);
pub const MAX_INTEREST_RATE: f64 = 100.0;
pub const MAX_MINIMUM_PAYMENT: Cents = Cents::new(100_000_00);

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a debt against the entry-form rules, collecting every failure
pub fn validate_debt(debt: &Debt) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let name_len = debt.name.trim().chars().count();
    if name_len == 0 {
        errors.push(FieldError::new("name", "Debt name is required"));
    } else if name_len < NAME_MIN_CHARS {
        errors.push(FieldError::new(
            "name",
            format!("Debt name must be at least {} characters", NAME_MIN_CHARS),
        ));
    } else if name_len > NAME_MAX_CHARS {
        errors.push(FieldError::new(
            "name",
            format!("Debt name must be less than {} characters", NAME_MAX_CHARS),
        ));
    }

    if !debt.balance.is_positive() {
        errors.push(FieldError::new("balance", "Balance must be greater than 0"));
    } else if debt.balance > MAX_BALANCE {
        errors.push(FieldError::new(
            "balance",
            format!("Balance cannot exceed {}", MAX_BALANCE),
        ));
    }

    if !debt.interest_rate.is_finite() {
        errors.push(FieldError::new("interestRate", "Interest rate is required"));
    } else if debt.interest_rate < 0.0 {
        errors.push(FieldError::new("interestRate", "Interest rate cannot be negative"));
    } else if debt.interest_rate > MAX_INTEREST_RATE {
        errors.push(FieldError::new(
            "interestRate",
            format!("Interest rate cannot exceed {}%", MAX_INTEREST_RATE),
        ));
    }

    if !debt.minimum_payment.is_positive() {
        errors.push(FieldError::new(
            "minimumPayment",
            "Minimum payment must be greater than 0",
        ));
    } else if debt.minimum_payment > MAX_MINIMUM_PAYMENT {
        errors.push(FieldError::new(
            "minimumPayment",
            format!("Minimum payment cannot exceed {}", MAX_MINIMUM_PAYMENT),
        ));
    }

    errors
}
