//! Error types for payoff calculations and debt import

use crate::money::Cents;
use thiserror::Error;

/// Reasons a payoff projection is rejected
///
/// The engine never partially succeeds: the first offending debt fails the
/// whole calculation and is named in the error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayoffError {
    #[error("invalid debt {id} ({name}): {reason}")]
    InvalidDebt {
        id: String,
        name: String,
        reason: String,
    },

    #[error("extra payment must not be negative, got {0}")]
    InvalidExtraPayment(Cents),

    #[error(
        "payment too low to ever pay off {name} ({id}): {payment}/month does not exceed \
         monthly interest of {monthly_interest}"
    )]
    NonConvergentPayoff {
        id: String,
        name: String,
        payment: Cents,
        monthly_interest: Cents,
    },

    #[error("payoff of {name} ({id}) at {payment}/month is out of range: {reason}")]
    OutOfRange {
        id: String,
        name: String,
        payment: Cents,
        reason: String,
    },
}

impl PayoffError {
    /// Id of the debt responsible for the failure, if any
    pub fn debt_id(&self) -> Option<&str> {
        match self {
            PayoffError::InvalidDebt { id, .. }
            | PayoffError::NonConvergentPayoff { id, .. }
            | PayoffError::OutOfRange { id, .. } => Some(id),
            PayoffError::InvalidExtraPayment(_) => None,
        }
    }
}

/// Errors raised while importing or exporting debts
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    #[error("duplicate debt id: {0}")]
    DuplicateId(String),

    #[error("unsupported debt file format: {0}")]
    UnknownFormat(String),
}
