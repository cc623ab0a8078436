//! Debt data structures matching the stored debt list format

use crate::money::Cents;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a debt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DebtKind {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Auto Loan")]
    AutoLoan,
    #[serde(rename = "Student Loan")]
    StudentLoan,
    #[serde(rename = "Personal Loan")]
    PersonalLoan,
    Mortgage,
    #[default]
    Other,
}

impl DebtKind {
    pub const ALL: [DebtKind; 6] = [
        DebtKind::CreditCard,
        DebtKind::AutoLoan,
        DebtKind::StudentLoan,
        DebtKind::PersonalLoan,
        DebtKind::Mortgage,
        DebtKind::Other,
    ];

    /// Display label, also the stored representation
    pub fn label(&self) -> &'static str {
        match self {
            DebtKind::CreditCard => "Credit Card",
            DebtKind::AutoLoan => "Auto Loan",
            DebtKind::StudentLoan => "Student Loan",
            DebtKind::PersonalLoan => "Personal Loan",
            DebtKind::Mortgage => "Mortgage",
            DebtKind::Other => "Other",
        }
    }
}

impl fmt::Display for DebtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DebtKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DebtKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown debt kind: {}", s))
    }
}

/// Payoff ordering policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Highest interest rate first
    #[default]
    Avalanche,
    /// Smallest balance first
    Snowball,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Avalanche, Strategy::Snowball];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Avalanche => "avalanche",
            Strategy::Snowball => "snowball",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avalanche" => Ok(Strategy::Avalanche),
            "snowball" => Ok(Strategy::Snowball),
            other => Err(format!("Unknown strategy: {}", other)),
        }
    }
}

/// A single outstanding debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    /// Stable identifier across recalculations
    pub id: String,

    /// Display label
    pub name: String,

    /// Category
    #[serde(rename = "type", default)]
    pub kind: DebtKind,

    /// Outstanding principal
    pub balance: Cents,

    /// Nominal annual percentage rate (18.99 = 18.99% APR)
    pub interest_rate: f64,

    /// Required monthly payment
    pub minimum_payment: Cents,

    /// Display color tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Debt {
    /// Create a debt from dollar figures
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: DebtKind::Other,
            balance: Cents::from_dollars(balance),
            interest_rate,
            minimum_payment: Cents::from_dollars(minimum_payment),
            color: None,
        }
    }

    pub fn with_kind(mut self, kind: DebtKind) -> Self {
        self.kind = kind;
        self
    }

    /// Monthly interest fraction
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100.0 / 12.0
    }

    /// Interest accrued in the first month on the current balance
    pub fn monthly_interest(&self) -> Cents {
        Cents::from_dollars(self.balance.dollars() * self.monthly_rate())
    }
}

/// The persisted debts section: the list plus the chosen plan settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtBook {
    pub list: Vec<Debt>,

    #[serde(default)]
    pub strategy: Strategy,

    #[serde(default)]
    pub extra_payment: Cents,
}
