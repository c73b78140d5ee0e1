//! Transaction model
//!
//! A single income or expense entry. Transactions are immutable once
//! stored: they can only be created and deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    /// "+" for income, "-" for expense
    pub fn sign(&self) -> &'static str {
        match self {
            Self::Income => "+",
            Self::Expense => "-",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "Invalid transaction type: '{}'. Use income or expense",
                other
            )),
        }
    }
}

/// Fields supplied by the caller when recording a transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub amount: Money,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Always non-negative; the direction comes from `kind`
    pub amount: Money,

    #[serde(default)]
    pub description: String,

    /// Category catalog ID (see `models::category`)
    pub category: String,

    pub date: NaiveDate,

    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction, assigning a fresh ID and creation timestamp
    pub fn new(new: NewTransaction) -> Self {
        Self {
            id: TransactionId::new(),
            kind: new.kind,
            amount: new.amount,
            description: new.description,
            category: new.category,
            date: new.date,
            created_at: Utc::now(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        !self.kind.is_income()
    }

    /// Amount with its direction applied (income positive, expense negative)
    pub fn signed_amount(&self) -> Money {
        if self.is_income() {
            self.amount
        } else {
            -self.amount
        }
    }

    /// Month bucket key ("YYYY-MM")
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.kind.sign(),
            self.amount
        )
    }
}
