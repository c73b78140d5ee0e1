//! Debt model
//!
//! An amount owed to a creditor, paid off through partial payments. The
//! paid state is derived from the amounts and never persisted.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DebtId;
use super::money::Money;

/// Fields supplied by the caller when recording a debt
#[derive(Debug, Clone)]
pub struct NewDebt {
    pub title: String,
    pub description: String,
    pub amount: Money,
    pub paid_amount: Money,
    pub creditor: String,
    pub due_date: NaiveDate,
}

/// A debt owed to a creditor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: DebtId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub amount: Money,
    #[serde(default)]
    pub paid_amount: Money,
    #[serde(default)]
    pub creditor: String,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Partial update of a debt; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebtPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub paid_amount: Option<Money>,
    pub creditor: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl DebtPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the patch to a debt in place
    pub fn apply_to(&self, debt: &mut Debt) {
        if let Some(title) = &self.title {
            debt.title = title.clone();
        }
        if let Some(description) = &self.description {
            debt.description = description.clone();
        }
        if let Some(amount) = self.amount {
            debt.amount = amount;
        }
        if let Some(paid) = self.paid_amount {
            debt.paid_amount = paid;
        }
        if let Some(creditor) = &self.creditor {
            debt.creditor = creditor.clone();
        }
        if let Some(due_date) = self.due_date {
            debt.due_date = due_date;
        }
    }
}

impl Debt {
    /// Create a debt, assigning a fresh ID and creation timestamp
    pub fn new(new: NewDebt) -> Self {
        Self {
            id: DebtId::new(),
            title: new.title,
            description: new.description,
            amount: new.amount,
            paid_amount: new.paid_amount,
            creditor: new.creditor,
            due_date: new.due_date,
            created_at: Utc::now(),
        }
    }

    pub fn is_paid(&self) -> bool {
        self.paid_amount >= self.amount
    }

    /// Amount still owed, never negative
    pub fn remaining(&self) -> Money {
        if self.is_paid() {
            Money::zero()
        } else {
            self.amount - self.paid_amount
        }
    }

    /// Past the due date without being paid off
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today && !self.is_paid()
    }

    /// Due in the given month or any month before it
    pub fn is_due_by(&self, year: i32, month: u32) -> bool {
        let (due_year, due_month) = (self.due_date.year(), self.due_date.month());
        due_year < year || (due_year == year && due_month <= month)
    }
}

impl fmt::Display for Debt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({} / {})",
            self.title, self.creditor, self.paid_amount, self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debt(paid: i64, amount: i64, due: NaiveDate) -> Debt {
        Debt::new(NewDebt {
            title: "Loan".into(),
            description: String::new(),
            amount: Money::from_cents(amount),
            paid_amount: Money::from_cents(paid),
            creditor: "Bank".into(),
            due_date: due,
        })
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_paid_is_derived() {
        assert!(!debt(100, 500, date(2025, 5, 1)).is_paid());
        assert!(debt(500, 500, date(2025, 5, 1)).is_paid());
    }

    #[test]
    fn test_remaining() {
        assert_eq!(debt(100, 500, date(2025, 5, 1)).remaining().cents(), 400);
        assert_eq!(debt(600, 500, date(2025, 5, 1)).remaining(), Money::zero());
    }

    #[test]
    fn test_overdue() {
        let d = debt(0, 500, date(2025, 5, 1));
        assert!(d.is_overdue(date(2025, 5, 2)));
        assert!(!d.is_overdue(date(2025, 5, 1)));
        assert!(!debt(500, 500, date(2025, 5, 1)).is_overdue(date(2026, 1, 1)));
    }

    #[test]
    fn test_due_by() {
        let d = debt(0, 500, date(2025, 5, 20));
        assert!(d.is_due_by(2025, 5));
        assert!(d.is_due_by(2026, 1));
        assert!(!d.is_due_by(2025, 4));
        assert!(!d.is_due_by(2024, 12));
    }

    #[test]
    fn test_patch() {
        let mut d = debt(0, 500, date(2025, 5, 20));
        DebtPatch {
            paid_amount: Some(Money::from_cents(200)),
            creditor: Some("Friend".into()),
            ..DebtPatch::default()
        }
        .apply_to(&mut d);

        assert_eq!(d.paid_amount.cents(), 200);
        assert_eq!(d.creditor, "Friend");
        assert_eq!(d.amount.cents(), 500);
    }

    #[test]
    fn test_stale_is_paid_flag_ignored() {
        let json = r#"{
            "id": "0190b6c2-4a1e-7cc0-8a3f-446655440001",
            "title": "Loan",
            "description": "",
            "amount": 50000,
            "paidAmount": 20000,
            "creditor": "Bank",
            "dueDate": "2025-09-01",
            "isPaid": true,
            "createdAt": "2025-01-01T00:00:00Z"
        }"#;
        let debt: Debt = serde_json::from_str(json).unwrap();
        assert!(!debt.is_paid());
        assert_eq!(debt.remaining().cents(), 30000);

        let value = serde_json::to_value(&debt).unwrap();
        assert!(value.get("isPaid").is_none());
    }
}
