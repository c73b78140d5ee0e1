//! Transaction filtering
//!
//! Type, category and free-text search filters as used by the transaction
//! list. All filters are optional and combine with AND.

use std::fmt;
use std::str::FromStr;

use crate::i18n;
use crate::models::category::category_by_id;
use crate::models::{Language, Money, Transaction, TransactionType};

/// Which transaction types to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    fn accepts(&self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionType::Income,
            Self::Expense => kind == TransactionType::Expense,
        }
    }
}

impl From<TransactionType> for TypeFilter {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Income => Self::Income,
            TransactionType::Expense => Self::Expense,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            other => other.parse::<TransactionType>().map(Self::from),
        }
    }
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: TypeFilter,
    /// Category ID, legacy ID or localized name
    pub category: Option<String>,
    /// Case-insensitive text matched against description and category
    pub search: Option<String>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TypeFilter) -> Self {
        self.kind = kind;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Check whether a transaction passes every filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        if !self.kind.accepts(txn.kind) {
            return false;
        }

        if let Some(category) = self.category.as_deref().filter(|c| !c.trim().is_empty()) {
            let same = match category_by_id(&txn.category) {
                Some(known) => known.matches(category),
                None => txn.category == category.trim(),
            };
            if !same {
                return false;
            }
        }

        match self.search.as_deref().map(i18n::fold) {
            Some(query) if !query.is_empty() => matches_search(txn, &query),
            _ => true,
        }
    }
}

/// Search over the description, the stored category and its display names
fn matches_search(txn: &Transaction, query: &str) -> bool {
    if i18n::fold(&txn.description).contains(query) || i18n::fold(&txn.category).contains(query) {
        return true;
    }

    category_by_id(&txn.category).is_some_and(|category| {
        Language::all()
            .iter()
            .any(|lang| i18n::fold(category.name(*lang)).contains(query))
    })
}

/// Transactions passing `filter`, in their original order
pub fn filter_transactions(transactions: &[Transaction], filter: &TransactionFilter) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect()
}

/// Income minus expenses over a slice
pub fn net_total(transactions: &[Transaction]) -> Money {
    transactions.iter().map(Transaction::signed_amount).sum()
}
