//! Core data models for Pocketbook
//!
//! Transactions, savings goals and debts, plus the money type, typed IDs,
//! the category catalog and display preferences.

pub mod category;
pub mod debt;
pub mod goal;
pub mod ids;
pub mod money;
pub mod preferences;
pub mod transaction;

pub use category::Category;
pub use debt::{Debt, DebtPatch, NewDebt};
pub use goal::{Goal, GoalPatch, NewGoal};
pub use ids::{DebtId, GoalId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use preferences::{Currency, Language, Theme};
pub use transaction::{NewTransaction, Transaction, TransactionType};
