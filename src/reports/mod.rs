//! Reports module for Pocketbook
//!
//! Pure aggregations over the stored records: balances, monthly stats,
//! category breakdowns, transaction filters, goal/debt progress and the
//! utility bills report. Nothing here touches storage.

pub mod category;
pub mod filter;
pub mod progress;
pub mod summary;
pub mod utilities;

pub use category::{category_totals, CategoryReport, CategoryTotal};
pub use filter::{filter_transactions, net_total, TransactionFilter, TypeFilter};
pub use progress::{
    debt_progress, debts_due_by, goal_progress, progress_percentage, DebtSummary, GoalSummary,
};
pub use summary::{monthly_stats, total_balance, MonthlyReport, MonthlyStats};
pub use utilities::{is_utility, UtilitiesReport, UtilityKind, UtilityMonth};
