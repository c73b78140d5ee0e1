//! Dashboard: balance, this month's totals and recent activity

use chrono::Datelike;

use crate::models::{Debt, Goal, Transaction};
use crate::reports::progress::{DebtSummary, GoalSummary};
use crate::reports::summary::{monthly_stats, total_balance};

use super::report::{format_money_colored, format_percentage};
use super::transaction::format_transaction_row;
use super::DisplayContext;

/// Render the dashboard
///
/// `recent` is shown as-is; callers pass the newest few transactions.
pub fn format_dashboard(
    transactions: &[Transaction],
    recent: &[Transaction],
    goals: &[Goal],
    debts: &[Debt],
    ctx: &DisplayContext,
) -> String {
    let labels = ctx.labels();
    let symbol = ctx.symbol();
    let month = monthly_stats(transactions, ctx.today.year(), ctx.today.month());

    let mut output = format!(
        "{}: {}\n\n",
        labels.balance,
        format_money_colored(total_balance(transactions), symbol)
    );

    output.push_str(&format!("{}\n", labels.this_month));
    output.push_str(&format!(
        "  {:<12} {:>16}\n",
        labels.income,
        month.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  {:<12} {:>16}\n",
        labels.expenses,
        month.expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  {:<12} {:>16}\n\n",
        labels.balance,
        month.balance.format_signed(symbol)
    ));

    if !goals.is_empty() {
        let summary = GoalSummary::from_goals(goals, ctx.today);
        output.push_str(&format!(
            "{}: {}/{} {} ({})\n",
            labels.goals,
            summary.completed,
            summary.count,
            labels.completed.to_lowercase(),
            format_percentage(summary.overall_progress())
        ));
    }

    if !debts.is_empty() {
        let summary = DebtSummary::from_debts(debts, ctx.today);
        output.push_str(&format!(
            "{}: {} {}\n",
            labels.debts,
            labels.remaining.to_lowercase(),
            summary.total_remaining.format_with_symbol(symbol)
        ));
    }

    if !goals.is_empty() || !debts.is_empty() {
        output.push('\n');
    }

    output.push_str(&format!("{}\n", labels.recent_transactions));
    if recent.is_empty() {
        output.push_str(&format!("  {}\n", labels.no_transactions));
    }
    for txn in recent {
        output.push_str(&format!("  {}\n", format_transaction_row(txn, ctx)));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Language, Money, NewTransaction, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_dashboard_sections() {
        let ctx = DisplayContext::new(
            Language::En,
            Currency::Azn,
            NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
        );
        let transactions = vec![
            Transaction::new(NewTransaction {
                kind: TransactionType::Income,
                amount: Money::from_cents(100000),
                description: "Salary".into(),
                category: "salary".into(),
                date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            }),
            Transaction::new(NewTransaction {
                kind: TransactionType::Expense,
                amount: Money::from_cents(30000),
                description: "Rent".into(),
                category: "other".into(),
                date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            }),
        ];

        let output = format_dashboard(&transactions, &transactions[..1], &[], &[], &ctx);
        assert!(output.contains("+700.00 ₼"));
        assert!(output.contains("This month"));
        assert!(output.contains("+1000.00 ₼"));
        assert!(output.contains("Salary"));
        assert!(!output.contains("Rent"));
    }

    #[test]
    fn test_empty_dashboard() {
        let ctx = DisplayContext::new(
            Language::Az,
            Currency::Azn,
            NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
        );
        let output = format_dashboard(&[], &[], &[], &[], &ctx);
        assert!(output.contains("Balans: 0.00 ₼"));
        assert!(output.contains("Hələ əməliyyat yoxdur"));
    }
}
