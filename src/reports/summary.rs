//! Balance and monthly summaries

use chrono::{Datelike, NaiveDate};

use crate::i18n;
use crate::models::{Currency, Language, Money, Transaction, TransactionType};

use super::category::{category_totals, CategoryTotal};
use super::filter::net_total;

/// Income minus expenses over every transaction
pub fn total_balance(transactions: &[Transaction]) -> Money {
    net_total(transactions)
}

/// Income and expenses for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyStats {
    pub year: i32,
    pub month: u32,
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
    pub transaction_count: usize,
}

/// `YYYY-MM` key for a month
pub fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

/// Sum the transactions dated in the given month
pub fn monthly_stats(transactions: &[Transaction], year: i32, month: u32) -> MonthlyStats {
    let key = month_key(year, month);
    let mut stats = MonthlyStats {
        year,
        month,
        income: Money::zero(),
        expenses: Money::zero(),
        balance: Money::zero(),
        transaction_count: 0,
    };

    for txn in transactions.iter().filter(|t| t.month_key() == key) {
        match txn.kind {
            TransactionType::Income => stats.income += txn.amount,
            TransactionType::Expense => stats.expenses += txn.amount,
        }
        stats.transaction_count += 1;
    }

    stats.balance = stats.income - stats.expenses;
    stats
}

/// Monthly report: totals plus per-category breakdowns for the month
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub stats: MonthlyStats,
    pub income_by_category: Vec<CategoryTotal>,
    pub expenses_by_category: Vec<CategoryTotal>,
}

impl MonthlyReport {
    pub fn generate(transactions: &[Transaction], year: i32, month: u32) -> Self {
        let key = month_key(year, month);
        let in_month: Vec<Transaction> = transactions
            .iter()
            .filter(|t| t.month_key() == key)
            .cloned()
            .collect();

        Self {
            stats: monthly_stats(&in_month, year, month),
            income_by_category: category_totals(&in_month, TransactionType::Income),
            expenses_by_category: category_totals(&in_month, TransactionType::Expense),
        }
    }

    /// Report for the month containing `date`
    pub fn for_date(transactions: &[Transaction], date: NaiveDate) -> Self {
        Self::generate(transactions, date.year(), date.month())
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, language: Language, currency: Currency) -> String {
        let labels = i18n::labels(language);
        let symbol = currency.symbol();
        let key = month_key(self.stats.year, self.stats.month);

        let mut output = format!(
            "{}: {}\n",
            labels.monthly_report,
            i18n::month_label(&key, language)
        );
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            labels.income,
            self.stats.income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            labels.expenses,
            self.stats.expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            labels.balance,
            self.stats.balance.format_signed(symbol)
        ));

        for (heading, rows) in [
            (labels.income, &self.income_by_category),
            (labels.expenses, &self.expenses_by_category),
        ] {
            if rows.is_empty() {
                continue;
            }
            output.push('\n');
            output.push_str(heading);
            output.push('\n');
            output.push_str(&"-".repeat(60));
            output.push('\n');
            for row in rows {
                output.push_str(&format!(
                    "  {:<26} {:>16} {:>7.1}%\n",
                    crate::models::category::display_name(&row.category, language),
                    row.total.format_with_symbol(symbol),
                    row.percentage
                ));
            }
        }

        output
    }
}
