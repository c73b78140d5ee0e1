//! Category breakdown
//!
//! Per-category totals for one transaction type with each category's share
//! of that type's grand total.

use std::collections::HashMap;

use crate::i18n;
use crate::models::category::{category_by_id, display_name};
use crate::models::{Currency, Language, Money, Transaction, TransactionType};

/// Total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category ID as stored on the transactions
    pub category: String,
    pub total: Money,
    pub count: usize,
    /// Share of the type's grand total, 0-100
    pub percentage: f64,
}

/// Sum transactions of `kind` per category, largest total first
///
/// Legacy category IDs are merged into their current ID.
pub fn category_totals(transactions: &[Transaction], kind: TransactionType) -> Vec<CategoryTotal> {
    let mut sums: HashMap<String, (Money, usize)> = HashMap::new();
    for txn in transactions.iter().filter(|t| t.kind == kind) {
        let key = category_by_id(&txn.category)
            .map(|c| c.id.to_string())
            .unwrap_or_else(|| txn.category.clone());
        let entry = sums.entry(key).or_insert((Money::zero(), 0));
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    let grand_total: Money = sums.values().map(|(total, _)| *total).sum();

    let mut totals: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category,
            total,
            count,
            percentage: total.percentage_of(grand_total),
        })
        .collect();

    totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    totals
}

/// Category breakdown report for one transaction type
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub kind: TransactionType,
    pub rows: Vec<CategoryTotal>,
    pub grand_total: Money,
}

impl CategoryReport {
    pub fn generate(transactions: &[Transaction], kind: TransactionType) -> Self {
        let rows = category_totals(transactions, kind);
        let grand_total = rows.iter().map(|r| r.total).sum();
        Self {
            kind,
            rows,
            grand_total,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, language: Language, currency: Currency) -> String {
        let labels = i18n::labels(language);
        let symbol = currency.symbol();
        let heading = match self.kind {
            TransactionType::Income => labels.income,
            TransactionType::Expense => labels.expenses,
        };

        let mut output = format!("{}: {}\n", labels.categories, heading);
        output.push_str(&"=".repeat(60));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<28} {:>16} {:>5} {:>7.1}%\n",
                display_name(&row.category, language),
                row.total.format_with_symbol(symbol),
                row.count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>16}\n",
            labels.total,
            self.grand_total.format_with_symbol(symbol)
        ));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewTransaction;
    use chrono::NaiveDate;

    fn expense(cents: i64, category: &str) -> Transaction {
        Transaction::new(NewTransaction {
            kind: TransactionType::Expense,
            amount: Money::from_cents(cents),
            description: "x".into(),
            category: category.into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        })
    }

    #[test]
    fn test_totals_sorted_with_percentages() {
        let transactions = vec![
            expense(2000, "food"),
            expense(6000, "transport"),
            expense(2000, "yemək"),
        ];

        let totals = category_totals(&transactions, TransactionType::Expense);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "transport");
        assert!((totals[0].percentage - 60.0).abs() < 1e-9);
        assert_eq!(totals[1].category, "food");
        assert_eq!(totals[1].count, 2);
        assert_eq!(totals[1].total.cents(), 4000);
    }

    #[test]
    fn test_other_type_ignored() {
        let transactions = vec![expense(1000, "food")];
        assert!(category_totals(&transactions, TransactionType::Income).is_empty());
    }

    #[test]
    fn test_report_format() {
        let transactions = vec![expense(1250, "food")];
        let report = CategoryReport::generate(&transactions, TransactionType::Expense);
        let output = report.format_terminal(Language::En, Currency::Usd);

        assert!(output.contains("Food"));
        assert!(output.contains("12.50 $"));
        assert!(output.contains("100.0%"));
    }
}
