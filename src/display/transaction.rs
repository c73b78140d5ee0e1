//! Transaction display formatting

use crate::models::category::{categories_for, display_name};
use crate::models::{Transaction, TransactionType};

use super::report::{separator, truncate};
use super::DisplayContext;

/// One list row: id, date, description, category, signed amount
pub fn format_transaction_row(txn: &Transaction, ctx: &DisplayContext) -> String {
    format!(
        "{:12} {} {:<24} {:<16} {:>14}",
        txn.id.to_string(),
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.description, 24),
        truncate(&display_name(&txn.category, ctx.language), 16),
        txn.signed_amount().format_signed(ctx.symbol())
    )
}

/// Format a list of transactions, newest first, with a net total line
pub fn format_transaction_list(transactions: &[Transaction], ctx: &DisplayContext) -> String {
    let labels = ctx.labels();
    if transactions.is_empty() {
        return format!("{}\n", labels.no_transactions);
    }

    let mut output = String::new();
    for txn in transactions {
        output.push_str(&format_transaction_row(txn, ctx));
        output.push('\n');
    }

    let net: crate::models::Money = transactions.iter().map(Transaction::signed_amount).sum();
    output.push_str(&separator(72));
    output.push('\n');
    output.push_str(&format!(
        "{} ({}): {}\n",
        labels.total,
        transactions.len(),
        net.format_signed(ctx.symbol())
    ));
    output
}

pub fn format_transaction_details(txn: &Transaction, ctx: &DisplayContext) -> String {
    let labels = ctx.labels();
    let kind = match txn.kind {
        TransactionType::Income => labels.income,
        TransactionType::Expense => labels.expense,
    };

    let mut output = String::new();
    output.push_str(&format!("ID:          {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(ctx.symbol())
    ));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Category:    {}\n",
        display_name(&txn.category, ctx.language)
    ));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output
}

/// The category catalog for one transaction type
pub fn format_category_list(kind: TransactionType, ctx: &DisplayContext) -> String {
    let labels = ctx.labels();
    let heading = match kind {
        TransactionType::Income => labels.income,
        TransactionType::Expense => labels.expenses,
    };

    let mut output = format!("{}: {}\n", labels.categories, heading);
    for category in categories_for(kind) {
        output.push_str(&format!(
            "  {:<16} {}\n",
            category.id,
            category.name(ctx.language)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Language, Money, NewTransaction};
    use chrono::NaiveDate;

    fn ctx(language: Language) -> DisplayContext {
        DisplayContext::new(
            language,
            Currency::Azn,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        )
    }

    fn expense() -> Transaction {
        Transaction::new(NewTransaction {
            kind: TransactionType::Expense,
            amount: Money::from_cents(4550),
            description: "Bazar".into(),
            category: "food".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
        })
    }

    #[test]
    fn test_row_shows_signed_amount_and_localized_category() {
        let row = format_transaction_row(&expense(), &ctx(Language::Ru));
        assert!(row.contains("2025-03-09"));
        assert!(row.contains("Еда"));
        assert!(row.contains("-45.50 ₼"));
        assert!(row.starts_with("txn-"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_transaction_list(&[], &ctx(Language::En)),
            "No transactions yet\n"
        );
    }

    #[test]
    fn test_list_total() {
        let output = format_transaction_list(&[expense(), expense()], &ctx(Language::En));
        assert!(output.contains("Total (2): -91.00 ₼"));
    }

    #[test]
    fn test_category_list() {
        let output = format_category_list(TransactionType::Income, &ctx(Language::Az));
        assert!(output.contains("salary"));
        assert!(output.contains("Maaş"));
        assert!(!output.contains("food"));
    }
}
