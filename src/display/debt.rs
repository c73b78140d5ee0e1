//! Debt display formatting

use crate::models::Debt;
use crate::reports::progress::{debt_progress, DebtSummary};

use super::report::{format_bar, format_percentage, separator, truncate};
use super::DisplayContext;

const BAR_WIDTH: usize = 20;

fn status(debt: &Debt, ctx: &DisplayContext) -> &'static str {
    let labels = ctx.labels();
    if debt.is_paid() {
        labels.paid
    } else if debt.is_overdue(ctx.today) {
        labels.overdue
    } else {
        ""
    }
}

pub fn format_debt_row(debt: &Debt, ctx: &DisplayContext) -> String {
    let symbol = ctx.symbol();
    let pct = debt_progress(debt);
    format!(
        "{:12} {:<20} {:<16} {} {:>5}  {} / {}  {} {}",
        debt.id.to_string(),
        truncate(&debt.title, 20),
        truncate(&debt.creditor, 16),
        format_bar(pct, BAR_WIDTH),
        format_percentage(pct),
        debt.paid_amount.format_with_symbol(symbol),
        debt.amount.format_with_symbol(symbol),
        debt.due_date.format("%Y-%m-%d"),
        status(debt, ctx)
    )
    .trim_end()
    .to_string()
}

/// Format debts with totals of amount, paid and remaining
pub fn format_debt_list(debts: &[Debt], ctx: &DisplayContext) -> String {
    let labels = ctx.labels();
    if debts.is_empty() {
        return format!("{}\n", labels.no_debts);
    }

    let mut output = String::new();
    for debt in debts {
        output.push_str(&format_debt_row(debt, ctx));
        output.push('\n');
    }

    let symbol = ctx.symbol();
    let summary = DebtSummary::from_debts(debts, ctx.today);
    output.push_str(&separator(72));
    output.push('\n');
    output.push_str(&format!(
        "{}: {}  {}: {}  {}: {}\n",
        labels.total,
        summary.total_amount.format_with_symbol(symbol),
        labels.paid,
        summary.total_paid.format_with_symbol(symbol),
        labels.remaining,
        summary.total_remaining.format_with_symbol(symbol)
    ));
    if summary.overdue > 0 {
        output.push_str(&format!("{}: {}\n", labels.overdue, summary.overdue));
    }
    output
}

pub fn format_debt_details(debt: &Debt, ctx: &DisplayContext) -> String {
    let labels = ctx.labels();
    let symbol = ctx.symbol();

    let mut output = format!("{} ({})\n", debt.title, debt.id);
    if !debt.description.is_empty() {
        output.push_str(&format!("  {}\n", debt.description));
    }
    output.push_str(&format!("  {}: {}\n", labels.creditor, debt.creditor));
    output.push_str(&format!(
        "  {} {}\n",
        format_bar(debt_progress(debt), BAR_WIDTH),
        format_percentage(debt_progress(debt))
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        labels.remaining,
        debt.remaining().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        labels.due,
        debt.due_date.format("%Y-%m-%d")
    ));
    let status = status(debt, ctx);
    if !status.is_empty() {
        output.push_str(&format!("  {}\n", status));
    }
    output
}
