//! Goal and debt progress
//!
//! Progress is `min(current / target, 1) * 100`, so it always lies in
//! `[0, 100]` no matter what the stored amounts are.

use chrono::NaiveDate;

use crate::models::{Debt, Goal, Money};

/// Percentage of `target` covered by `current`, clamped to `[0, 100]`
///
/// A non-positive target counts as fully covered.
pub fn progress_percentage(current: Money, target: Money) -> f64 {
    if !target.is_positive() {
        return 100.0;
    }
    current.percentage_of(target).clamp(0.0, 100.0)
}

pub fn goal_progress(goal: &Goal) -> f64 {
    progress_percentage(goal.current_amount, goal.target_amount)
}

pub fn debt_progress(debt: &Debt) -> f64 {
    progress_percentage(debt.paid_amount, debt.amount)
}

/// Totals over a list of goals
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GoalSummary {
    pub count: usize,
    pub completed: usize,
    pub overdue: usize,
    pub total_target: Money,
    pub total_saved: Money,
}

impl GoalSummary {
    pub fn from_goals(goals: &[Goal], today: NaiveDate) -> Self {
        goals.iter().fold(Self::default(), |mut summary, goal| {
            summary.count += 1;
            summary.completed += usize::from(goal.is_completed());
            summary.overdue += usize::from(goal.is_overdue(today));
            summary.total_target += goal.target_amount;
            summary.total_saved += goal.current_amount;
            summary
        })
    }

    /// Combined progress across every goal
    pub fn overall_progress(&self) -> f64 {
        progress_percentage(self.total_saved, self.total_target)
    }
}

/// Totals over a list of debts
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DebtSummary {
    pub count: usize,
    pub paid_off: usize,
    pub overdue: usize,
    pub total_amount: Money,
    pub total_paid: Money,
    pub total_remaining: Money,
}

impl DebtSummary {
    pub fn from_debts(debts: &[Debt], today: NaiveDate) -> Self {
        debts.iter().fold(Self::default(), |mut summary, debt| {
            summary.count += 1;
            summary.paid_off += usize::from(debt.is_paid());
            summary.overdue += usize::from(debt.is_overdue(today));
            summary.total_amount += debt.amount;
            summary.total_paid += debt.paid_amount;
            summary.total_remaining += debt.remaining();
            summary
        })
    }
}

/// Debts due in or before the given month
///
/// When no debt matches, every debt is returned instead so the list is
/// never empty while debts exist.
pub fn debts_due_by(debts: &[Debt], year: i32, month: u32) -> Vec<Debt> {
    let due: Vec<Debt> = debts
        .iter()
        .filter(|d| d.is_due_by(year, month))
        .cloned()
        .collect();

    if due.is_empty() {
        debts.to_vec()
    } else {
        due
    }
}
