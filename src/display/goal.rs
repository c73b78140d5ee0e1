//! Goal display formatting

use crate::models::Goal;
use crate::reports::progress::{goal_progress, GoalSummary};

use super::report::{format_bar, format_percentage, separator};
use super::DisplayContext;

const BAR_WIDTH: usize = 20;

fn status(goal: &Goal, ctx: &DisplayContext) -> &'static str {
    let labels = ctx.labels();
    if goal.is_completed() {
        labels.completed
    } else if goal.is_overdue(ctx.today) {
        labels.overdue
    } else {
        ""
    }
}

pub fn format_goal_row(goal: &Goal, ctx: &DisplayContext) -> String {
    let symbol = ctx.symbol();
    let pct = goal_progress(goal);
    format!(
        "{:12} {:<24} {} {:>5}  {} / {}  {} {}",
        goal.id.to_string(),
        goal.title,
        format_bar(pct, BAR_WIDTH),
        format_percentage(pct),
        goal.current_amount.format_with_symbol(symbol),
        goal.target_amount.format_with_symbol(symbol),
        goal.deadline.format("%Y-%m-%d"),
        status(goal, ctx)
    )
    .trim_end()
    .to_string()
}

/// Format goals with a summary footer
pub fn format_goal_list(goals: &[Goal], ctx: &DisplayContext) -> String {
    let labels = ctx.labels();
    if goals.is_empty() {
        return format!("{}\n", labels.no_goals);
    }

    let mut output = String::new();
    for goal in goals {
        output.push_str(&format_goal_row(goal, ctx));
        output.push('\n');
    }

    let summary = GoalSummary::from_goals(goals, ctx.today);
    output.push_str(&separator(72));
    output.push('\n');
    output.push_str(&format!(
        "{}: {} / {} ({})  {}: {}/{}\n",
        labels.total,
        summary.total_saved.format_with_symbol(ctx.symbol()),
        summary.total_target.format_with_symbol(ctx.symbol()),
        format_percentage(summary.overall_progress()),
        labels.completed,
        summary.completed,
        summary.count
    ));
    output
}

pub fn format_goal_details(goal: &Goal, ctx: &DisplayContext) -> String {
    let labels = ctx.labels();
    let symbol = ctx.symbol();

    let mut output = format!("{} ({})\n", goal.title, goal.id);
    if !goal.description.is_empty() {
        output.push_str(&format!("  {}\n", goal.description));
    }
    output.push_str(&format!(
        "  {} {}\n",
        format_bar(goal_progress(goal), BAR_WIDTH),
        format_percentage(goal_progress(goal))
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        labels.remaining,
        goal.remaining().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        labels.deadline,
        goal.deadline.format("%Y-%m-%d")
    ));
    let status = status(goal, ctx);
    if !status.is_empty() {
        output.push_str(&format!("  {}\n", status));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Language, Money, NewGoal};
    use chrono::NaiveDate;

    fn ctx() -> DisplayContext {
        DisplayContext::new(
            Language::En,
            Currency::Usd,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        )
    }

    fn goal(current: i64, deadline: (i32, u32, u32)) -> Goal {
        Goal::new(NewGoal {
            title: "Vacation".into(),
            description: "Summer trip".into(),
            target_amount: Money::from_cents(100000),
            current_amount: Money::from_cents(current),
            deadline: NaiveDate::from_ymd_opt(deadline.0, deadline.1, deadline.2).unwrap(),
            category: "Travel".into(),
        })
    }

    #[test]
    fn test_row_statuses() {
        assert!(format_goal_row(&goal(100000, (2025, 8, 1)), &ctx()).ends_with("Completed"));
        assert!(format_goal_row(&goal(10, (2025, 5, 1)), &ctx()).ends_with("Overdue"));
        assert!(format_goal_row(&goal(25000, (2025, 8, 1)), &ctx()).contains("25%"));
    }

    #[test]
    fn test_list_summary() {
        let output = format_goal_list(
            &[goal(100000, (2025, 8, 1)), goal(0, (2025, 8, 1))],
            &ctx(),
        );
        assert!(output.contains("Total: 1000.00 $ / 2000.00 $ (50%)"));
        assert!(output.contains("Completed: 1/2"));
    }

    #[test]
    fn test_details() {
        let output = format_goal_details(&goal(40000, (2025, 8, 1)), &ctx());
        assert!(output.contains("Summer trip"));
        assert!(output.contains("Remaining: 600.00 $"));
    }
}
