//! Savings goal display formatting

use crate::config::Settings;
use crate::reports::{Deadline, GoalProgress, ProgressTier};

use super::report::{format_date, format_percentage, format_progress_bar, pluralize_days, render_table, separator};

/// "3 days overdue", "due today" or "1 day remaining"
pub fn deadline_phrase(deadline: Deadline) -> String {
    match deadline {
        Deadline::Overdue(days) => format!("{} overdue", pluralize_days(days)),
        Deadline::DueToday => "due today".to_string(),
        Deadline::Remaining(days) => format!("{} remaining", pluralize_days(days)),
    }
}

fn tier_label(tier: ProgressTier) -> &'static str {
    match tier {
        ProgressTier::Starting => "Starting",
        ProgressTier::Building => "Building",
        ProgressTier::Halfway => "Halfway",
        ProgressTier::Closing => "Almost there",
        ProgressTier::Complete => "Complete",
    }
}

/// Format goal progress as a table
pub fn format_goal_progress(goals: &[GoalProgress], settings: &Settings) -> String {
    let currency = settings.currency_symbol.as_str();
    let mut output = String::from("Savings Goals\n");
    output.push_str(&separator(60));
    output.push('\n');

    if goals.is_empty() {
        output.push_str("No savings goals.\n");
        return output;
    }

    let rows = goals
        .iter()
        .map(|progress| {
            let goal = &progress.goal;
            vec![
                goal.title.clone(),
                goal.term.map(|t| t.to_string()).unwrap_or_default(),
                goal.current_amount.format_with_symbol(currency),
                goal.target_amount.format_with_symbol(currency),
                format!(
                    "{} {}",
                    format_progress_bar(progress.progress_percent, 0.0, settings.bar_width),
                    format_percentage(progress.progress_percent)
                ),
                progress.remaining_amount.format_with_symbol(currency),
                format!(
                    "{} ({})",
                    format_date(goal.target_date, &settings.date_format),
                    deadline_phrase(progress.deadline())
                ),
                tier_label(progress.tier()).to_string(),
            ]
        })
        .collect();

    output.push_str(&render_table(
        &["Goal", "Term", "Saved", "Target", "Progress", "To Go", "Target Date", "Stage"],
        rows,
        2,
    ));
    output.push('\n');

    let completed = goals.iter().filter(|g| g.is_completed).count();
    output.push_str(&format!("\n{} of {} goals completed\n", completed, goals.len()));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalId, GoalTerm, Money, SavingsGoal};
    use crate::reports::compute_goal_progress;
    use chrono::{Duration, NaiveDate};

    #[test]
    fn test_deadline_phrases() {
        assert_eq!(deadline_phrase(Deadline::Overdue(1)), "1 day overdue");
        assert_eq!(deadline_phrase(Deadline::Overdue(4)), "4 days overdue");
        assert_eq!(deadline_phrase(Deadline::DueToday), "due today");
        assert_eq!(deadline_phrase(Deadline::Remaining(1)), "1 day remaining");
        assert_eq!(deadline_phrase(Deadline::Remaining(30)), "30 days remaining");
    }

    #[test]
    fn test_format_goal_progress() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let goal = SavingsGoal::new(
            GoalId::new(1),
            "Vacation",
            Money::from_cents(100000),
            today + Duration::days(30),
        )
        .with_current(Money::from_cents(25000))
        .with_term(GoalTerm::ShortTerm);

        let progress = vec![compute_goal_progress(&goal, today)];
        let output = format_goal_progress(&progress, &Settings::default());

        assert!(output.contains("Vacation"));
        assert!(output.contains("Short Term"));
        assert!(output.contains("25.0%"));
        assert!(output.contains("$750.00"));
        assert!(output.contains("2025-07-01 (30 days remaining)"));
        assert!(output.contains("0 of 1 goals completed"));
    }

    #[test]
    fn test_no_goals() {
        let output = format_goal_progress(&[], &Settings::default());
        assert!(output.contains("No savings goals."));
    }
}
