//! Goal Progress
//!
//! Derived progress figures for a savings goal as of a given day.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::models::{finite_or_zero, Money, SavingsGoal};

/// Where a goal stands relative to its target date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "days", rename_all = "snake_case")]
pub enum Deadline {
    /// The target date passed this many days ago
    Overdue(i64),
    DueToday,
    /// This many days are left before the target date
    Remaining(i64),
}

/// Coarse progress band used for goal indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressTier {
    Starting,
    Building,
    Halfway,
    Closing,
    Complete,
}

impl ProgressTier {
    fn from_percent(percent: f64) -> Self {
        if percent >= 100.0 {
            Self::Complete
        } else if percent >= 75.0 {
            Self::Closing
        } else if percent >= 50.0 {
            Self::Halfway
        } else if percent >= 25.0 {
            Self::Building
        } else {
            Self::Starting
        }
    }
}

/// Progress toward one savings goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal: SavingsGoal,
    /// Saved amount as a percentage of the target, at most 100
    pub progress_percent: f64,
    pub is_completed: bool,
    /// Whole days from today to the target date; negative once it has passed
    pub days_until_target: i64,
    /// Amount still to save (never negative)
    pub remaining_amount: Money,
}

impl GoalProgress {
    /// Deadline state derived from `days_until_target`
    pub fn deadline(&self) -> Deadline {
        match self.days_until_target {
            d if d < 0 => Deadline::Overdue(-d),
            0 => Deadline::DueToday,
            d => Deadline::Remaining(d),
        }
    }

    /// Progress rounded to a whole percent
    pub fn completion_rate(&self) -> u32 {
        self.progress_percent.round().clamp(0.0, 100.0) as u32
    }

    pub fn tier(&self) -> ProgressTier {
        ProgressTier::from_percent(self.progress_percent)
    }

    pub fn title(&self) -> &str {
        &self.goal.title
    }
}

/// Compute progress for `goal` as of `today`
pub fn compute_goal_progress(goal: &SavingsGoal, today: NaiveDate) -> GoalProgress {
    let target = goal.target_amount;
    let current = goal.current_amount;

    let progress_percent = if target.is_positive() {
        finite_or_zero(current.percent_of(target)).clamp(0.0, 100.0)
    } else {
        0.0
    };

    GoalProgress {
        goal: goal.clone(),
        progress_percent,
        is_completed: progress_percent >= 100.0,
        days_until_target: (goal.target_date - today).num_days(),
        remaining_amount: (target - current).non_negative(),
    }
}

/// Compute progress for `goal` as of the local calendar date
pub fn compute_goal_progress_today(goal: &SavingsGoal) -> GoalProgress {
    compute_goal_progress(goal, Local::now().date_naive())
}
