//! Savings goal model
//!
//! A savings goal is a target amount to be reached by a target date. Only the
//! running saved amount is stored; progress is derived by
//! [`crate::reports::compute_goal_progress`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;
use super::transaction::deserialize_date;

/// How far out a goal is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalTerm {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "short term", alias = "short_term")]
    ShortTerm,
    #[serde(rename = "long term", alias = "long_term")]
    LongTerm,
}

impl fmt::Display for GoalTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate => write!(f, "Immediate"),
            Self::ShortTerm => write!(f, "Short Term"),
            Self::LongTerm => write!(f, "Long Term"),
        }
    }
}

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    #[serde(alias = "Id")]
    pub id: GoalId,

    #[serde(alias = "title_c")]
    pub title: String,

    #[serde(alias = "targetAmount", alias = "target_amount_c")]
    pub target_amount: Money,

    #[serde(
        alias = "targetDate",
        alias = "target_date_c",
        deserialize_with = "deserialize_date"
    )]
    pub target_date: NaiveDate,

    /// Amount saved so far
    #[serde(default, alias = "currentAmount", alias = "current_amount_c")]
    pub current_amount: Money,

    #[serde(default, alias = "notes_c")]
    pub notes: String,

    #[serde(
        default,
        alias = "goal_term_c",
        alias = "goalTerm",
        skip_serializing_if = "Option::is_none"
    )]
    pub term: Option<GoalTerm>,

    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SavingsGoal {
    /// Create a new goal with nothing saved yet
    pub fn new(
        id: GoalId,
        title: impl Into<String>,
        target_amount: Money,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            target_amount,
            target_date,
            current_amount: Money::zero(),
            notes: String::new(),
            term: None,
            created_at: None,
        }
    }

    /// Set the amount saved so far
    pub fn with_current(mut self, current_amount: Money) -> Self {
        self.current_amount = current_amount;
        self
    }

    /// Set the term classification
    pub fn with_term(mut self, term: GoalTerm) -> Self {
        self.term = Some(term);
        self
    }

    /// Set when the goal was created
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Validate the goal as of `today`
    ///
    /// A target date that has already passed is not an error; such goals are
    /// reported as overdue. The target date is only checked against the
    /// creation date, and only when that is known.
    pub fn validate(&self, today: NaiveDate) -> Result<(), GoalValidationError> {
        if self.title.trim().is_empty() {
            return Err(GoalValidationError::EmptyTitle);
        }

        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }

        if let Some(created) = self.created_at.map(|at| at.date_naive()) {
            if created > today {
                return Err(GoalValidationError::CreatedInFuture(created));
            }
            if self.target_date < created {
                return Err(GoalValidationError::TargetBeforeCreation {
                    target: self.target_date,
                    created,
                });
            }
        }

        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent(self.current_amount));
        }

        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} by {}",
            self.title,
            self.current_amount,
            self.target_amount,
            self.target_date.format("%Y-%m-%d")
        )
    }
}

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyTitle,
    NonPositiveTarget(Money),
    TargetBeforeCreation { target: NaiveDate, created: NaiveDate },
    CreatedInFuture(NaiveDate),
    NegativeCurrent(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Goal title cannot be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Target amount must be greater than zero, got {}", amount)
            }
            Self::TargetBeforeCreation { target, created } => write!(
                f,
                "Target date {} is before the goal was created ({})",
                target.format("%Y-%m-%d"),
                created.format("%Y-%m-%d")
            ),
            Self::CreatedInFuture(date) => {
                write!(f, "Creation date {} is in the future", date.format("%Y-%m-%d"))
            }
            Self::NegativeCurrent(amount) => {
                write!(f, "Current amount cannot be negative, got {}", amount)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
