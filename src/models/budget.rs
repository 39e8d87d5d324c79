//! Budget model
//!
//! A budget is a spending ceiling for one category in one calendar month.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryRef;
use super::ids::BudgetId;
use super::money::Money;
use super::period::MonthPeriod;
use crate::error::SmartBudgetResult;

/// A monthly spending limit for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    #[serde(alias = "Id")]
    pub id: BudgetId,

    /// The category this limit applies to
    #[serde(default, alias = "category_c")]
    pub category: CategoryRef,

    /// Spending ceiling for the month
    #[serde(alias = "monthlyLimit", alias = "monthly_limit_c")]
    pub monthly_limit: Money,

    /// Calendar month (1-12)
    #[serde(alias = "month_c")]
    pub month: u32,

    /// Four-digit year
    #[serde(alias = "year_c")]
    pub year: i32,
}

impl Budget {
    /// Create a new budget
    pub fn new(id: BudgetId, category: CategoryRef, monthly_limit: Money, period: MonthPeriod) -> Self {
        Self {
            id,
            category,
            monthly_limit,
            month: period.month(),
            year: period.year(),
        }
    }

    /// Create a budget for a named category
    pub fn for_category(id: u64, category: &str, monthly_limit: Money, period: MonthPeriod) -> Self {
        Self::new(
            BudgetId::new(id),
            CategoryRef::named(category),
            monthly_limit,
            period,
        )
    }

    /// The month this budget is scoped to
    pub fn period(&self) -> SmartBudgetResult<MonthPeriod> {
        MonthPeriod::new(self.year, self.month)
    }

    /// Whether this budget is scoped to `period`
    pub fn is_for(&self, period: &MonthPeriod) -> bool {
        period.matches(self.year, self.month)
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.is_uncategorized() {
            return Err(BudgetValidationError::MissingCategory);
        }

        if !self.monthly_limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.monthly_limit));
        }

        if !(1..=12).contains(&self.month) {
            return Err(BudgetValidationError::InvalidMonth(self.month));
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:04}-{:02} limit: {}",
            self.category, self.year, self.month, self.monthly_limit
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    MissingCategory,
    NonPositiveLimit(Money),
    InvalidMonth(u32),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "Budget must have a category"),
            Self::NonPositiveLimit(limit) => {
                write!(f, "Monthly limit must be greater than zero, got {}", limit)
            }
            Self::InvalidMonth(month) => write!(f, "Month must be between 1 and 12, got {}", month),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
