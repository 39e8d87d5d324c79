//! Budget Progress
//!
//! Spent-vs-limit tracking for monthly category budgets.

use serde::Serialize;

use crate::models::{finite_or_zero, Budget, Money, MonthPeriod, Transaction};

/// Percentage at which a budget that is not yet over is flagged as a warning
pub const DEFAULT_WARNING_THRESHOLD: f64 = 80.0;

/// How a budget is tracking against its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    Warning,
    OverBudget,
}

/// One budget with its spending for the reporting period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    /// The budget as it was passed in
    #[serde(flatten)]
    pub budget: Budget,
    /// Sum of matching expenses
    pub spent: Money,
    /// Spent as a percentage of the limit, clamped to 0..=100 for display
    pub percentage: f64,
    /// Spent as a percentage of the limit, unclamped
    pub raw_percentage: f64,
    /// What is left before the limit is reached (never negative)
    pub remaining: Money,
    /// Whether spending exceeded the limit
    pub is_over_budget: bool,
}

impl BudgetProgress {
    /// Derive progress figures for `budget` given what was spent
    pub fn new(budget: Budget, spent: Money) -> Self {
        let limit = budget.monthly_limit;
        let raw_percentage = if limit.is_positive() {
            spent.percent_of(limit)
        } else {
            0.0
        };

        Self {
            spent,
            percentage: raw_percentage.clamp(0.0, 100.0),
            raw_percentage,
            remaining: (limit - spent).non_negative(),
            is_over_budget: spent > limit,
            budget,
        }
    }

    /// The budget's category name
    pub fn category_name(&self) -> &str {
        self.budget.category.name()
    }

    /// The budget's limit
    pub fn limit(&self) -> Money {
        self.budget.monthly_limit
    }

    /// How far spending went past the limit (zero when within budget)
    pub fn overage(&self) -> Money {
        if self.is_over_budget {
            (self.budget.monthly_limit - self.spent).abs()
        } else {
            Money::zero()
        }
    }

    /// Classify this budget for status indicators
    pub fn status(&self, warning_threshold: f64) -> BudgetStatus {
        if self.is_over_budget {
            BudgetStatus::OverBudget
        } else if self.percentage >= warning_threshold {
            BudgetStatus::Warning
        } else {
            BudgetStatus::OnTrack
        }
    }

    /// Width (in percentage points) of the over-budget bar segment
    ///
    /// The segment shows how far past 100% spending went, capped at `cap`
    /// points so a wildly overspent budget does not swamp the bar.
    pub fn overspend_overlay(&self, cap: f64) -> f64 {
        if !self.is_over_budget {
            return 0.0;
        }
        let cap = finite_or_zero(cap).max(0.0);
        finite_or_zero(self.raw_percentage - 100.0).clamp(0.0, cap)
    }
}

/// Compute spent-vs-limit progress for each budget in `period`
///
/// A transaction counts toward a budget when it is an expense, is filed under
/// the budget's category and occurred within `period`. Output order matches
/// `budgets`; an empty input gives an empty output.
pub fn compute_budget_progress(
    budgets: &[Budget],
    transactions: &[Transaction],
    period: MonthPeriod,
) -> Vec<BudgetProgress> {
    budgets
        .iter()
        .map(|budget| {
            let spent: Money = transactions
                .iter()
                .filter(|txn| {
                    txn.is_expense() && txn.category == budget.category && period.contains(txn.date)
                })
                .map(|txn| txn.amount.non_negative())
                .sum();

            BudgetProgress::new(budget.clone(), spent)
        })
        .collect()
}

/// Budget progress for a whole period with totals
#[derive(Debug, Clone, Serialize)]
pub struct BudgetProgressReport {
    /// The period spending was measured over
    pub period: MonthPeriod,
    /// One row per budget, in input order
    pub rows: Vec<BudgetProgress>,
    /// Sum of all limits
    pub total_limit: Money,
    /// Sum of all spending against those limits
    pub total_spent: Money,
}

impl BudgetProgressReport {
    /// Generate budget progress for the budgets set for `period`
    ///
    /// Budgets scoped to other months are left out.
    pub fn generate(budgets: &[Budget], transactions: &[Transaction], period: MonthPeriod) -> Self {
        let scoped: Vec<Budget> = budgets
            .iter()
            .filter(|budget| budget.is_for(&period))
            .cloned()
            .collect();
        let rows = compute_budget_progress(&scoped, transactions, period);
        let total_limit = rows.iter().map(|row| row.limit()).sum();
        let total_spent = rows.iter().map(|row| row.spent).sum();

        Self {
            period,
            rows,
            total_limit,
            total_spent,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get list of overspent budgets
    pub fn overspent(&self) -> Vec<&BudgetProgress> {
        self.rows.iter().filter(|row| row.is_over_budget).collect()
    }

    /// Get count of overspent budgets
    pub fn overspent_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_over_budget).count()
    }
}
