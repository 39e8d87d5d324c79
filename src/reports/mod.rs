//! Reports module for SmartBudget
//!
//! The aggregation engine: budget progress, category breakdown, monthly
//! trend, goal progress, period summaries and transaction listings. Every
//! function here is a pure computation over borrowed slices of the snapshot;
//! nothing is mutated and nothing is logged.

pub mod budget_progress;
pub mod category_breakdown;
pub mod filter;
pub mod goal_progress;
pub mod monthly_trend;
pub mod period_summary;
pub mod transaction_list;

pub use budget_progress::{
    compute_budget_progress, BudgetProgress, BudgetProgressReport, BudgetStatus,
    DEFAULT_WARNING_THRESHOLD,
};
pub use category_breakdown::{categories_in_use, compute_category_breakdown, CategorySpending};
pub use filter::ReportFilter;
pub use goal_progress::{
    compute_goal_progress, compute_goal_progress_today, Deadline, GoalProgress, ProgressTier,
};
pub use monthly_trend::{
    compute_monthly_trend, MonthlyTrend, DEFAULT_TREND_WINDOW, MAX_TREND_WINDOW,
};
pub use period_summary::{compute_period_summary, recent_transactions, PeriodSummary};
pub use transaction_list::{transaction_list, SortField, SortOrder, TransactionQuery};
