//! Display formatting for terminal output
//!
//! Renders report results as tables with progress bars, currency amounts,
//! deadline phrases and transaction registers.

pub mod budget;
pub mod goal;
pub mod issues;
pub mod report;
pub mod spending;
pub mod transaction;

pub use budget::{budget_phrase, format_budget_progress, status_label};
pub use goal::{deadline_phrase, format_goal_progress};
pub use issues::format_validation_issues;
pub use spending::{format_category_breakdown, format_monthly_trend, format_period_summary};
pub use transaction::{format_transaction_list, format_transaction_rows, signed_amount};
