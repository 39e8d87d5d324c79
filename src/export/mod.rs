//! Export module for SmartBudget
//!
//! Writes report results in machine-readable formats:
//! - CSV: one row per aggregate record (spreadsheet-compatible)
//! - JSON: the report records as pretty-printed JSON

pub mod csv;
pub mod json;

pub use self::csv::{
    export_budget_progress_csv, export_category_breakdown_csv, export_goal_progress_csv,
    export_monthly_trend_csv, export_period_summary_csv, export_transactions_csv,
};
pub use json::{export_json, to_json_string};
