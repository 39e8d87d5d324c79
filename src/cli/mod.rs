//! CLI command handlers
//!
//! Bridges clap argument parsing with the snapshot, the reports and the
//! display/export layers.

pub mod check;
pub mod report;

pub use check::handle_check_command;
pub use report::{handle_report_command, ReportCommands};

use std::io::Write;
use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use tracing::info;

use crate::error::{SmartBudgetError, SmartBudgetResult};
use crate::models::MonthPeriod;
use crate::storage::write_atomic;

/// How a report is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// CSV with a header row
    Csv,
}

/// Parse `--period`, defaulting to the current month
pub fn parse_period(period: Option<&str>) -> SmartBudgetResult<MonthPeriod> {
    match period {
        Some(s) => MonthPeriod::parse(s),
        None => Ok(MonthPeriod::current()),
    }
}

/// Parse `--today`, defaulting to the local calendar date
pub fn parse_today(today: Option<&str>) -> SmartBudgetResult<NaiveDate> {
    match today {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            SmartBudgetError::Validation(format!(
                "Invalid date format: {}. Use YYYY-MM-DD",
                s
            ))
        }),
        None => Ok(Local::now().date_naive()),
    }
}

/// Send rendered output to a file, or to stdout when no path is given
pub fn emit(contents: &[u8], output: Option<&Path>) -> SmartBudgetResult<()> {
    match output {
        Some(path) => {
            write_atomic(path, contents)?;
            info!(path = %path.display(), bytes = contents.len(), "report exported");
            println!("Report exported to: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
