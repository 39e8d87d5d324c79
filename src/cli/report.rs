//! CLI commands for reports
//!
//! Each report renders as a table by default. `--format json|csv` switches
//! to machine-readable output, and `--output` writes it to a file (CSV unless
//! JSON was asked for).

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use tracing::{debug, warn};

use super::{emit, parse_period, parse_today, OutputFormat};
use crate::config::Settings;
use crate::display::{
    format_budget_progress, format_category_breakdown, format_goal_progress,
    format_monthly_trend, format_period_summary, format_transaction_list,
};
use crate::error::SmartBudgetResult;
use crate::export::{
    export_budget_progress_csv, export_category_breakdown_csv, export_goal_progress_csv,
    export_json, export_monthly_trend_csv, export_period_summary_csv, export_transactions_csv,
};
use crate::models::{MonthPeriod, TransactionKind};
use crate::reports::{
    categories_in_use, compute_category_breakdown, compute_goal_progress,
    compute_goal_progress_today, compute_monthly_trend, compute_period_summary,
    recent_transactions, transaction_list, BudgetProgressReport, GoalProgress, ReportFilter,
    SortField, SortOrder, TransactionQuery,
};
use crate::storage::Dataset;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Spent-vs-limit progress for each budget in a month
    #[command(alias = "budgets")]
    Progress {
        /// Month to report on (e.g., "2025-01"); defaults to the current month
        #[arg(short, long)]
        period: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write CSV (or JSON with --format json) to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending grouped by category, largest first
    #[command(alias = "spending")]
    Breakdown {
        #[arg(short, long)]
        period: Option<String>,

        /// Only include this category (exact name)
        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Income, expenses and net for the months leading up to a period
    Trend {
        /// Last month of the window; defaults to the current month
        #[arg(short, long)]
        period: Option<String>,

        /// Number of months; defaults to the configured trend window
        #[arg(short, long)]
        window: Option<usize>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Headline totals for a month with the latest transactions
    Summary {
        #[arg(short, long)]
        period: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        /// Number of recent transactions to list
        #[arg(long, default_value_t = 5)]
        recent: usize,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Search, filter and sort transactions across all months
    #[command(alias = "list")]
    Transactions {
        /// Text to look for in descriptions and category names (any case)
        #[arg(short, long)]
        search: Option<String>,

        /// Only include this category (exact name)
        #[arg(short, long)]
        category: Option<String>,

        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<KindArg>,

        /// Only include this month (e.g., "2025-01"); all months by default
        #[arg(short, long)]
        period: Option<String>,

        #[arg(long, value_enum, default_value_t = SortArg::Date)]
        sort: SortArg,

        #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
        order: OrderArg,

        /// Maximum number of transactions to list
        #[arg(short, long)]
        limit: Option<usize>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Progress toward each savings goal
    Goals {
        /// Date to measure deadlines from (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        today: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// `--type` values for the transaction listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

/// `--sort` values for the transaction listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortArg {
    #[default]
    Date,
    Amount,
}

/// `--order` values for the transaction listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OrderArg {
    Asc,
    #[default]
    Desc,
}

/// Resolve the format actually written: a table cannot go to a file
fn effective_format(format: OutputFormat, output: &Option<PathBuf>) -> OutputFormat {
    match (format, output) {
        (OutputFormat::Table, Some(_)) => OutputFormat::Csv,
        (format, _) => format,
    }
}

/// Handle report commands
pub fn handle_report_command(
    dataset: &Dataset,
    settings: &Settings,
    cmd: ReportCommands,
) -> SmartBudgetResult<()> {
    match cmd {
        ReportCommands::Progress {
            period,
            format,
            output,
        } => {
            let period = parse_period(period.as_deref())?;
            debug!(
                %period,
                start = %period.start_date(),
                end = %period.end_date(),
                ?format,
                "budget progress report"
            );

            let report =
                BudgetProgressReport::generate(&dataset.budgets, &dataset.transactions, period);

            let mut buf = Vec::new();
            match effective_format(format, &output) {
                OutputFormat::Table => {
                    buf.extend_from_slice(format_budget_progress(&report, settings).as_bytes())
                }
                OutputFormat::Json => export_json(&report.rows, &mut buf)?,
                OutputFormat::Csv => export_budget_progress_csv(&report.rows, &mut buf)?,
            }
            emit(&buf, output.as_deref())
        }

        ReportCommands::Breakdown {
            period,
            category,
            format,
            output,
        } => {
            let filter = build_filter(period.as_deref(), category)?;
            debug!(period = %filter.period, category = ?filter.category, ?format, "category breakdown report");

            if let Some(category) = &filter.category {
                if !categories_in_use(&dataset.transactions).contains(category) {
                    warn!(%category, "no transactions use this category");
                }
            }

            let breakdown = compute_category_breakdown(&dataset.transactions, &filter);

            let mut buf = Vec::new();
            match effective_format(format, &output) {
                OutputFormat::Table => buf.extend_from_slice(
                    format_category_breakdown(&breakdown, &filter, settings).as_bytes(),
                ),
                OutputFormat::Json => export_json(&breakdown, &mut buf)?,
                OutputFormat::Csv => export_category_breakdown_csv(&breakdown, &mut buf)?,
            }
            emit(&buf, output.as_deref())
        }

        ReportCommands::Trend {
            period,
            window,
            format,
            output,
        } => {
            let anchor = parse_period(period.as_deref())?;
            let window = window.unwrap_or(settings.trend_window);
            debug!(%anchor, window, ?format, "monthly trend report");

            let trend = compute_monthly_trend(&dataset.transactions, anchor, window)?;

            let mut buf = Vec::new();
            match effective_format(format, &output) {
                OutputFormat::Table => {
                    buf.extend_from_slice(format_monthly_trend(&trend, settings).as_bytes())
                }
                OutputFormat::Json => export_json(&trend, &mut buf)?,
                OutputFormat::Csv => export_monthly_trend_csv(&trend, &mut buf)?,
            }
            emit(&buf, output.as_deref())
        }

        ReportCommands::Summary {
            period,
            category,
            recent,
            format,
            output,
        } => {
            let filter = build_filter(period.as_deref(), category)?;
            debug!(period = %filter.period, category = ?filter.category, ?format, "period summary report");

            let summary = compute_period_summary(&dataset.transactions, &dataset.budgets, &filter);

            let mut buf = Vec::new();
            match effective_format(format, &output) {
                OutputFormat::Table => {
                    let latest = recent_transactions(
                        dataset.transactions.iter().filter(|txn| filter.matches(txn)),
                        recent,
                    );
                    buf.extend_from_slice(
                        format_period_summary(&summary, &latest, settings).as_bytes(),
                    );
                }
                OutputFormat::Json => export_json(&summary, &mut buf)?,
                OutputFormat::Csv => export_period_summary_csv(&summary, &mut buf)?,
            }
            emit(&buf, output.as_deref())
        }

        ReportCommands::Transactions {
            search,
            category,
            kind,
            period,
            sort,
            order,
            limit,
            format,
            output,
        } => {
            let query = build_query(search, category, kind, period.as_deref(), sort, order, limit)?;
            debug!(?query, ?format, "transaction listing");

            let rows = transaction_list(&dataset.transactions, &query);

            let mut buf = Vec::new();
            match effective_format(format, &output) {
                OutputFormat::Table => buf.extend_from_slice(
                    format_transaction_list(&rows, &query, settings).as_bytes(),
                ),
                OutputFormat::Json => export_json(&rows, &mut buf)?,
                OutputFormat::Csv => export_transactions_csv(&rows, &mut buf)?,
            }
            emit(&buf, output.as_deref())
        }

        ReportCommands::Goals {
            today,
            format,
            output,
        } => {
            let goals: Vec<GoalProgress> = match today.as_deref() {
                Some(raw) => {
                    let today = parse_today(Some(raw))?;
                    debug!(%today, ?format, "goal progress report");
                    dataset
                        .savings_goals
                        .iter()
                        .map(|goal| compute_goal_progress(goal, today))
                        .collect()
                }
                None => {
                    debug!(?format, "goal progress report as of today");
                    dataset
                        .savings_goals
                        .iter()
                        .map(compute_goal_progress_today)
                        .collect()
                }
            };

            let mut buf = Vec::new();
            match effective_format(format, &output) {
                OutputFormat::Table => {
                    buf.extend_from_slice(format_goal_progress(&goals, settings).as_bytes())
                }
                OutputFormat::Json => export_json(&goals, &mut buf)?,
                OutputFormat::Csv => export_goal_progress_csv(&goals, &mut buf)?,
            }
            emit(&buf, output.as_deref())
        }
    }
}

fn build_filter(period: Option<&str>, category: Option<String>) -> SmartBudgetResult<ReportFilter> {
    let filter = ReportFilter::month(parse_period(period)?);
    Ok(match category {
        Some(category) => filter.with_category(category),
        None => filter,
    })
}

fn build_query(
    search: Option<String>,
    category: Option<String>,
    kind: Option<KindArg>,
    period: Option<&str>,
    sort: SortArg,
    order: OrderArg,
    limit: Option<usize>,
) -> SmartBudgetResult<TransactionQuery> {
    let field = match sort {
        SortArg::Date => SortField::Date,
        SortArg::Amount => SortField::Amount,
    };
    let order = match order {
        OrderArg::Asc => SortOrder::Ascending,
        OrderArg::Desc => SortOrder::Descending,
    };

    let mut query = TransactionQuery::default().sorted_by(field, order);
    if let Some(search) = search {
        query = query.with_search(search);
    }
    if let Some(category) = category {
        query = query.with_category(category);
    }
    if let Some(kind) = kind {
        query = query.with_kind(kind.into());
    }
    if let Some(period) = period {
        query = query.in_period(MonthPeriod::parse(period)?);
    }
    if let Some(limit) = limit {
        query = query.with_limit(limit);
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SmartBudgetError;
    use tempfile::TempDir;

    fn dataset() -> Dataset {
        Dataset::from_json_str(
            r#"{
                "transactions": [
                    { "id": 1, "type": "expense", "amount": 300, "category": "Food",
                      "description": "Groceries", "date": "2025-01-05" },
                    { "id": 2, "type": "expense", "amount": 250, "category": { "Name": "Food" },
                      "description": "Dinner", "date": "2025-01-20" }
                ],
                "budgets": [
                    { "id": 1, "category": { "Name": "Food" }, "monthly_limit": 500, "month": 1, "year": 2025 }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_table_with_output_becomes_csv() {
        assert_eq!(
            effective_format(OutputFormat::Table, &Some(PathBuf::from("x"))),
            OutputFormat::Csv
        );
        assert_eq!(effective_format(OutputFormat::Json, &None), OutputFormat::Json);
    }

    #[test]
    fn test_progress_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("progress.csv");

        handle_report_command(
            &dataset(),
            &Settings::default(),
            ReportCommands::Progress {
                period: Some("2025-01".into()),
                format: OutputFormat::Table,
                output: Some(path.clone()),
            },
        )
        .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Food,1,2025,500.00,550.00,0.00,100.00,110.00,true"));
    }

    #[test]
    fn test_zero_window_is_rejected() {
        let err = handle_report_command(
            &dataset(),
            &Settings::default(),
            ReportCommands::Trend {
                period: Some("2025-01".into()),
                window: Some(0),
                format: OutputFormat::Table,
                output: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, SmartBudgetError::InvalidWindow(0)));
    }

    #[test]
    fn test_invalid_period_is_rejected() {
        let err = handle_report_command(
            &dataset(),
            &Settings::default(),
            ReportCommands::Breakdown {
                period: Some("2025-00".into()),
                category: None,
                format: OutputFormat::Json,
                output: None,
            },
        )
        .unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn test_build_query_maps_arguments() {
        let query = build_query(
            Some(" dinner ".into()),
            None,
            Some(KindArg::Expense),
            Some("2025-01"),
            SortArg::Amount,
            OrderArg::Asc,
            Some(3),
        )
        .unwrap();

        assert_eq!(query.search.as_deref(), Some("dinner"));
        assert_eq!(query.kind, Some(TransactionKind::Expense));
        assert_eq!(query.period, Some(MonthPeriod::new(2025, 1).unwrap()));
        assert_eq!(query.sort_by, SortField::Amount);
        assert_eq!(query.order, SortOrder::Ascending);
        assert_eq!(query.limit, Some(3));

        assert!(build_query(None, None, None, Some("2025-13"), SortArg::Date, OrderArg::Desc, None)
            .unwrap_err()
            .is_domain());
    }

    #[test]
    fn test_transactions_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");

        handle_report_command(
            &dataset(),
            &Settings::default(),
            ReportCommands::Transactions {
                search: Some("DINNER".into()),
                category: None,
                kind: None,
                period: None,
                sort: SortArg::Date,
                order: OrderArg::Desc,
                limit: None,
                format: OutputFormat::Table,
                output: Some(path.clone()),
            },
        )
        .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "2,2025-01-20,expense,Food,Dinner,250.00,");
    }
}
