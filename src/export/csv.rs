//! CSV Export functionality
//!
//! Each report has its own column layout. Amounts are written as decimal
//! numbers with two places and no currency symbol.

use std::io::Write;

use crate::error::SmartBudgetResult;
use crate::models::{finite_or_zero, Money, Transaction};
use crate::reports::{BudgetProgress, CategorySpending, GoalProgress, MonthlyTrend, PeriodSummary};

fn amount(value: Money) -> String {
    format!("{:.2}", value.to_decimal())
}

fn percent(value: f64) -> String {
    format!("{:.2}", finite_or_zero(value))
}

/// Export budget progress rows
pub fn export_budget_progress_csv<W: Write>(
    rows: &[BudgetProgress],
    writer: W,
) -> SmartBudgetResult<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record([
        "Category",
        "Month",
        "Year",
        "Limit",
        "Spent",
        "Remaining",
        "Percentage",
        "Raw Percentage",
        "Over Budget",
    ])?;

    for row in rows {
        wtr.write_record([
            row.category_name().to_string(),
            row.budget.month.to_string(),
            row.budget.year.to_string(),
            amount(row.limit()),
            amount(row.spent),
            amount(row.remaining),
            percent(row.percentage),
            percent(row.raw_percentage),
            row.is_over_budget.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export a category breakdown
pub fn export_category_breakdown_csv<W: Write>(
    rows: &[CategorySpending],
    writer: W,
) -> SmartBudgetResult<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(["Category", "Amount", "Transaction Count", "Percentage"])?;

    for row in rows {
        wtr.write_record([
            row.category.clone(),
            amount(row.amount),
            row.count.to_string(),
            percent(row.percentage),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export a monthly trend, oldest month first
pub fn export_monthly_trend_csv<W: Write>(
    trend: &[MonthlyTrend],
    writer: W,
) -> SmartBudgetResult<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(["Period", "Income", "Expenses", "Net"])?;

    for month in trend {
        wtr.write_record([
            month.period.to_string(),
            amount(month.income),
            amount(month.expenses),
            amount(month.net),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export goal progress
pub fn export_goal_progress_csv<W: Write>(
    goals: &[GoalProgress],
    writer: W,
) -> SmartBudgetResult<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record([
        "Goal",
        "Target Amount",
        "Current Amount",
        "Remaining",
        "Progress",
        "Completed",
        "Target Date",
        "Days Until Target",
    ])?;

    for progress in goals {
        let goal = &progress.goal;
        wtr.write_record([
            goal.title.clone(),
            amount(goal.target_amount),
            amount(goal.current_amount),
            amount(progress.remaining_amount),
            percent(progress.progress_percent),
            progress.is_completed.to_string(),
            goal.target_date.to_string(),
            progress.days_until_target.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export a period summary as a single row
pub fn export_period_summary_csv<W: Write>(
    summary: &PeriodSummary,
    writer: W,
) -> SmartBudgetResult<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record([
        "Period",
        "Category",
        "Total Income",
        "Total Expenses",
        "Net Income",
        "Transaction Count",
        "Total Budget",
        "Budget Count",
    ])?;
    wtr.write_record([
        summary.period.to_string(),
        summary.category.clone().unwrap_or_default(),
        amount(summary.total_income),
        amount(summary.total_expenses),
        amount(summary.net_income),
        summary.transaction_count.to_string(),
        amount(summary.total_budget),
        summary.budget_count.to_string(),
    ])?;

    wtr.flush()?;
    Ok(())
}

/// Export a transaction listing, tags joined with ", "
pub fn export_transactions_csv<W: Write>(
    transactions: &[&Transaction],
    writer: W,
) -> SmartBudgetResult<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(["ID", "Date", "Type", "Category", "Description", "Amount", "Tags"])?;

    for txn in transactions {
        wtr.write_record([
            txn.id.value().to_string(),
            txn.date.format("%Y-%m-%d").to_string(),
            txn.kind.to_string(),
            txn.category.name().to_string(),
            txn.description.clone(),
            amount(txn.amount),
            txn.tags.iter().cloned().collect::<Vec<_>>().join(", "),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
