//! Spending display formatting
//!
//! Category breakdown, monthly trend and period summary views.

use crate::config::Settings;
use crate::models::{Money, Transaction};
use crate::reports::{CategorySpending, MonthlyTrend, PeriodSummary, ReportFilter};

use super::report::{format_bar, format_percentage, render_table, separator};
use super::transaction::format_transaction_rows;

fn filter_title(filter: &ReportFilter) -> String {
    match &filter.category {
        Some(category) => format!("{} [{}]", filter.period, category),
        None => filter.period.to_string(),
    }
}

/// Format a category breakdown as a table
pub fn format_category_breakdown(
    breakdown: &[CategorySpending],
    filter: &ReportFilter,
    settings: &Settings,
) -> String {
    let currency = settings.currency_symbol.as_str();
    let mut output = format!("Spending by Category: {}\n", filter_title(filter));
    output.push_str(&separator(60));
    output.push('\n');

    if breakdown.is_empty() {
        output.push_str(&format!("No expenses recorded for {}.\n", filter.period));
        return output;
    }

    let rows = breakdown
        .iter()
        .map(|row| {
            vec![
                row.category.clone(),
                row.amount.format_with_symbol(currency),
                row.count.to_string(),
                format_percentage(row.percentage),
                format_bar(row.percentage, 100.0, settings.bar_width),
            ]
        })
        .collect();

    output.push_str(&render_table(
        &["Category", "Amount", "Count", "Share", ""],
        rows,
        1,
    ));
    output.push('\n');

    let total: Money = breakdown.iter().map(|row| row.amount).sum();
    let count: usize = breakdown.iter().map(|row| row.count).sum();
    output.push_str(&format!(
        "\nTotal Spending: {} across {} transaction{}\n",
        total.format_with_symbol(currency),
        count,
        if count == 1 { "" } else { "s" }
    ));

    output
}

/// Format a monthly trend as a table, oldest month first
pub fn format_monthly_trend(trend: &[MonthlyTrend], settings: &Settings) -> String {
    let currency = settings.currency_symbol.as_str();
    let mut output = match (trend.first(), trend.last()) {
        (Some(first), Some(last)) => {
            format!("Monthly Trend: {} to {}\n", first.period, last.period)
        }
        _ => "Monthly Trend\n".to_string(),
    };
    output.push_str(&separator(60));
    output.push('\n');

    let rows = trend
        .iter()
        .map(|month| {
            vec![
                month.period.short_label(),
                month.income.format_with_symbol(currency),
                month.expenses.format_with_symbol(currency),
                month.net.format_with_symbol(currency),
            ]
        })
        .collect();

    output.push_str(&render_table(
        &["Month", "Income", "Expenses", "Net"],
        rows,
        1,
    ));
    output.push('\n');

    let income: Money = trend.iter().map(|m| m.income).sum();
    let expenses: Money = trend.iter().map(|m| m.expenses).sum();
    output.push_str(&format!(
        "\nTotals: {} in, {} out, {} net\n",
        income.format_with_symbol(currency),
        expenses.format_with_symbol(currency),
        (income - expenses).format_with_symbol(currency)
    ));

    output
}

/// Format the period summary with the most recent transactions
pub fn format_period_summary(
    summary: &PeriodSummary,
    recent: &[&Transaction],
    settings: &Settings,
) -> String {
    let currency = settings.currency_symbol.as_str();
    let filter = ReportFilter {
        period: summary.period,
        category: summary.category.clone(),
    };

    let mut output = format!("Summary: {}\n", filter_title(&filter));
    output.push_str(&separator(60));
    output.push('\n');
    output.push_str(&format!(
        "Income:        {}\n",
        summary.total_income.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Expenses:      {}\n",
        summary.total_expenses.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Net:           {}\n",
        summary.net_income.format_with_symbol(currency)
    ));
    output.push_str(&format!("Transactions:  {}\n", summary.transaction_count));

    if summary.budget_count > 0 {
        output.push_str(&format!(
            "Budgeted:      {} across {} budget{} ({} used)\n",
            summary.total_budget.format_with_symbol(currency),
            summary.budget_count,
            if summary.budget_count == 1 { "" } else { "s" },
            format_percentage(summary.budget_used_percent())
        ));
    }

    if !recent.is_empty() {
        output.push_str("\nRecent Transactions\n");
        output.push_str(&format_transaction_rows(recent, settings));
        output.push('\n');
    }

    output
}
