//! Budget progress display formatting

use crate::config::Settings;
use crate::reports::{BudgetProgress, BudgetProgressReport, BudgetStatus};

use super::report::{format_percentage, format_progress_bar, render_table, separator};

/// Short label for a budget status
pub fn status_label(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::OnTrack => "On track",
        BudgetStatus::Warning => "Warning",
        BudgetStatus::OverBudget => "Over budget",
    }
}

/// "$12.00 remaining" or "$3.50 over budget"
pub fn budget_phrase(progress: &BudgetProgress, currency: &str) -> String {
    if progress.is_over_budget {
        format!("{} over budget", progress.overage().format_with_symbol(currency))
    } else {
        format!("{} remaining", progress.remaining.format_with_symbol(currency))
    }
}

/// Format the budget progress report as a table
pub fn format_budget_progress(report: &BudgetProgressReport, settings: &Settings) -> String {
    let currency = settings.currency_symbol.as_str();
    let mut output = format!(
        "Budget Progress: {} {} ({})\n",
        report.period.month_name(),
        report.period.year(),
        report.period
    );
    output.push_str(&separator(60));
    output.push('\n');

    if report.is_empty() {
        output.push_str(&format!("No budgets set for {}.\n", report.period));
        return output;
    }

    let rows = report
        .rows
        .iter()
        .map(|row| {
            vec![
                row.category_name().to_string(),
                row.limit().format_with_symbol(currency),
                row.spent.format_with_symbol(currency),
                format_percentage(row.percentage),
                format_progress_bar(
                    row.percentage,
                    row.overspend_overlay(settings.overspend_overlay_cap),
                    settings.bar_width,
                ),
                budget_phrase(row, currency),
                status_label(row.status(settings.warning_threshold)).to_string(),
            ]
        })
        .collect();

    output.push_str(&render_table(
        &["Category", "Limit", "Spent", "Used", "Progress", "Balance", "Status"],
        rows,
        1,
    ));
    output.push('\n');
    output.push_str(&format!(
        "\nTotal: {} spent of {}\n",
        report.total_spent.format_with_symbol(currency),
        report.total_limit.format_with_symbol(currency)
    ));

    match report.overspent_count() {
        0 => {}
        1 => output.push_str("1 budget is over its limit\n"),
        n => output.push_str(&format!("{} budgets are over their limit\n", n)),
    }

    output
}
