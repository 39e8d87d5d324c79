//! Report formatting utilities for terminal output
//!
//! Shared helpers used by the individual report renderers.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use crate::models::finite_or_zero;

const FILLED: &str = "█";
const EMPTY: &str = "░";
const OVERLAY: &str = "▒";

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", finite_or_zero(pct))
}

/// Number of bar cells covering `pct` percent of `width`
fn cells(pct: f64, width: usize) -> usize {
    let pct = finite_or_zero(pct).max(0.0);
    ((pct / 100.0) * width as f64).round() as usize
}

/// Create a bar chart representation of `value` out of `max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return EMPTY.repeat(width);
    }
    format_progress_bar(value / max_value * 100.0, 0.0, width)
}

/// Progress bar for a percentage, with an optional over-limit segment
///
/// The main bar is always `width` cells. `overlay` is drawn after it in
/// percentage points of the same scale, and never wider than the bar.
pub fn format_progress_bar(percentage: f64, overlay: f64, width: usize) -> String {
    let filled = cells(percentage, width).min(width);
    let extra = cells(overlay, width).min(width);

    format!(
        "{}{}{}",
        FILLED.repeat(filled),
        EMPTY.repeat(width - filled),
        OVERLAY.repeat(extra)
    )
}

/// Format a date with a strftime pattern, falling back to ISO when the
/// pattern is malformed
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return date.format("%Y-%m-%d").to_string();
    }
    date.format(pattern).to_string()
}

/// "1 day" / "3 days"
pub fn pluralize_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Render rows as a table, right-aligning every column from `numeric_from` on
pub fn render_table(header: &[&str], rows: Vec<Vec<String>>, numeric_from: usize) -> String {
    let mut builder = Builder::default();
    builder.push_record(header.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(numeric_from..)).with(Alignment::right()));
    table.to_string()
}
