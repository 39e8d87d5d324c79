//! Report filters
//!
//! Reports are scoped to one month and optionally narrowed to one category.

use serde::Serialize;

use crate::models::{MonthPeriod, Transaction};

/// Period and optional category a report is restricted to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportFilter {
    pub period: MonthPeriod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ReportFilter {
    /// Every category in `period`
    pub fn month(period: MonthPeriod) -> Self {
        Self {
            period,
            category: None,
        }
    }

    /// Restrict to an exact category name; blank names mean "all categories"
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.trim().is_empty() {
            None
        } else {
            Some(category.trim().to_string())
        };
        self
    }

    /// Whether a transaction falls inside this filter, regardless of kind
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.period.contains(txn.date)
            && self
                .category
                .as_deref()
                .map_or(true, |name| txn.category.is_named(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_filter_ignores_category() {
        let filter = ReportFilter::month(MonthPeriod::new(2025, 1).unwrap());
        let txn = Transaction::expense(1, "Food", Money::from_cents(100), date(2025, 1, 9));
        assert!(filter.matches(&txn));

        let february = Transaction::expense(2, "Food", Money::from_cents(100), date(2025, 2, 9));
        assert!(!filter.matches(&february));
    }

    #[test]
    fn test_category_filter_is_exact() {
        let filter = ReportFilter::month(MonthPeriod::new(2025, 1).unwrap()).with_category("Food");
        let food = Transaction::expense(1, "Food", Money::from_cents(100), date(2025, 1, 9));
        let fast_food = Transaction::expense(2, "Fast Food", Money::from_cents(100), date(2025, 1, 9));
        assert!(filter.matches(&food));
        assert!(!filter.matches(&fast_food));
    }

    #[test]
    fn test_blank_category_means_all() {
        let filter = ReportFilter::month(MonthPeriod::new(2025, 1).unwrap()).with_category("  ");
        assert!(filter.category.is_none());
    }
}
