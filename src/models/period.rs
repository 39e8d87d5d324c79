//! Calendar month periods
//!
//! Budgets, breakdowns and trends are all scoped to one calendar month. A
//! `MonthPeriod` can only be built for a month in 1..=12, so every date
//! computation below is total.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::error::{SmartBudgetError, SmartBudgetResult};

/// A single calendar month (e.g., "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    /// Create a monthly period, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> SmartBudgetResult<Self> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(SmartBudgetError::invalid_month(year, month));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Get the current monthly period
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Get the first day of this month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Get the last day of this month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.next()
            .start_date()
            .pred_opt()
            .unwrap_or(NaiveDate::MAX)
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Check if a year/month pair names this period
    pub fn matches(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The `window` consecutive months ending at this one, oldest first
    pub fn trailing(&self, window: usize) -> Vec<Self> {
        let mut periods = Vec::with_capacity(window);
        let mut cursor = *self;
        for _ in 0..window {
            periods.push(cursor);
            cursor = cursor.prev();
        }
        periods.reverse();
        periods
    }

    /// Full English month name ("January")
    pub fn month_name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        NAMES[(self.month as usize - 1) % 12]
    }

    /// Abbreviated label ("Jan 2025")
    pub fn short_label(&self) -> String {
        format!("{} {}", &self.month_name()[..3], self.year)
    }

    /// Parse a period string in "YYYY-MM" form
    pub fn parse(s: &str) -> SmartBudgetResult<Self> {
        let s = s.trim();
        let invalid = || SmartBudgetError::InvalidPeriod(format!("{} (expected YYYY-MM)", s));

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Ord for MonthPeriod {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for MonthPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
