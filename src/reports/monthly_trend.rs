//! Monthly Trend
//!
//! Income, expenses and net for a trailing window of months.

use serde::Serialize;

use crate::error::{SmartBudgetError, SmartBudgetResult};
use crate::models::{Money, MonthPeriod, Transaction, TransactionKind};

/// Number of months shown when no window is requested
pub const DEFAULT_TREND_WINDOW: usize = 6;

/// Largest window accepted (one hundred years)
pub const MAX_TREND_WINDOW: usize = 1200;

/// Totals for one month of the trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTrend {
    #[serde(flatten)]
    pub period: MonthPeriod,
    pub income: Money,
    pub expenses: Money,
    /// Income minus expenses (negative when spending exceeded income)
    pub net: Money,
}

impl MonthlyTrend {
    fn empty(period: MonthPeriod) -> Self {
        Self {
            period,
            income: Money::zero(),
            expenses: Money::zero(),
            net: Money::zero(),
        }
    }

    /// Whether no money moved in this month
    pub fn is_empty(&self) -> bool {
        self.income.is_zero() && self.expenses.is_zero()
    }
}

/// Compute `window_size` consecutive months ending at `anchor`, oldest first
///
/// Months without transactions are reported with zero totals, so the result
/// always has exactly `window_size` entries. Windows outside
/// `1..=MAX_TREND_WINDOW` are rejected.
pub fn compute_monthly_trend(
    transactions: &[Transaction],
    anchor: MonthPeriod,
    window_size: usize,
) -> SmartBudgetResult<Vec<MonthlyTrend>> {
    if window_size == 0 || window_size > MAX_TREND_WINDOW {
        return Err(SmartBudgetError::InvalidWindow(window_size));
    }

    let mut trend: Vec<MonthlyTrend> = anchor
        .trailing(window_size)
        .into_iter()
        .map(MonthlyTrend::empty)
        .collect();

    let first = trend[0].period;
    for txn in transactions {
        let period = MonthPeriod::containing(txn.date);
        if period < first || period > anchor {
            continue;
        }

        // Entries are consecutive months, so the offset from the first one
        // is the index.
        let offset = (period.year() - first.year()) * 12 + period.month() as i32
            - first.month() as i32;
        let Some(entry) = usize::try_from(offset).ok().and_then(|i| trend.get_mut(i)) else {
            continue;
        };

        let amount = txn.amount.non_negative();
        match txn.kind {
            TransactionKind::Income => entry.income += amount,
            TransactionKind::Expense => entry.expenses += amount,
        }
    }

    for entry in &mut trend {
        entry.net = entry.income - entry.expenses;
    }

    Ok(trend)
}
