//! Period Summary
//!
//! Headline figures for one month: income, expenses, net and the total
//! budgeted for that month.

use serde::Serialize;

use super::filter::ReportFilter;
use crate::models::{Budget, Money, MonthPeriod, Transaction, TransactionKind};

/// Totals for a filtered period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    pub period: MonthPeriod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub total_income: Money,
    pub total_expenses: Money,
    pub net_income: Money,
    /// Transactions of either kind matching the filter
    pub transaction_count: usize,
    /// Sum of limits of the budgets set for this period
    pub total_budget: Money,
    pub budget_count: usize,
}

impl PeriodSummary {
    /// Share of the period's budget already spent
    pub fn budget_used_percent(&self) -> f64 {
        self.total_expenses.percent_of(self.total_budget)
    }
}

/// Summarize the transactions and budgets of a period
///
/// Budgets are matched on month and year only; the category filter narrows
/// transactions, not budgets.
pub fn compute_period_summary(
    transactions: &[Transaction],
    budgets: &[Budget],
    filter: &ReportFilter,
) -> PeriodSummary {
    let mut total_income = Money::zero();
    let mut total_expenses = Money::zero();
    let mut transaction_count = 0;

    for txn in transactions.iter().filter(|txn| filter.matches(txn)) {
        let amount = txn.amount.non_negative();
        match txn.kind {
            TransactionKind::Income => total_income += amount,
            TransactionKind::Expense => total_expenses += amount,
        }
        transaction_count += 1;
    }

    let period_budgets: Vec<&Budget> = budgets
        .iter()
        .filter(|budget| budget.is_for(&filter.period))
        .collect();

    PeriodSummary {
        period: filter.period,
        category: filter.category.clone(),
        total_income,
        total_expenses,
        net_income: total_income - total_expenses,
        transaction_count,
        total_budget: period_budgets.iter().map(|b| b.monthly_limit).sum(),
        budget_count: period_budgets.len(),
    }
}

/// The newest `limit` transactions, newest first
///
/// Transactions on the same day are ordered by id, highest first.
pub fn recent_transactions<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    limit: usize,
) -> Vec<&'a Transaction> {
    let mut recent: Vec<&Transaction> = transactions.into_iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
    recent.truncate(limit);
    recent
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(y: i32, m: u32) -> MonthPeriod {
        MonthPeriod::new(y, m).unwrap()
    }

    fn transactions() -> Vec<Transaction> {
        vec![
            Transaction::income(1, "Salary", Money::from_cents(400000), date(2025, 1, 1)),
            Transaction::expense(2, "Food", Money::from_cents(2500), date(2025, 1, 3)),
            Transaction::expense(3, "Rent", Money::from_cents(150000), date(2025, 1, 3)),
            Transaction::expense(4, "Food", Money::from_cents(1000), date(2025, 2, 1)),
        ]
    }

    fn budgets() -> Vec<Budget> {
        vec![
            Budget::for_category(1, "Food", Money::from_cents(40000), period(2025, 1)),
            Budget::for_category(2, "Rent", Money::from_cents(150000), period(2025, 1)),
            Budget::for_category(3, "Food", Money::from_cents(40000), period(2025, 2)),
        ]
    }

    #[test]
    fn test_summary_for_month() {
        let summary = compute_period_summary(
            &transactions(),
            &budgets(),
            &ReportFilter::month(period(2025, 1)),
        );
        assert_eq!(summary.total_income.cents(), 400000);
        assert_eq!(summary.total_expenses.cents(), 152500);
        assert_eq!(summary.net_income.cents(), 247500);
        assert_eq!(summary.transaction_count, 3);
        assert_eq!(summary.total_budget.cents(), 190000);
        assert_eq!(summary.budget_count, 2);
    }

    #[test]
    fn test_category_filter_narrows_transactions_only() {
        let filter = ReportFilter::month(period(2025, 1)).with_category("Food");
        let summary = compute_period_summary(&transactions(), &budgets(), &filter);
        assert_eq!(summary.total_income.cents(), 0);
        assert_eq!(summary.total_expenses.cents(), 2500);
        assert_eq!(summary.transaction_count, 1);
        assert_eq!(summary.budget_count, 2);
    }

    #[test]
    fn test_empty_period() {
        let summary = compute_period_summary(&[], &[], &ReportFilter::month(period(2030, 5)));
        assert!(summary.net_income.is_zero());
        assert_eq!(summary.budget_used_percent(), 0.0);
    }

    #[test]
    fn test_recent_transactions_newest_first() {
        let txns = transactions();
        let ids: Vec<u64> = recent_transactions(&txns, 3)
            .iter()
            .map(|t| t.id.value())
            .collect();
        assert_eq!(ids, vec![4, 3, 2]);
    }

    #[test]
    fn test_recent_transactions_limit_larger_than_input() {
        let txns = transactions();
        assert_eq!(recent_transactions(&txns, 50).len(), 4);
        assert!(recent_transactions(&txns, 0).is_empty());
    }

    #[test]
    fn test_recent_transactions_from_filtered_iterator() {
        let txns = transactions();
        let filter = ReportFilter::month(period(2025, 1)).with_category("Food");
        let latest = recent_transactions(txns.iter().filter(|txn| filter.matches(txn)), 5);
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].id.value(), 2);
    }
}
