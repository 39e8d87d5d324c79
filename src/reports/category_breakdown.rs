//! Category Breakdown
//!
//! Expense totals per category for a filtered period, largest first.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use super::filter::ReportFilter;
use crate::models::{Money, Transaction};

/// Spending for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    /// Category name
    pub category: String,
    /// Total spent
    pub amount: Money,
    /// Number of transactions
    pub count: usize,
    /// Share of all filtered spending
    pub percentage: f64,
}

/// Group filtered expenses by category
///
/// Output is sorted by amount, largest first; equal amounts are ordered by
/// category name so the result is deterministic.
pub fn compute_category_breakdown(
    transactions: &[Transaction],
    filter: &ReportFilter,
) -> Vec<CategorySpending> {
    let mut totals: HashMap<&str, (Money, usize)> = HashMap::new();
    let mut total_spending = Money::zero();

    for txn in transactions
        .iter()
        .filter(|txn| txn.is_expense() && filter.matches(txn))
    {
        let amount = txn.amount.non_negative();
        let entry = totals
            .entry(txn.category.name())
            .or_insert((Money::zero(), 0));
        entry.0 += amount;
        entry.1 += 1;
        total_spending += amount;
    }

    let mut breakdown: Vec<CategorySpending> = totals
        .into_iter()
        .map(|(category, (amount, count))| CategorySpending {
            category: category.to_string(),
            amount,
            count,
            percentage: amount.percent_of(total_spending),
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });

    breakdown
}

/// Sorted, de-duplicated category names used by any transaction
pub fn categories_in_use(transactions: &[Transaction]) -> Vec<String> {
    transactions
        .iter()
        .map(|txn| txn.category.name())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthPeriod;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn jan() -> ReportFilter {
        ReportFilter::month(MonthPeriod::new(2025, 1).unwrap())
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::expense(1, "Food", Money::from_cents(3000), date(2025, 1, 2)),
            Transaction::expense(2, "Rent", Money::from_cents(12000), date(2025, 1, 1)),
            Transaction::expense(3, "Food", Money::from_cents(4500), date(2025, 1, 18)),
            Transaction::expense(4, "Fun", Money::from_cents(1500), date(2025, 1, 20)),
            Transaction::income(5, "Salary", Money::from_cents(500000), date(2025, 1, 25)),
            Transaction::expense(6, "Food", Money::from_cents(9999), date(2025, 2, 1)),
        ]
    }

    #[test]
    fn test_groups_and_sorts_largest_first() {
        let breakdown = compute_category_breakdown(&sample(), &jan());
        let names: Vec<_> = breakdown.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Food", "Fun"]);

        let food = &breakdown[1];
        assert_eq!(food.amount.cents(), 7500);
        assert_eq!(food.count, 2);
        assert!((food.percentage - 7500.0 / 21000.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let breakdown = compute_category_breakdown(&sample(), &jan());
        let total: f64 = breakdown.iter().map(|c| c.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_filter() {
        let filter = jan().with_category("Food");
        let breakdown = compute_category_breakdown(&sample(), &filter);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].category, "Food");
        assert_eq!(breakdown[0].percentage, 100.0);
    }

    #[test]
    fn test_no_expenses_gives_empty_breakdown() {
        let income_only = vec![Transaction::income(1, "Salary", Money::from_cents(100), date(2025, 1, 1))];
        assert!(compute_category_breakdown(&income_only, &jan()).is_empty());
    }

    #[test]
    fn test_zero_amount_expenses_have_zero_percentage() {
        let zeros = vec![Transaction::expense(1, "Food", Money::zero(), date(2025, 1, 1))];
        let breakdown = compute_category_breakdown(&zeros, &jan());
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].count, 1);
        assert_eq!(breakdown[0].percentage, 0.0);
    }

    #[test]
    fn test_ties_are_ordered_by_name() {
        let tied = vec![
            Transaction::expense(1, "Zoo", Money::from_cents(100), date(2025, 1, 1)),
            Transaction::expense(2, "Art", Money::from_cents(100), date(2025, 1, 1)),
        ];
        let names: Vec<_> = compute_category_breakdown(&tied, &jan())
            .into_iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(names, vec!["Art", "Zoo"]);
    }

    #[test]
    fn test_categories_in_use() {
        assert_eq!(
            categories_in_use(&sample()),
            vec!["Food", "Fun", "Rent", "Salary"]
        );
    }
}
