//! Transaction List
//!
//! A searchable, sortable listing of transactions across every month.

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::{MonthPeriod, Transaction, TransactionKind};

/// Column a transaction listing is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Date,
    Amount,
}

/// Direction of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Filter and sort options for [`transaction_list`]
///
/// The default query lists every transaction, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransactionQuery {
    /// Case-insensitive text looked up in the description and category name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Exact category name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<MonthPeriod>,
    pub sort_by: SortField,
    pub order: SortOrder,
    /// Keep at most this many rows after sorting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

fn non_blank(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl TransactionQuery {
    /// Search descriptions and category names; blank text searches nothing
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = non_blank(search);
        self
    }

    /// Restrict to an exact category name; blank names mean "all categories"
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(category);
        self
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn in_period(mut self, period: MonthPeriod) -> Self {
        self.period = Some(period);
        self
    }

    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_by = field;
        self.order = order;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check if a transaction matches every filter of this query
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(ref search) = self.search {
            let needle = search.to_lowercase();
            let found = txn.description.to_lowercase().contains(&needle)
                || txn.category.name().to_lowercase().contains(&needle);
            if !found {
                return false;
            }
        }

        if let Some(ref category) = self.category {
            if !txn.category.is_named(category) {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }

        if let Some(period) = self.period {
            if !period.contains(txn.date) {
                return false;
            }
        }

        true
    }

    fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        let by_field = match self.sort_by {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Amount => a.amount.cmp(&b.amount),
        };
        let ordering = by_field.then_with(|| a.id.cmp(&b.id));
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// List the transactions matching `query`, in the query's sort order
///
/// Rows that compare equal on the sort field are ordered by id in the same
/// direction, so the listing is deterministic.
pub fn transaction_list<'a>(
    transactions: &'a [Transaction],
    query: &TransactionQuery,
) -> Vec<&'a Transaction> {
    let mut rows: Vec<&Transaction> = transactions
        .iter()
        .filter(|txn| query.matches(txn))
        .collect();
    rows.sort_by(|a, b| query.compare(a, b));

    if let Some(limit) = query.limit {
        rows.truncate(limit);
    }
    rows
}
