//! Transaction display formatting
//!
//! Register-style rows shared by the transaction listing and the period
//! summary.

use crate::config::Settings;
use crate::models::{Money, Transaction, TransactionKind};
use crate::reports::{SortField, SortOrder, TransactionQuery};

use super::report::{format_date, render_table, separator, truncate};

/// Amount with its direction: income positive, expenses negative
pub fn signed_amount(txn: &Transaction) -> Money {
    match txn.kind {
        TransactionKind::Income => txn.amount,
        TransactionKind::Expense => -txn.amount,
    }
}

/// Format transactions as a register table
pub fn format_transaction_rows(transactions: &[&Transaction], settings: &Settings) -> String {
    let currency = settings.currency_symbol.as_str();
    let rows = transactions
        .iter()
        .map(|txn| {
            vec![
                format_date(txn.date, &settings.date_format),
                txn.category.name().to_string(),
                truncate(&txn.description, 32),
                signed_amount(txn).format_with_symbol(currency),
            ]
        })
        .collect();

    render_table(&["Date", "Category", "Description", "Amount"], rows, 3)
}

fn describe_query(query: &TransactionQuery) -> String {
    let mut parts = Vec::new();
    if let Some(period) = query.period {
        parts.push(period.to_string());
    }
    if let Some(kind) = query.kind {
        parts.push(kind.to_string());
    }
    if let Some(ref category) = query.category {
        parts.push(format!("[{}]", category));
    }
    if let Some(ref search) = query.search {
        parts.push(format!("matching \"{}\"", search));
    }

    let sort = match (query.sort_by, query.order) {
        (SortField::Date, SortOrder::Descending) => "newest first",
        (SortField::Date, SortOrder::Ascending) => "oldest first",
        (SortField::Amount, SortOrder::Descending) => "largest first",
        (SortField::Amount, SortOrder::Ascending) => "smallest first",
    };

    if parts.is_empty() {
        format!("all, {}", sort)
    } else {
        format!("{}, {}", parts.join(" "), sort)
    }
}

/// Format a transaction listing with a count and net total footer
pub fn format_transaction_list(
    transactions: &[&Transaction],
    query: &TransactionQuery,
    settings: &Settings,
) -> String {
    let mut output = format!("Transactions: {}\n", describe_query(query));
    output.push_str(&separator(60));
    output.push('\n');

    if transactions.is_empty() {
        output.push_str("No transactions found.\n");
        return output;
    }

    output.push_str(&format_transaction_rows(transactions, settings));
    output.push('\n');

    let net: Money = transactions.iter().map(|txn| signed_amount(txn)).sum();
    output.push_str(&format!(
        "\n{} transaction{}, net {}\n",
        transactions.len(),
        if transactions.len() == 1 { "" } else { "s" },
        net.format_with_symbol(&settings.currency_symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthPeriod;
    use crate::reports::transaction_list;
    use chrono::NaiveDate;

    fn transactions() -> Vec<Transaction> {
        let day = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
        vec![
            Transaction::income(1, "Salary", Money::from_cents(300000), day)
                .with_description("January pay"),
            Transaction::expense(2, "Food", Money::from_cents(4550), day)
                .with_description("Groceries"),
        ]
    }

    #[test]
    fn test_signed_amount() {
        let txns = transactions();
        assert_eq!(signed_amount(&txns[0]).cents(), 300000);
        assert_eq!(signed_amount(&txns[1]).cents(), -4550);
    }

    #[test]
    fn test_format_transaction_list() {
        let txns = transactions();
        let query = TransactionQuery::default().sorted_by(SortField::Amount, SortOrder::Ascending);
        let rows = transaction_list(&txns, &query);
        let output = format_transaction_list(&rows, &query, &Settings::default());

        assert!(output.contains("Transactions: all, smallest first"));
        assert!(output.contains("-$45.50"));
        assert!(output.contains("2025-01-12"));
        assert!(output.contains("2 transactions, net $2954.50"));
    }

    #[test]
    fn test_heading_describes_filters() {
        let query = TransactionQuery::default()
            .in_period(MonthPeriod::new(2025, 1).unwrap())
            .with_kind(TransactionKind::Expense)
            .with_search("market");
        let output = format_transaction_list(&[], &query, &Settings::default());

        assert!(output.contains("Transactions: 2025-01 expense matching \"market\", newest first"));
        assert!(output.contains("No transactions found."));
    }
}
