//! Transaction model
//!
//! Represents a single income or expense entry. Amounts are always
//! non-negative; the direction of money is carried by [`TransactionKind`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::category::CategoryRef;
use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction (and the scope of a category)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    #[serde(alias = "Id")]
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type", alias = "kind", alias = "type_c")]
    pub kind: TransactionKind,

    /// Amount (never negative)
    #[serde(alias = "amount_c")]
    pub amount: Money,

    /// Category this transaction is filed under
    #[serde(default, alias = "category_c")]
    pub category: CategoryRef,

    /// Free-form description
    #[serde(default, alias = "description_c")]
    pub description: String,

    /// Date the transaction occurred
    #[serde(alias = "date_c", deserialize_with = "deserialize_date")]
    pub date: NaiveDate,

    /// Free-form tags
    #[serde(
        default,
        alias = "Tags",
        deserialize_with = "deserialize_tags",
        skip_serializing_if = "BTreeSet::is_empty"
    )]
    pub tags: BTreeSet<String>,

    /// Auxiliary numeric range value
    #[serde(default, alias = "range_c", skip_serializing_if = "Option::is_none")]
    pub range: Option<f64>,

    /// Precise time of the transaction, when known
    #[serde(default, alias = "datetime_c", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: TransactionId,
        kind: TransactionKind,
        amount: Money,
        category: CategoryRef,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            category,
            description: String::new(),
            date,
            tags: BTreeSet::new(),
            range: None,
            timestamp: None,
        }
    }

    /// Create an expense filed under `category`
    pub fn expense(id: u64, category: &str, amount: Money, date: NaiveDate) -> Self {
        Self::new(
            TransactionId::new(id),
            TransactionKind::Expense,
            amount,
            CategoryRef::named(category),
            date,
        )
    }

    /// Create an income filed under `category`
    pub fn income(id: u64, category: &str, amount: Money, date: NaiveDate) -> Self {
        Self::new(
            TransactionId::new(id),
            TransactionKind::Income,
            amount,
            CategoryRef::named(category),
            date,
        )
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.category.is_uncategorized() {
            return Err(TransactionValidationError::MissingCategory);
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if let Some(range) = self.range {
            if !range.is_finite() || range < 0.0 {
                return Err(TransactionValidationError::InvalidRange(range));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Split a comma-separated tag string into trimmed, non-empty tags
pub fn parse_tags(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagsRepr {
    List(Vec<String>),
    Joined(String),
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Option::<TagsRepr>::deserialize(deserializer)? {
        Some(TagsRepr::List(list)) => list
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        Some(TagsRepr::Joined(raw)) => parse_tags(&raw),
        None => BTreeSet::new(),
    };
    Ok(tags)
}

/// Accept "YYYY-MM-DD" or a full RFC 3339 timestamp
pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| serde::de::Error::custom(format!("invalid date: {}", raw)))
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    MissingCategory,
    EmptyDescription,
    InvalidRange(f64),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero, got {}", amount)
            }
            Self::MissingCategory => write!(f, "Transaction must have a category"),
            Self::EmptyDescription => write!(f, "Transaction description cannot be empty"),
            Self::InvalidRange(range) => write!(f, "Range value must be non-negative, got {}", range),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deserialize_record_shape() {
        let json = r#"{
            "Id": 3,
            "type": "expense",
            "amount": 42.5,
            "category": "Food",
            "description": "Groceries",
            "date": "2025-01-15",
            "Tags": "weekly, , market",
            "range_c": 3,
            "datetime_c": "2025-01-15T10:30:00Z"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.id, TransactionId::new(3));
        assert!(txn.is_expense());
        assert_eq!(txn.amount.cents(), 4250);
        assert_eq!(txn.category.name(), "Food");
        assert_eq!(txn.date, date(2025, 1, 15));
        assert_eq!(txn.tags.len(), 2);
        assert!(txn.tags.contains("market"));
        assert_eq!(txn.range, Some(3.0));
        assert!(txn.timestamp.is_some());
    }

    #[test]
    fn test_deserialize_timestamp_date_and_tag_list() {
        let json = r#"{
            "id": 1,
            "type": "income",
            "amount": 1000,
            "category": {"Name": "Salary"},
            "date": "2025-02-01T08:00:00+00:00",
            "tags": ["pay", " "]
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert!(txn.is_income());
        assert_eq!(txn.date, date(2025, 2, 1));
        assert_eq!(txn.tags.iter().collect::<Vec<_>>(), vec!["pay"]);
        assert!(txn.description.is_empty());
    }

    #[test]
    fn test_rejects_unparseable_date() {
        let json = r#"{"id": 1, "type": "expense", "amount": 1, "date": "yesterday"}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn test_parse_tags() {
        let tags = parse_tags(" a,b ,,c ");
        assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_validation() {
        let valid = Transaction::expense(1, "Food", Money::from_cents(500), date(2025, 1, 1))
            .with_description("Lunch");
        assert!(valid.validate().is_ok());

        let mut zero = valid.clone();
        zero.amount = Money::zero();
        assert!(matches!(
            zero.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));

        let mut no_description = valid.clone();
        no_description.description = "  ".into();
        assert_eq!(
            no_description.validate(),
            Err(TransactionValidationError::EmptyDescription)
        );

        let mut no_category = valid.clone();
        no_category.category = CategoryRef::uncategorized();
        assert_eq!(
            no_category.validate(),
            Err(TransactionValidationError::MissingCategory)
        );

        let mut bad_range = valid;
        bad_range.range = Some(-1.0);
        assert_eq!(
            bad_range.validate(),
            Err(TransactionValidationError::InvalidRange(-1.0))
        );
    }
}
