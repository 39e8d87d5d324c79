//! Entity snapshot
//!
//! A [`Dataset`] is everything the reports need, loaded in one go from a
//! JSON or YAML document. Field aliases and the category shapes used by the
//! record store are resolved during deserialization, so the engine only sees
//! canonical models.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::file_io::read_document;
use crate::error::SmartBudgetError;
use crate::models::{Budget, Category, SavingsGoal, Transaction};

/// All entities of one snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default, alias = "savingsGoals", alias = "goals")]
    pub savings_goals: Vec<SavingsGoal>,
}

/// A problem found while validating a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Kind of entity ("transaction", "budget", ...)
    pub entity: &'static str,
    /// Display form of the entity's id
    pub id: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(entity: &'static str, id: impl fmt::Display, message: impl fmt::Display) -> Self {
        Self {
            entity,
            id: id.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.entity, self.id, self.message)
    }
}

impl Dataset {
    /// Load a snapshot file; `.yaml`/`.yml` is read as YAML, anything else as JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SmartBudgetError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading snapshot");

        let dataset: Dataset = read_document(path)?;

        info!(
            path = %path.display(),
            categories = dataset.categories.len(),
            transactions = dataset.transactions.len(),
            budgets = dataset.budgets.len(),
            goals = dataset.savings_goals.len(),
            "loaded snapshot"
        );

        Ok(dataset)
    }

    /// Parse a JSON snapshot held in memory
    pub fn from_json_str(contents: &str) -> Result<Self, SmartBudgetError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Parse a YAML snapshot held in memory
    pub fn from_yaml_str(contents: &str) -> Result<Self, SmartBudgetError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.transactions.is_empty()
            && self.budgets.is_empty()
            && self.savings_goals.is_empty()
    }

    /// Look up a category definition by exact name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Validate every entity as of `today`
    ///
    /// Besides each entity's own rules, a transaction filed under a known
    /// category of the other kind (an expense under an income category, or
    /// the reverse) is reported.
    pub fn validate(&self, today: NaiveDate) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for category in &self.categories {
            if let Err(e) = category.validate() {
                issues.push(ValidationIssue::new("category", category.id, e));
            }
        }

        let by_name: HashMap<&str, &Category> = self
            .categories
            .iter()
            .map(|c| (c.name.as_str(), c))
            .collect();

        for txn in &self.transactions {
            if let Err(e) = txn.validate() {
                issues.push(ValidationIssue::new("transaction", txn.id, e));
            }

            if let Some(category) = by_name.get(txn.category.name()) {
                if !category.accepts(txn.kind) {
                    issues.push(ValidationIssue::new(
                        "transaction",
                        txn.id,
                        format!(
                            "{} filed under {} category '{}'",
                            txn.kind, category.kind, category.name
                        ),
                    ));
                }
            }
        }

        for budget in &self.budgets {
            if let Err(e) = budget.validate() {
                issues.push(ValidationIssue::new("budget", budget.id, e));
            }
        }

        for goal in &self.savings_goals {
            if let Err(e) = goal.validate(today) {
                issues.push(ValidationIssue::new("goal", goal.id, e));
            }
        }

        issues
    }
}
