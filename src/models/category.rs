//! Category model and canonical category references
//!
//! Categories classify transactions and are scoped to either income or
//! expense. Records coming from the record-storage layer reference a category
//! either by plain name or by a nested object exposing a name; both are
//! normalized into a [`CategoryRef`] while deserializing, so nothing past the
//! data-access boundary ever sees the dual shape.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionKind;

/// Name used for transactions and budgets without a usable category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A transaction category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    #[serde(alias = "Id")]
    pub id: CategoryId,

    /// Display name, also the key transactions refer to
    #[serde(alias = "Name")]
    pub name: String,

    /// Which kind of transaction this category applies to
    #[serde(rename = "type", alias = "kind", alias = "type_c")]
    pub kind: TransactionKind,

    /// Icon name (presentation only)
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "icon_c")]
    pub icon: Option<String>,

    /// Display color (presentation only)
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "color_c")]
    pub color: Option<String>,
}

impl Category {
    /// Create a new category
    pub fn new(id: CategoryId, name: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            icon: None,
            color: None,
        }
    }

    /// Whether a transaction of `kind` may use this category
    pub fn accepts(&self, kind: TransactionKind) -> bool {
        self.kind == kind
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Canonical reference to a category
///
/// Comparison between references is by name only; the id is carried for
/// display and lookups when the source record had one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Option<CategoryRefRepr>")]
pub struct CategoryRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    pub name: String,
}

impl CategoryRef {
    /// Reference a category by name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: canonical_name(name.into()),
        }
    }

    /// Reference a category by id and name
    pub fn with_id(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: canonical_name(name.into()),
        }
    }

    /// The placeholder reference for missing categories
    pub fn uncategorized() -> Self {
        Self::named(UNCATEGORIZED)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_uncategorized(&self) -> bool {
        self.name == UNCATEGORIZED
    }

    /// Exact name match against a category name
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

impl Default for CategoryRef {
    fn default() -> Self {
        Self::uncategorized()
    }
}

impl PartialEq for CategoryRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for CategoryRef {}

impl fmt::Display for CategoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The shapes a category reference takes in stored records
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategoryRefRepr {
    Name(String),
    Object {
        #[serde(default, alias = "Id")]
        id: Option<CategoryId>,
        #[serde(default, alias = "Name")]
        name: Option<String>,
    },
}

impl From<Option<CategoryRefRepr>> for CategoryRef {
    fn from(repr: Option<CategoryRefRepr>) -> Self {
        match repr {
            Some(CategoryRefRepr::Name(name)) => Self::named(name),
            Some(CategoryRefRepr::Object { id, name }) => Self {
                id,
                name: canonical_name(name.unwrap_or_default()),
            },
            None => Self::uncategorized(),
        }
    }
}

fn canonical_name(name: String) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        UNCATEGORIZED.to_string()
    } else if trimmed.len() == name.len() {
        name
    } else {
        trimmed.to_string()
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
