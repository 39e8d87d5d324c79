//! Custom error types for SmartBudget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for SmartBudget operations
#[derive(Error, Debug)]
pub enum SmartBudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Snapshot loading errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A calendar month that cannot exist
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// A trend window outside 1..=1200 months
    #[error("Invalid trend window: {0} (must be between 1 and 1200 months)")]
    InvalidWindow(usize),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SmartBudgetError {
    /// Create an invalid period error for a year/month pair
    pub fn invalid_month(year: i32, month: u32) -> Self {
        Self::InvalidPeriod(format!("{:04}-{:02}", year, month))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error was caused by bad engine input
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::InvalidPeriod(_) | Self::InvalidWindow(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SmartBudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SmartBudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SmartBudgetError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for SmartBudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for SmartBudget operations
pub type SmartBudgetResult<T> = Result<T, SmartBudgetError>;
