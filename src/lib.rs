//! SmartBudget - budget progress and spending reports
//!
//! This library computes derived figures for a personal-finance snapshot:
//! how each monthly category budget is tracking, where money was spent, how
//! income and spending moved over recent months and how close each savings
//! goal is.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (transactions, categories, budgets, goals)
//! - `storage`: Snapshot loading and validation
//! - `reports`: The pure aggregation engine
//! - `display`: Terminal formatting
//! - `export`: CSV and JSON writers
//! - `cli`: Command handlers for the `smartbudget` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use smartbudget::models::MonthPeriod;
//! use smartbudget::reports::compute_budget_progress;
//! use smartbudget::storage::Dataset;
//!
//! let data = Dataset::load("data.json")?;
//! let progress = compute_budget_progress(&data.budgets, &data.transactions, MonthPeriod::current());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{SmartBudgetError, SmartBudgetResult};
