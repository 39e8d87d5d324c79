//! Core data models for SmartBudget
//!
//! This module contains the entities the aggregation engine consumes:
//! transactions, categories, monthly budgets and savings goals, plus the
//! money and period value types they are built from.

pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{Budget, BudgetValidationError};
pub use category::{Category, CategoryRef, CategoryValidationError, UNCATEGORIZED};
pub use goal::{GoalTerm, GoalValidationError, SavingsGoal};
pub use ids::{BudgetId, CategoryId, GoalId, TransactionId};
pub use money::{finite_or_zero, Money};
pub use period::MonthPeriod;
pub use transaction::{parse_tags, Transaction, TransactionKind, TransactionValidationError};
