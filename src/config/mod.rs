//! Configuration module for SmartBudget
//!
//! Resolves where the snapshot and settings live and loads the user's
//! display and reporting preferences.

pub mod paths;
pub mod settings;

pub use paths::SmartBudgetPaths;
pub use settings::Settings;
