//! Storage layer for SmartBudget
//!
//! Read-only access to entity snapshots, plus the atomic writer used when
//! reports are exported to a file.

pub mod dataset;
pub mod file_io;

pub use dataset::{Dataset, ValidationIssue};
pub use file_io::{read_document, write_atomic, DocumentFormat};
