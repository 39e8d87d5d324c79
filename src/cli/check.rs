//! CLI command for validating a snapshot

use chrono::NaiveDate;
use tracing::warn;

use crate::display::format_validation_issues;
use crate::storage::Dataset;

/// Print validation issues for the snapshot and return how many were found
pub fn handle_check_command(dataset: &Dataset, today: NaiveDate) -> usize {
    let issues = dataset.validate(today);

    for issue in &issues {
        warn!(entity = issue.entity, id = %issue.id, "{}", issue.message);
    }

    print!("{}", format_validation_issues(&issues));
    issues.len()
}
