//! Validation issue display formatting

use crate::storage::ValidationIssue;

use super::report::render_table;

/// Format snapshot validation results
pub fn format_validation_issues(issues: &[ValidationIssue]) -> String {
    if issues.is_empty() {
        return "No problems found.\n".to_string();
    }

    let rows = issues
        .iter()
        .map(|issue| vec![issue.entity.to_string(), issue.id.clone(), issue.message.clone()])
        .collect();

    let mut output = render_table(&["Entity", "ID", "Problem"], rows, 3);
    output.push_str(&format!(
        "\n{} problem{} found\n",
        issues.len(),
        if issues.len() == 1 { "" } else { "s" }
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Dataset;
    use chrono::NaiveDate;

    #[test]
    fn test_clean_snapshot() {
        assert_eq!(format_validation_issues(&[]), "No problems found.\n");
    }

    #[test]
    fn test_lists_each_issue() {
        let data = Dataset::from_json_str(
            r#"{ "budgets": [ { "id": 4, "category": "Food", "monthly_limit": 0, "month": 1, "year": 2025 } ] }"#,
        )
        .unwrap();
        let issues = data.validate(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let output = format_validation_issues(&issues);

        assert!(output.contains("bud-4"));
        assert!(output.contains("1 problem found"));
    }
}
