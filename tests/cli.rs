use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "smartbudget";

const SNAPSHOT: &str = r#"{
    "categories": [
        { "id": 1, "name": "Food", "type": "expense" },
        { "id": 2, "name": "Rent", "type": "expense" },
        { "id": 3, "name": "Salary", "type": "income" }
    ],
    "transactions": [
        { "id": 1, "type": "income", "amount": 2000, "category": "Salary",
          "description": "January pay", "date": "2025-01-01" },
        { "id": 2, "type": "expense", "amount": 300, "category": "Food",
          "description": "Groceries", "date": "2025-01-05" },
        { "id": 3, "type": "expense", "amount": 250, "category": { "Name": "Food" },
          "description": "Dinner out", "date": "2025-01-20" },
        { "id": 4, "type": "expense", "amount": 1200, "category": "Rent",
          "description": "March rent", "date": "2025-03-01" }
    ],
    "budgets": [
        { "id": 1, "category": { "Name": "Food" }, "monthly_limit": 500, "month": 1, "year": 2025 },
        { "id": 2, "category": "Rent", "monthly_limit": 1500, "month": 1, "year": 2025 }
    ],
    "savings_goals": [
        { "id": 1, "title": "Vacation", "target_amount": 1000, "current_amount": 250,
          "target_date": "2025-07-01", "term": "short term" }
    ]
}"#;

struct Fixture {
    dir: TempDir,
    data: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        Self::with_snapshot("data.json", SNAPSHOT)
    }

    fn with_snapshot(name: &str, contents: &str) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let data = dir.path().join(name);
        std::fs::write(&data, contents).expect("write snapshot");
        Self { dir, data }
    }

    fn base_dir(&self) -> &Path {
        self.dir.path()
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
        cmd.env("SMARTBUDGET_DIR", self.base_dir())
            .env_remove("SMARTBUDGET_DATA")
            .env_remove("RUST_LOG")
            .arg("--data")
            .arg(&self.data);
        cmd
    }
}

#[test]
fn progress_report_flags_overspent_budget() {
    Fixture::new()
        .command()
        .args(["report", "progress", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(contains("Budget Progress: January 2025 (2025-01)"))
        .stdout(contains("Food"))
        .stdout(contains("$50.00 over budget"))
        .stdout(contains("$1500.00 remaining"))
        .stdout(contains("1 budget is over its limit"));
}

#[test]
fn progress_report_as_json() {
    let output = Fixture::new()
        .command()
        .args(["report", "progress", "--period", "2025-01", "--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(rows[0]["spent"], 550.0);
    assert_eq!(rows[0]["percentage"], 100.0);
    assert_eq!(rows[0]["remaining"], 0.0);
    assert_eq!(rows[0]["is_over_budget"], true);
    assert_eq!(rows[1]["spent"], 0.0);
    assert_eq!(rows[1]["is_over_budget"], false);
}

#[test]
fn breakdown_report_filters_by_category() {
    Fixture::new()
        .command()
        .args(["report", "breakdown", "--period", "2025-01", "--category", "Food"])
        .assert()
        .success()
        .stdout(contains("Spending by Category: 2025-01 [Food]"))
        .stdout(contains("$550.00"))
        .stdout(contains("Rent").not());
}

#[test]
fn trend_report_csv_has_full_window() {
    let output = Fixture::new()
        .command()
        .args(["report", "trend", "--period", "2025-03", "--window", "6", "--format", "csv"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "Period,Income,Expenses,Net");
    assert_eq!(lines[1], "2024-10,0.00,0.00,0.00");
    assert_eq!(lines[4], "2025-01,2000.00,550.00,1450.00");
    assert_eq!(lines[6], "2025-03,0.00,1200.00,-1200.00");
}

#[test]
fn trend_report_rejects_zero_window() {
    Fixture::new()
        .command()
        .args(["report", "trend", "--period", "2025-03", "--window", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid trend window"));
}

#[test]
fn trend_report_rejects_oversized_window() {
    Fixture::new()
        .command()
        .args(["report", "trend", "--period", "2025-03", "--window", "18446744073709551615"])
        .assert()
        .failure()
        .stderr(contains("Invalid trend window: 18446744073709551615"));
}

#[test]
fn invalid_period_is_reported() {
    Fixture::new()
        .command()
        .args(["report", "progress", "--period", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn summary_report_shows_totals_and_recent() {
    Fixture::new()
        .command()
        .args(["report", "summary", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(contains("$2000.00"))
        .stdout(contains("$1450.00"))
        .stdout(contains("Recent Transactions"))
        .stdout(contains("Dinner out"));
}

#[test]
fn transactions_report_searches_and_sorts() {
    Fixture::new()
        .command()
        .args(["report", "transactions", "--search", "FOOD", "--sort", "amount", "--order", "asc"])
        .assert()
        .success()
        .stdout(contains("Transactions: matching \"FOOD\", smallest first"))
        .stdout(contains("Dinner out"))
        .stdout(contains("Groceries"))
        .stdout(contains("March rent").not())
        .stdout(contains("2 transactions, net -$550.00"));
}

#[test]
fn transactions_report_as_json_filters_type() {
    let output = Fixture::new()
        .command()
        .args(["report", "transactions", "--type", "expense", "--limit", "2", "--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let ids: Vec<u64> = rows
        .as_array()
        .expect("array")
        .iter()
        .map(|row| row["id"].as_u64().expect("id"))
        .collect();
    assert_eq!(ids, vec![4, 3]);
}

#[test]
fn goals_report_shows_deadline() {
    Fixture::new()
        .command()
        .args(["report", "goals", "--today", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("Vacation"))
        .stdout(contains("25.0%"))
        .stdout(contains("30 days remaining"));
}

#[test]
fn output_flag_writes_csv_file() {
    let fixture = Fixture::new();
    let out = fixture.base_dir().join("exports").join("goals.csv");

    fixture
        .command()
        .args(["report", "goals", "--today", "2025-06-01", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Report exported to"));

    let text = std::fs::read_to_string(&out).expect("export written");
    assert!(text.starts_with("Goal,Target Amount,Current Amount"));
    assert!(text.contains("Vacation,1000.00,250.00,750.00,25.00,false,2025-07-01,30"));
}

#[test]
fn yaml_snapshot_is_read() {
    let yaml = r#"
transactions:
  - id: 1
    type: expense
    amount: 42.5
    category: Books
    description: Novel
    date: 2025-02-03
"#;
    Fixture::with_snapshot("data.yaml", yaml)
        .command()
        .args(["report", "breakdown", "--period", "2025-02"])
        .assert()
        .success()
        .stdout(contains("Books"))
        .stdout(contains("$42.50"));
}

#[test]
fn check_passes_clean_snapshot() {
    Fixture::new()
        .command()
        .args(["check", "--today", "2025-01-01"])
        .assert()
        .success()
        .stdout(contains("No problems found."));
}

#[test]
fn check_accepts_overdue_goal() {
    Fixture::new()
        .command()
        .args(["check", "--today", "2025-12-01"])
        .assert()
        .success()
        .stdout(contains("No problems found."));
}

#[test]
fn check_fails_on_mismatched_category_kind() {
    let snapshot = r#"{
        "categories": [ { "id": 1, "name": "Salary", "type": "income" } ],
        "transactions": [
            { "id": 9, "type": "expense", "amount": 10, "category": "Salary",
              "description": "Wrong kind", "date": "2025-01-02" }
        ]
    }"#;
    Fixture::with_snapshot("data.json", snapshot)
        .command()
        .args(["check", "--today", "2025-01-01"])
        .assert()
        .failure()
        .stdout(contains("txn-9"))
        .stdout(contains("1 problem found"));
}

#[test]
fn missing_snapshot_names_the_file() {
    // The default data file under the base directory is never written
    let fixture = Fixture::with_snapshot("elsewhere.json", SNAPSHOT);
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("SMARTBUDGET_DIR", fixture.base_dir())
        .env_remove("SMARTBUDGET_DATA")
        .args(["report", "progress", "--period", "2025-01"])
        .assert()
        .failure()
        .stderr(contains("data.json").and(contains("File not found")));
}

#[test]
fn config_shows_paths_and_defaults() {
    let fixture = Fixture::new();
    std::fs::remove_file(&fixture.data).expect("remove snapshot");

    fixture
        .command()
        .arg("config")
        .assert()
        .success()
        .stdout(contains("SmartBudget Configuration"))
        .stdout(contains("Trend window:          6 months"));
}
