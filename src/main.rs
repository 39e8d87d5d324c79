use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use smartbudget::cli::{handle_check_command, handle_report_command, parse_today, ReportCommands};
use smartbudget::config::{SmartBudgetPaths, Settings};
use smartbudget::logging::init_tracing;
use smartbudget::storage::Dataset;

#[derive(Parser)]
#[command(
    name = "smartbudget",
    version,
    about = "Budget progress, spending breakdowns, trends and savings goals",
    long_about = "SmartBudget reads a snapshot of your transactions, monthly \
                  budgets and savings goals and reports how each budget is \
                  tracking, where the money went, how income and spending \
                  moved over recent months and how close each goal is."
)]
struct Cli {
    /// Snapshot file to read (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long, global = true, env = "SMARTBUDGET_DATA")]
    data: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report
    #[command(subcommand)]
    Report(ReportCommands),

    /// Validate every entity in the snapshot
    Check {
        /// Date goal deadlines are checked against (YYYY-MM-DD)
        #[arg(short, long)]
        today: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = SmartBudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let data_file = cli.data.clone().unwrap_or_else(|| paths.data_file());
    debug!(base_dir = %paths.base_dir().display(), data = %data_file.display(), "resolved paths");

    match cli.command {
        Commands::Report(cmd) => {
            let dataset = load_dataset(&data_file)?;
            handle_report_command(&dataset, &settings, cmd)?;
        }
        Commands::Check { today } => {
            let dataset = load_dataset(&data_file)?;
            let today = parse_today(today.as_deref())?;
            if handle_check_command(&dataset, today) > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Config => {
            println!("SmartBudget Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data file:      {}", data_file.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Date format:           {}", settings.date_format);
            println!("  Trend window:          {} months", settings.trend_window);
            println!("  Warning threshold:     {}%", settings.warning_threshold);
            println!("  Overspend overlay cap: {}%", settings.overspend_overlay_cap);
            println!("  Bar width:             {}", settings.bar_width);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_dataset(path: &std::path::Path) -> Result<Dataset> {
    Dataset::load(path).with_context(|| format!("Failed to load snapshot {}", path.display()))
}
