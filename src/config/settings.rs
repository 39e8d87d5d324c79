//! User settings for SmartBudget
//!
//! Display and reporting preferences. Every field has a default so a partial
//! or missing `config.json` still loads.

use serde::{Deserialize, Serialize};

use super::paths::SmartBudgetPaths;
use crate::error::SmartBudgetError;
use crate::reports::{DEFAULT_TREND_WINDOW, DEFAULT_WARNING_THRESHOLD};

/// User settings for SmartBudget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Months shown by the trend report when `--window` is not given
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,

    /// Budget percentage at which a warning is shown
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: f64,

    /// Largest over-budget segment drawn past a full bar, in percent
    #[serde(default = "default_overspend_overlay_cap")]
    pub overspend_overlay_cap: f64,

    /// Width of progress bars in characters
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_trend_window() -> usize {
    DEFAULT_TREND_WINDOW
}

fn default_warning_threshold() -> f64 {
    DEFAULT_WARNING_THRESHOLD
}

fn default_overspend_overlay_cap() -> f64 {
    20.0
}

fn default_bar_width() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            trend_window: default_trend_window(),
            warning_threshold: default_warning_threshold(),
            overspend_overlay_cap: default_overspend_overlay_cap(),
            bar_width: default_bar_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SmartBudgetPaths) -> Result<Self, SmartBudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SmartBudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| SmartBudgetError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SmartBudgetPaths) -> Result<(), SmartBudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SmartBudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SmartBudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
