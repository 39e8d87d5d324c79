//! Path management for SmartBudget
//!
//! ## Path Resolution Order
//!
//! 1. `SMARTBUDGET_DIR` environment variable (if set)
//! 2. The platform config directory for `smartbudget`
//!    (`~/.config/smartbudget` on Linux)

use std::path::{Path, PathBuf};

use crate::error::SmartBudgetError;

/// Environment variable overriding the base directory
pub const BASE_DIR_ENV: &str = "SMARTBUDGET_DIR";

/// Manages all paths used by SmartBudget
#[derive(Debug, Clone)]
pub struct SmartBudgetPaths {
    base_dir: PathBuf,
}

impl SmartBudgetPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SmartBudgetError> {
        let base_dir = match std::env::var_os(BASE_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default snapshot path
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join("data.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SmartBudgetError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            SmartBudgetError::Io(format!(
                "Failed to create base directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SmartBudgetError> {
    directories::ProjectDirs::from("", "", "smartbudget")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SmartBudgetError::Config("Could not determine config directory".into()))
}
