//! Configuration Module
//! Application settings read from a JSON file, with defaults for every field.

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "POLICY_EXPLORER_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Metadata document opened at startup
    pub metadata_path: Option<PathBuf>,
    /// Impact results opened at startup
    pub impact_path: Option<PathBuf>,
    /// Household record opened at startup
    pub household_path: Option<PathBuf>,
    /// Year household variables are entered for
    pub year: String,
    /// Default start of the reform period in the parameter editor
    pub reform_start: NaiveDate,
    /// Default end of the reform period in the parameter editor
    pub reform_end: NaiveDate,
    /// Name used for the reform in impact headlines
    pub policy_label: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            metadata_path: None,
            impact_path: None,
            household_path: None,
            year: "2022".to_string(),
            reform_start: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or(NaiveDate::MIN),
            reform_end: NaiveDate::from_ymd_opt(2027, 12, 31).unwrap_or(NaiveDate::MAX),
            policy_label: "Your reform".to_string(),
            window_width: 1400.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Config from the file named by `POLICY_EXPLORER_CONFIG`, or defaults.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                tracing::info!(path = %path.display(), "loading config");
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }
}
