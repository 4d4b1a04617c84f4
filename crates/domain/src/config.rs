//! Configuration structures
//!
//! Loading lives in `netasset-infra::config`; this module only defines the
//! shape and defaults.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_USEFUL_LIFE_YEARS, MAX_USEFUL_LIFE_YEARS,
};
use crate::{NetAssetError, Result};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub depreciation: DepreciationConfig,
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

impl Config {
    /// Reject values the derivations cannot work with.
    ///
    /// # Errors
    /// Returns `NetAssetError::Config` when the useful life is zero.
    pub fn validate(&self) -> Result<()> {
        let years = self.depreciation.useful_life_years;
        if years == 0 {
            return Err(NetAssetError::Config(
                "depreciation.useful_life_years must be greater than zero".to_string(),
            ));
        }
        if years > MAX_USEFUL_LIFE_YEARS {
            return Err(NetAssetError::Config(format!(
                "depreciation.useful_life_years must be at most {MAX_USEFUL_LIFE_YEARS}, got {years}"
            )));
        }
        Ok(())
    }
}

/// Stock view settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Threshold applied to item kinds without an explicit entry
    #[serde(default = "default_low_stock_threshold")]
    pub default_low_stock_threshold: u32,

    /// Per item-kind thresholds keyed by `"name|brand"`
    #[serde(default)]
    pub low_stock_thresholds: HashMap<String, u32>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            default_low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            low_stock_thresholds: HashMap::new(),
        }
    }
}

/// Straight-line depreciation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationConfig {
    #[serde(default = "default_useful_life_years")]
    pub useful_life_years: u32,
}

impl Default for DepreciationConfig {
    fn default() -> Self {
        Self { useful_life_years: DEFAULT_USEFUL_LIFE_YEARS }
    }
}

/// Customer timeline settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Surface unparseable record dates as warnings next to the entries.
    /// The entry itself is always kept and dated "now".
    #[serde(default = "default_true")]
    pub report_invalid_dates: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self { report_invalid_dates: true }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Invalid log format: {other}")),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), format: LogFormat::Text }
    }
}

/// Where an exported snapshot can be read from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

const fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

const fn default_useful_life_years() -> u32 {
    DEFAULT_USEFUL_LIFE_YEARS
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
