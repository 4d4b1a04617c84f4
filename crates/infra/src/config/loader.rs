//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! Whatever the source, the result is validated before it is returned.
//!
//! ## Environment Variables
//! - `NETASSET_USEFUL_LIFE_YEARS`: Useful life for depreciation (required)
//! - `NETASSET_LOW_STOCK_THRESHOLD`: Default low-stock threshold (required)
//! - `NETASSET_LOG_LEVEL`: Default log filter directive
//! - `NETASSET_LOG_FORMAT`: `text` or `json`
//! - `NETASSET_SNAPSHOT_PATH`: Exported snapshot JSON file
//! - `NETASSET_REPORT_INVALID_DATES`: Report unparseable timeline dates
//!   (true/false)
//!
//! Per item-kind low-stock thresholds can only be set from a file.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./netasset.json` or `./netasset.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use netasset_domain::{
    Config, DepreciationConfig, InventoryConfig, LogFormat, LoggingConfig, NetAssetError, Result,
    SnapshotConfig, TimelineConfig,
};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["netasset.json", "netasset.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `NetAssetError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A value fails validation
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// The required variables must be present; optional ones fall back to the
/// defaults of each section.
///
/// # Errors
/// Returns `NetAssetError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let useful_life_years = env_var("NETASSET_USEFUL_LIFE_YEARS").and_then(|s| {
        s.trim()
            .parse::<u32>()
            .map_err(|e| NetAssetError::Config(format!("Invalid useful life years: {e}")))
    })?;
    let default_low_stock_threshold = env_var("NETASSET_LOW_STOCK_THRESHOLD").and_then(|s| {
        s.trim()
            .parse::<u32>()
            .map_err(|e| NetAssetError::Config(format!("Invalid low stock threshold: {e}")))
    })?;

    let mut logging = LoggingConfig::default();
    if let Ok(level) = std::env::var("NETASSET_LOG_LEVEL") {
        logging.level = level;
    }
    if let Ok(format) = std::env::var("NETASSET_LOG_FORMAT") {
        logging.format = format.parse::<LogFormat>().map_err(NetAssetError::Config)?;
    }

    let config = Config {
        inventory: InventoryConfig { default_low_stock_threshold, ..InventoryConfig::default() },
        depreciation: DepreciationConfig { useful_life_years },
        timeline: TimelineConfig {
            report_invalid_dates: env_bool("NETASSET_REPORT_INVALID_DATES", true),
        },
        logging,
        snapshot: SnapshotConfig {
            path: std::env::var_os("NETASSET_SNAPSHOT_PATH").map(PathBuf::from),
        },
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `NetAssetError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - A value fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(NetAssetError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            NetAssetError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| NetAssetError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| NetAssetError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| NetAssetError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(NetAssetError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the working directory, its parent and grandparent, then the
/// same three levels relative to the executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
#[must_use]
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| [root.clone(), root.join(".."), root.join("../..")])
        .flat_map(|dir| CONFIG_FILE_NAMES.map(|name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `NetAssetError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        NetAssetError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// Returns `default` if the variable is not set.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map_or(default, |s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}
