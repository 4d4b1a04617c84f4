//! Tracing subscriber initialisation
//!
//! `RUST_LOG` wins over the configured level so a single run can be made
//! more verbose without touching the config file.

use netasset_domain::{LogFormat, LoggingConfig, NetAssetError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` if set and valid, otherwise `config.level`.
///
/// # Errors
/// Returns `NetAssetError::Config` when the configured level is not a valid
/// filter directive.
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            NetAssetError::Config(format!("Invalid log level '{}': {e}", config.level))
        }),
    }
}

/// Install the global tracing subscriber.
///
/// Returns `Ok(true)` when this call installed the subscriber and `Ok(false)`
/// when one was already installed.
///
/// # Errors
/// Returns `NetAssetError::Config` when the configured level is invalid.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    let filter = build_env_filter(config)?;

    let installed = match config.format {
        LogFormat::Text => {
            tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init()
        }
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .try_init(),
    };

    match installed {
        Ok(()) => {
            tracing::debug!(level = %config.level, format = ?config.format, "Tracing initialised");
            Ok(true)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Tracing subscriber already installed");
            Ok(false)
        }
    }
}
