//! # NetAsset Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON, TOML)
//! - Tracing subscriber initialisation
//! - JSON export snapshot source
//!
//! ## Architecture
//! - Implements traits defined in `netasset-core`
//! - Depends on `netasset-domain` and `netasset-core`
//! - Contains all "impure" code (file and environment access)

pub mod config;
pub mod observability;
pub mod snapshot;

pub use observability::init_tracing;
pub use snapshot::JsonFileSnapshotSource;
