//! # NetAsset Domain
//!
//! Business domain types and models for NetAsset.
//!
//! This crate contains:
//! - Records as fetched from the remote API (assets, requests, field-work
//!   documents) and their ingested forms
//! - Derived, display-only records (stock items, fulfillment, timelines,
//!   book values)
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other NetAsset crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
