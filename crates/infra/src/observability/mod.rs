//! Logging setup
//!
//! Every crate logs through `tracing` with structured fields; this module
//! installs the global subscriber that renders them.

pub mod logging;

pub use logging::{build_env_filter, init_tracing};
