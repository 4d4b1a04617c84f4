//! Time utilities and abstractions
//!
//! Derivations that depend on "now" (book value, timeline date fallback)
//! take a [`Clock`] so tests can pin the current instant.

pub mod clock;

// Re-export commonly used items
pub use clock::{Clock, MockClock, SystemClock};
