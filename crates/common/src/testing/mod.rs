//! Testing utilities and helpers
//!
//! - **[`assertions`]**: float and ordering assertions used by the
//!   derivation test suites
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "test-utils")]
//! # {
//! use netasset_common::testing::{assert_approx_eq, assert_sorted_by_key};
//!
//! assert_approx_eq(0.1 + 0.2, 0.3, 1e-9);
//! assert_sorted_by_key(&[3, 2, 1], |v| std::cmp::Reverse(*v));
//! # }
//! ```

pub mod assertions;

// Re-export assertion functions
pub use assertions::{assert_approx_eq, assert_non_negative, assert_sorted_by_key};
