//! Custom assertions for testing

// These assertions are designed to panic on failure
#![allow(clippy::missing_panics_doc)]

use std::fmt::Debug;

/// Assert that two floats are approximately equal
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-utils")]
/// # {
/// use netasset_common::testing::assertions::assert_approx_eq;
///
/// assert_approx_eq(12_000_000.0 - 333_333.33 * 18.0, 6_000_000.06, 1e-6);
/// # }
/// ```
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Values not approximately equal: {} vs {} (diff: {})",
        actual,
        expected,
        diff
    );
}

/// Assert that a derived quantity or amount is never negative
pub fn assert_non_negative(value: f64, what: &str) {
    assert!(value >= 0.0, "{what} must not be negative, got {value}");
}

/// Assert that items are sorted by the given key (non-decreasing)
///
/// Wrap the key in [`std::cmp::Reverse`] to check descending order.
pub fn assert_sorted_by_key<T, K, F>(items: &[T], key: F)
where
    T: Debug,
    K: Ord,
    F: Fn(&T) -> K,
{
    for window in items.windows(2) {
        assert!(key(&window[0]) <= key(&window[1]), "Items not sorted: {:?} before {:?}", window[0], window[1]);
    }
}
