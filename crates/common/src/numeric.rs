//! Decimal rounding for quantities held as `f64`
//!
//! Bulk quantities (meters of cable, rolls of tape) are entered with up to
//! four decimals. Sums and differences of such values pick up binary
//! representation error (`0.1 + 0.2 = 0.30000000000000004`), so every
//! derived quantity goes through [`round4`] before it is compared or shown.

/// Round to `places` decimal places.
///
/// `f64::EPSILON` is added before scaling so that values sitting just below a
/// half-way point because of representation error round up, matching what a
/// human expects from the decimal literal.
///
/// # Examples
///
/// ```
/// use netasset_common::numeric::round_to;
///
/// assert_eq!(round_to(1.005, 2), 1.01);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// ```
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    ((value + f64::EPSILON) * factor).round() / factor
}

/// Round to four decimal places.
///
/// # Examples
///
/// ```
/// use netasset_common::round4;
///
/// assert_eq!(round4(0.1 + 0.2), 0.3);
/// assert_eq!(round4(10.0 - 9.9999), 0.0001);
/// ```
#[must_use]
pub fn round4(value: f64) -> f64 {
    round_to(value, 4)
}
