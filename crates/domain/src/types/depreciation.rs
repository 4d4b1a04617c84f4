//! Straight-line book value types

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Book value of a single asset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Depreciation {
    pub purchase_price: f64,
    pub useful_life_years: u32,
    pub months_passed: u32,
    pub monthly_depreciation: f64,
    pub current_value: f64,
    pub is_fully_depreciated: bool,
}

/// Book value across a set of assets
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PortfolioBookValue {
    pub purchase_total: f64,
    pub current_total: f64,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub assets_valued: u64,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub fully_depreciated: u64,
    /// Assets skipped because purchase price or date is missing
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub without_purchase_record: u64,
}
