//! Derived stock types
//!
//! Nothing here is persisted: a [`StockItem`] is rebuilt from the live asset
//! collection on every read.

use std::fmt;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::STOCK_KEY_SEPARATOR;
use crate::types::asset::TrackingMethod;

/// Grouping key of an item kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct StockKey {
    pub name: String,
    pub brand: String,
}

impl StockKey {
    pub fn new(name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self { name: name.into(), brand: brand.into() }
    }

    /// Parse the `"name|brand"` form used in persisted threshold maps.
    /// A key without a separator is treated as a brand-less name.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(STOCK_KEY_SEPARATOR) {
            Some((name, brand)) => Self::new(name.trim(), brand.trim()),
            None => Self::new(raw.trim(), ""),
        }
    }
}

impl fmt::Display for StockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, STOCK_KEY_SEPARATOR, self.brand)
    }
}

/// Aggregate of all assets sharing one `(name, brand)` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct StockItem {
    pub key: StockKey,

    /// Taken from the first asset seen for this key
    pub category: String,
    pub unit_of_measure: String,
    pub tracking_method: TrackingMethod,

    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub in_storage: u64,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub in_use: u64,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub damaged: u64,
    /// All assets of this key, including statuses outside the three buckets
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub total: u64,

    /// Sum of purchase prices of in-storage assets (missing price counts as 0)
    pub value_in_storage: f64,

    pub low_stock_threshold: u32,
    pub is_low_stock: bool,
}

impl StockItem {
    /// Assets whose status is outside the in-storage/in-use/damaged buckets.
    #[must_use]
    pub const fn other_statuses(&self) -> u64 {
        self.total.saturating_sub(self.in_storage + self.in_use + self.damaged)
    }
}

/// Sort orders offered by the stock view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum StockSort {
    /// Name then brand, ascending
    #[default]
    Name,
    /// Largest total first
    Total,
    /// Fewest in storage first
    InStorage,
    /// Highest storage value first
    ValueInStorage,
}

/// Totals across all stock items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct StockSummary {
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub item_kinds: u64,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub total_assets: u64,
    pub total_value_in_storage: f64,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub low_stock_kinds: u64,
}

/// Stock view: items in display order plus totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct StockReport {
    pub items: Vec<StockItem>,
    pub summary: StockSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display_and_parse() {
        let key = StockKey::new("ONT", "Huawei");
        assert_eq!(key.to_string(), "ONT|Huawei");
        assert_eq!(StockKey::parse("ONT|Huawei"), key);
        assert_eq!(StockKey::parse(" ONT | Huawei "), key);
        assert_eq!(StockKey::parse("Patch cord"), StockKey::new("Patch cord", ""));
    }
}
