//! Low-stock thresholds per item kind

use std::collections::HashMap;

use netasset_domain::{InventoryConfig, StockKey};

/// Resolves the low-stock threshold of each `(name, brand)` key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockThresholds {
    default: u32,
    overrides: HashMap<StockKey, u32>,
}

impl StockThresholds {
    #[must_use]
    pub fn new(default: u32) -> Self {
        Self { default, overrides: HashMap::new() }
    }

    /// Build from the persisted `"name|brand"` → threshold map.
    #[must_use]
    pub fn from_config(config: &InventoryConfig) -> Self {
        let overrides = config
            .low_stock_thresholds
            .iter()
            .map(|(raw, threshold)| (StockKey::parse(raw), *threshold))
            .collect();
        Self { default: config.default_low_stock_threshold, overrides }
    }

    #[must_use]
    pub fn with_override(mut self, key: StockKey, threshold: u32) -> Self {
        self.overrides.insert(key, threshold);
        self
    }

    #[must_use]
    pub fn threshold_for(&self, key: &StockKey) -> u32 {
        self.overrides.get(key).copied().unwrap_or(self.default)
    }

    #[must_use]
    pub const fn default_threshold(&self) -> u32 {
        self.default
    }
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self::from_config(&InventoryConfig::default())
    }
}
