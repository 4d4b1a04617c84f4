//! Stock aggregator
//!
//! Groups the live asset collection by `(name, brand)` and counts each group
//! per status bucket. Groups come out in first-seen order so a later stable
//! sort breaks ties by insertion order.

use std::cmp::Ordering;

use ahash::AHashMap;
use netasset_domain::{
    Asset, AssetStatus, StockItem, StockKey, StockReport, StockSort, StockSummary,
};

use super::thresholds::StockThresholds;

/// Builds [`StockItem`]s from assets
#[derive(Debug, Clone, Default)]
pub struct StockAggregator {
    thresholds: StockThresholds,
}

impl StockAggregator {
    #[must_use]
    pub const fn new(thresholds: StockThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub const fn thresholds(&self) -> &StockThresholds {
        &self.thresholds
    }

    /// Aggregate assets into one item per `(name, brand)` key.
    ///
    /// Descriptive fields (category, unit, tracking method) come from the
    /// first asset of each key. Statuses outside in-storage/in-use/damaged
    /// only count toward `total`.
    #[must_use]
    pub fn aggregate(&self, assets: &[Asset]) -> Vec<StockItem> {
        let mut index: AHashMap<StockKey, usize> = AHashMap::new();
        let mut items: Vec<StockItem> = Vec::new();

        for asset in assets {
            let key = StockKey::new(asset.name.as_str(), asset.brand.as_str());
            let slot = *index.entry(key).or_insert_with_key(|key| {
                items.push(StockItem {
                    key: key.clone(),
                    category: asset.category.clone(),
                    unit_of_measure: asset.unit_of_measure.clone(),
                    tracking_method: asset.tracking_method(),
                    in_storage: 0,
                    in_use: 0,
                    damaged: 0,
                    total: 0,
                    value_in_storage: 0.0,
                    low_stock_threshold: 0,
                    is_low_stock: false,
                });
                items.len() - 1
            });

            let item = &mut items[slot];
            item.total += 1;
            match asset.status {
                AssetStatus::InStorage => {
                    item.in_storage += 1;
                    item.value_in_storage += asset.purchase_price.unwrap_or(0.0);
                }
                AssetStatus::InUse => item.in_use += 1,
                AssetStatus::Damaged => item.damaged += 1,
                AssetStatus::UnderRepair | AssetStatus::OutForRepair => {}
            }
        }

        for item in &mut items {
            item.low_stock_threshold = self.thresholds.threshold_for(&item.key);
            item.is_low_stock = item.in_storage <= u64::from(item.low_stock_threshold);
        }

        tracing::debug!(assets = assets.len(), item_kinds = items.len(), "Stock aggregated");
        items
    }

    /// Aggregate, sort and summarize in one pass.
    #[must_use]
    pub fn report(&self, assets: &[Asset], sort: StockSort) -> StockReport {
        let mut items = self.aggregate(assets);
        sort_stock(&mut items, sort);
        let summary = summarize_stock(&items);
        StockReport { items, summary }
    }
}

/// Sort stock items in place. The sort is stable.
pub fn sort_stock(items: &mut [StockItem], sort: StockSort) {
    match sort {
        StockSort::Name => items.sort_by(|a, b| a.key.cmp(&b.key)),
        StockSort::Total => items.sort_by(|a, b| b.total.cmp(&a.total)),
        StockSort::InStorage => items.sort_by(|a, b| a.in_storage.cmp(&b.in_storage)),
        StockSort::ValueInStorage => items.sort_by(|a, b| {
            b.value_in_storage.partial_cmp(&a.value_in_storage).unwrap_or(Ordering::Equal)
        }),
    }
}

#[must_use]
pub fn summarize_stock(items: &[StockItem]) -> StockSummary {
    items.iter().fold(StockSummary::default(), |mut summary, item| {
        summary.item_kinds += 1;
        summary.total_assets += item.total;
        summary.total_value_in_storage += item.value_in_storage;
        if item.is_low_stock {
            summary.low_stock_kinds += 1;
        }
        summary
    })
}

#[cfg(test)]
mod tests {
    use netasset_domain::{AssetHolder, BulkBalance, Tracking, TrackingMethod};

    use super::*;

    fn asset(id: &str, name: &str, brand: &str, status: AssetStatus, price: Option<f64>) -> Asset {
        Asset {
            id: id.to_string(),
            name: name.to_string(),
            brand: brand.to_string(),
            serial_number: None,
            mac_address: None,
            category: "CPE".to_string(),
            type_name: None,
            unit_of_measure: "unit".to_string(),
            tracking: Tracking::Individual,
            status,
            condition: None,
            holder: AssetHolder::Unassigned,
            purchase_price: price,
            purchase_date: None,
            origin: None,
            activity_log: Vec::new(),
        }
    }

    #[test]
    fn test_counts_per_bucket() {
        let assets = vec![
            asset("a-1", "ONT", "Huawei", AssetStatus::InStorage, Some(500.0)),
            asset("a-2", "ONT", "Huawei", AssetStatus::InStorage, None),
            asset("a-3", "ONT", "Huawei", AssetStatus::InUse, Some(500.0)),
            asset("a-4", "ONT", "Huawei", AssetStatus::Damaged, Some(500.0)),
            asset("a-5", "ONT", "Huawei", AssetStatus::UnderRepair, Some(500.0)),
        ];

        let items = StockAggregator::default().aggregate(&assets);
        assert_eq!(items.len(), 1);

        let item = &items[0];
        assert_eq!(item.in_storage, 2);
        assert_eq!(item.in_use, 1);
        assert_eq!(item.damaged, 1);
        assert_eq!(item.total, 5);
        assert_eq!(item.other_statuses(), 1);
        assert_eq!(item.value_in_storage, 500.0);
    }

    #[test]
    fn test_same_name_different_brand_are_separate_kinds() {
        let assets = vec![
            asset("a-1", "ONT", "Huawei", AssetStatus::InStorage, None),
            asset("a-2", "ONT", "ZTE", AssetStatus::InStorage, None),
            asset("a-3", "ONT", "Huawei", AssetStatus::InUse, None),
        ];

        let items = StockAggregator::default().aggregate(&assets);
        let keys: Vec<String> = items.iter().map(|i| i.key.to_string()).collect();
        assert_eq!(keys, vec!["ONT|Huawei", "ONT|ZTE"]);
    }

    #[test]
    fn test_descriptive_fields_come_from_first_asset() {
        let mut first = asset("a-1", "Drop cable", "Fiberhome", AssetStatus::InStorage, None);
        first.category = "Fiber material".to_string();
        first.unit_of_measure = "meter".to_string();
        first.tracking =
            Tracking::Bulk(BulkBalance { initial_balance: 1000.0, current_balance: 1000.0 });
        let second = asset("a-2", "Drop cable", "Fiberhome", AssetStatus::InStorage, None);

        let items = StockAggregator::default().aggregate(&[first, second]);
        assert_eq!(items[0].category, "Fiber material");
        assert_eq!(items[0].unit_of_measure, "meter");
        assert_eq!(items[0].tracking_method, TrackingMethod::Bulk);
    }

    #[test]
    fn test_totals_cover_every_asset() {
        let statuses = [
            AssetStatus::InStorage,
            AssetStatus::InUse,
            AssetStatus::Damaged,
            AssetStatus::UnderRepair,
            AssetStatus::OutForRepair,
        ];
        let assets: Vec<Asset> = (0..37)
            .map(|n| {
                asset(
                    &format!("a-{n}"),
                    &format!("Item {}", n % 4),
                    if n % 3 == 0 { "A" } else { "B" },
                    statuses[n % statuses.len()],
                    Some(10.0),
                )
            })
            .collect();

        let items = StockAggregator::default().aggregate(&assets);
        let total: u64 = items.iter().map(|i| i.total).sum();
        assert_eq!(total, 37);
        for item in &items {
            assert_eq!(
                item.total,
                item.in_storage + item.in_use + item.damaged + item.other_statuses()
            );
        }
    }

    #[test]
    fn test_low_stock_is_inclusive() {
        let thresholds = StockThresholds::new(2).with_override(StockKey::new("ONT", "ZTE"), 0);
        let assets = vec![
            asset("a-1", "ONT", "Huawei", AssetStatus::InStorage, None),
            asset("a-2", "ONT", "Huawei", AssetStatus::InStorage, None),
            asset("a-3", "ONT", "ZTE", AssetStatus::InStorage, None),
        ];

        let items = StockAggregator::new(thresholds).aggregate(&assets);
        assert_eq!(items[0].low_stock_threshold, 2);
        assert!(items[0].is_low_stock);
        assert_eq!(items[1].low_stock_threshold, 0);
        assert!(!items[1].is_low_stock);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let assets = vec![
            asset("a-1", "Router", "", AssetStatus::InUse, None),
            asset("a-2", "Patch cord", "", AssetStatus::InUse, None),
            asset("a-3", "ONT", "", AssetStatus::InUse, None),
            asset("a-4", "ONT", "", AssetStatus::InUse, None),
        ];
        let mut items = StockAggregator::default().aggregate(&assets);

        sort_stock(&mut items, StockSort::InStorage);
        let names: Vec<&str> = items.iter().map(|i| i.key.name.as_str()).collect();
        assert_eq!(names, vec!["Router", "Patch cord", "ONT"]);

        sort_stock(&mut items, StockSort::Total);
        assert_eq!(items[0].key.name, "ONT");
        assert_eq!(items[1].key.name, "Router");

        sort_stock(&mut items, StockSort::Name);
        let names: Vec<&str> = items.iter().map(|i| i.key.name.as_str()).collect();
        assert_eq!(names, vec!["ONT", "Patch cord", "Router"]);
    }

    #[test]
    fn test_report_summary() {
        let assets = vec![
            asset("a-1", "ONT", "Huawei", AssetStatus::InStorage, Some(100.0)),
            asset("a-2", "Router", "Mikrotik", AssetStatus::InStorage, Some(250.5)),
            asset("a-3", "Router", "Mikrotik", AssetStatus::InUse, Some(250.5)),
        ];

        let report = StockAggregator::new(StockThresholds::new(0))
            .report(&assets, StockSort::ValueInStorage);
        assert_eq!(report.items[0].key.name, "Router");
        assert_eq!(report.summary.item_kinds, 2);
        assert_eq!(report.summary.total_assets, 3);
        assert_eq!(report.summary.total_value_in_storage, 350.5);
        assert_eq!(report.summary.low_stock_kinds, 0);
    }

    #[test]
    fn test_empty_collection() {
        let report = StockAggregator::default().report(&[], StockSort::Name);
        assert!(report.items.is_empty());
        assert_eq!(report.summary, StockSummary::default());
    }
}
