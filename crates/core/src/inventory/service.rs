//! Inventory service - read-side entry point for the UI
//!
//! Every call loads the current snapshot and recomputes the derived view;
//! nothing is cached between calls.

use std::sync::Arc;

use netasset_common::Clock;
use netasset_domain::{
    Config, Depreciation, NetAssetError, PortfolioBookValue, RequestFulfillment, Result,
    StockReport, StockSort, Timeline,
};

use crate::depreciation::DepreciationCalculator;
use crate::reconciliation::{reconcile_request, registration_tally};
use crate::snapshot::SnapshotSource;
use crate::stock::{StockAggregator, StockThresholds};
use crate::timeline::{TimelineMerger, TimelineSources};

/// Derived inventory views over a snapshot source
pub struct InventoryService {
    source: Arc<dyn SnapshotSource>,
    clock: Arc<dyn Clock>,
    stock: StockAggregator,
    timeline: TimelineMerger,
    depreciation: DepreciationCalculator,
}

impl InventoryService {
    /// Create a new inventory service
    ///
    /// # Errors
    /// Returns `NetAssetError::Config` when `config` fails validation.
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        clock: Arc<dyn Clock>,
        config: &Config,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source,
            clock,
            stock: StockAggregator::new(StockThresholds::from_config(&config.inventory)),
            timeline: TimelineMerger::from_config(&config.timeline),
            depreciation: DepreciationCalculator::from_config(&config.depreciation)?,
        })
    }

    /// Stock per item kind in the requested order, with totals
    pub fn stock_report(&self, sort: StockSort) -> Result<StockReport> {
        let snapshot = self.source.load()?;
        Ok(self.stock.report(&snapshot.assets, sort))
    }

    /// Registration progress of a purchase or loan request
    pub fn request_fulfillment(&self, request_id: &str) -> Result<RequestFulfillment> {
        let snapshot = self.source.load()?;
        let request = snapshot
            .request(request_id)
            .ok_or_else(|| NetAssetError::NotFound(format!("request {request_id}")))?;
        let tally = registration_tally(&snapshot.assets);
        Ok(reconcile_request(request, &tally))
    }

    /// Activity feed of a customer, newest first
    pub fn customer_timeline(&self, customer_id: &str) -> Result<Timeline> {
        let snapshot = self.source.load()?;
        if snapshot.customer(customer_id).is_none() {
            return Err(NetAssetError::NotFound(format!("customer {customer_id}")));
        }

        let sources = TimelineSources {
            installations: &snapshot.installations,
            maintenances: &snapshot.maintenances,
            dismantles: &snapshot.dismantles,
        };
        let timeline =
            self.timeline.merge(customer_id, sources, &snapshot.assets, self.clock.now());

        if !timeline.warnings.is_empty() {
            tracing::warn!(
                customer_id,
                warnings = timeline.warnings.len(),
                "Customer timeline contains records with invalid dates"
            );
        }
        Ok(timeline)
    }

    /// Book value of one asset; `Ok(None)` when its purchase record is
    /// incomplete.
    pub fn asset_book_value(&self, asset_id: &str) -> Result<Option<Depreciation>> {
        let snapshot = self.source.load()?;
        let asset = snapshot
            .asset(asset_id)
            .ok_or_else(|| NetAssetError::NotFound(format!("asset {asset_id}")))?;
        Ok(self.depreciation.calculate(asset, self.clock.today()))
    }

    /// Book value across all assets
    pub fn portfolio_book_value(&self) -> Result<PortfolioBookValue> {
        let snapshot = self.source.load()?;
        Ok(self.depreciation.portfolio(&snapshot.assets, self.clock.today()))
    }
}
