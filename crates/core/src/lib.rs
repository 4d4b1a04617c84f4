//! # NetAsset Core
//!
//! Pure derived-state logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Quantity reconciliation of request items against registered assets
//! - Stock aggregation per `(name, brand)` item kind
//! - Customer activity timeline merging
//! - Straight-line depreciation
//! - The snapshot port and the `InventoryService` facade
//!
//! ## Architecture Principles
//! - Only depends on `netasset-common` and `netasset-domain`
//! - No file, network or database code
//! - Inputs are never mutated; every call returns a new derived value

pub mod depreciation;
pub mod inventory;
pub mod reconciliation;
pub mod snapshot;
pub mod stock;
pub mod timeline;

pub use depreciation::DepreciationCalculator;
pub use inventory::InventoryService;
pub use reconciliation::{
    reconcile_item, reconcile_request, registration_tally, RegistrationTally,
};
pub use snapshot::{SnapshotSource, StaticSnapshotSource};
pub use stock::{sort_stock, summarize_stock, StockAggregator, StockThresholds};
pub use timeline::{maintenance_title, TimelineMerger, TimelineSources};
