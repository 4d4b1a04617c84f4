//! Domain types and models
//!
//! Source records (as fetched from the API) live next to the derived,
//! display-only records built from them.

pub mod activity;
pub mod asset;
pub mod depreciation;
pub mod fulfillment;
pub mod request;
pub mod snapshot;
pub mod stock;

pub use activity::{
    ActivityDetail, ActivityKind, AssetRef, CustomerActivity, DeviceReplacement, Dismantle,
    Installation, Maintenance, MaterialLine, MaterialUsage, NavigationTarget, ReplacementLine,
    Timeline, TimelineWarning,
};
pub use asset::{
    Asset, AssetHolder, AssetLogEntry, AssetOrigin, AssetStatus, BulkBalance, RawAsset,
    RawCategory, RawLogEntry, Tracking, TrackingMethod,
};
pub use depreciation::{Depreciation, PortfolioBookValue};
pub use fulfillment::{ItemReconciliation, RequestFulfillment};
pub use request::{ApprovalStatus, ItemApproval, Request, RequestItem, RequestKind};
pub use snapshot::{Customer, IngestReport, InventorySnapshot, RawSnapshot};
pub use stock::{StockItem, StockKey, StockReport, StockSort, StockSummary};
