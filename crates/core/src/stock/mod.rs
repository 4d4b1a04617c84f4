//! Stock aggregation by item kind

pub mod aggregator;
pub mod thresholds;

pub use aggregator::{sort_stock, summarize_stock, StockAggregator};
pub use thresholds::StockThresholds;
