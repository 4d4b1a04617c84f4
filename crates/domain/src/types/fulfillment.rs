//! Partial-fulfillment view of request line items

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Registration progress of one line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ItemReconciliation {
    pub item_id: String,
    /// Approved quantity, or the requested quantity when no approval exists
    pub approved_quantity: f64,
    pub registered_quantity: f64,
    /// Never negative; over-registration clamps to zero
    pub remaining_quantity: f64,
    pub is_complete: bool,
}

/// Registration progress of a whole request (rejected items excluded)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct RequestFulfillment {
    pub request_id: String,
    pub items: Vec<ItemReconciliation>,
    pub total_remaining: f64,
    pub is_fully_registered: bool,
}
