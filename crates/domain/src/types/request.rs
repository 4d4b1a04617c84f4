//! Purchase and loan requests
//!
//! A request carries line items; each item may have an approval record set by
//! the approver. Assets registered against an item reference it through
//! [`AssetOrigin`](crate::types::asset::AssetOrigin).

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;

/// Kind of request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum RequestKind {
    Purchase,
    Loan,
}

impl_domain_status_conversions!(RequestKind {
    Purchase => "purchase",
    Loan => "loan",
});

/// Approver decision on a single line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ApprovalStatus {
    Approved,
    Rejected,
    Pending,
}

impl_domain_status_conversions!(ApprovalStatus {
    Approved => "approved",
    Rejected => "rejected",
    Pending => "pending",
});

/// Per-item approval record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ItemApproval {
    pub approved_quantity: f64,
    pub status: ApprovalStatus,
}

/// A single requested line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct RequestItem {
    pub id: String,
    pub item_name: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub quantity: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub approval: Option<ItemApproval>,
}

impl RequestItem {
    /// True when the approver explicitly rejected this line.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.approval.is_some_and(|a| a.status == ApprovalStatus::Rejected)
    }
}

/// A purchase or loan request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: String,
    pub document_number: String,
    pub kind: RequestKind,
    #[serde(default)]
    pub requester_id: Option<String>,
    #[serde(default)]
    pub items: Vec<RequestItem>,
}
