//! Field-work documents and the customer activity feed built from them
//!
//! Installations, maintenance visits and dismantles are fetched as-is from
//! the API (dates stay raw strings). [`CustomerActivity`] is the normalized,
//! display-only union the timeline merger produces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;

/* -------------------------------------------------------------------------- */
/* Source documents */
/* -------------------------------------------------------------------------- */

/// Quantity of a bulk asset consumed at a customer site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialUsage {
    pub asset_id: String,
    pub quantity: f64,
}

/// Device swapped during a maintenance visit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceReplacement {
    pub old_asset_id: String,
    pub new_asset_id: String,
}

/// New service installation at a customer site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installation {
    pub id: String,
    pub document_number: String,
    pub customer_id: String,
    pub date: String,
    #[serde(default)]
    pub technician_name: Option<String>,
    #[serde(default)]
    pub asset_ids: Vec<String>,
    #[serde(default)]
    pub materials_used: Vec<MaterialUsage>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Maintenance visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    pub id: String,
    pub document_number: String,
    pub customer_id: String,
    pub date: String,
    #[serde(default)]
    pub technician_name: Option<String>,
    #[serde(default)]
    pub problem_description: Option<String>,
    #[serde(default)]
    pub replacements: Vec<DeviceReplacement>,
    #[serde(default)]
    pub materials_used: Vec<MaterialUsage>,
}

/// Retrieval of devices from a customer site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dismantle {
    pub id: String,
    pub document_number: String,
    pub customer_id: String,
    pub date: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub retrieved_asset_ids: Vec<String>,
}

/* -------------------------------------------------------------------------- */
/* Normalized feed */
/* -------------------------------------------------------------------------- */

/// Which document an activity entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ActivityKind {
    Installation,
    Maintenance,
    Dismantle,
}

impl_domain_status_conversions!(ActivityKind {
    Installation => "installation",
    Maintenance => "maintenance",
    Dismantle => "dismantle",
});

/// An asset referenced by a document, resolved against the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AssetRef {
    Found { id: String, name: String, serial_number: Option<String> },
    /// Placeholder for an id that no longer exists in the asset collection
    Missing { id: String },
}

impl AssetRef {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Found { id, .. } | Self::Missing { id } => id,
        }
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// Text shown in the activity detail
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Found { name, serial_number: Some(sn), .. } => format!("{name} ({sn})"),
            Self::Found { name, serial_number: None, .. } => name.clone(),
            Self::Missing { id } => format!("Asset not found ({id})"),
        }
    }
}

/// Bulk material line in an activity detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MaterialLine {
    pub asset: AssetRef,
    pub quantity: f64,
}

/// Replacement line in a maintenance detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ReplacementLine {
    pub removed: AssetRef,
    pub installed: AssetRef,
}

/// Per-kind payload rendered under an activity entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityDetail {
    Installation {
        technician: Option<String>,
        devices: Vec<AssetRef>,
        materials: Vec<MaterialLine>,
    },
    Maintenance {
        technician: Option<String>,
        problem: Option<String>,
        replacements: Vec<ReplacementLine>,
        materials: Vec<MaterialLine>,
    },
    Dismantle {
        reason: Option<String>,
        retrieved: Vec<AssetRef>,
    },
}

/// Where the UI navigates when an entry is opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct NavigationTarget {
    pub kind: ActivityKind,
    pub id: String,
}

impl NavigationTarget {
    /// Route path of the document page, e.g. `/maintenances/m-1`
    #[must_use]
    pub fn route(&self) -> String {
        format!("/{}s/{}", self.kind, self.id)
    }
}

/// One normalized entry of a customer's activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CustomerActivity {
    pub date: DateTime<Utc>,
    /// True when the record's own date could not be parsed and "now" was used
    pub date_is_fallback: bool,
    pub kind: ActivityKind,
    pub title: String,
    pub document_number: String,
    pub detail: ActivityDetail,
    pub target: NavigationTarget,
}

/// Data-integrity problem found while building a timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct TimelineWarning {
    pub kind: ActivityKind,
    pub record_id: String,
    pub raw_date: String,
    pub message: String,
}

/// A customer's merged activity feed, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Timeline {
    pub customer_id: String,
    pub entries: Vec<CustomerActivity>,
    pub warnings: Vec<TimelineWarning>,
}

impl Timeline {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
