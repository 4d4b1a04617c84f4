//! Asset records
//!
//! [`RawAsset`] is the camelCase shape returned by the remote API.
//! [`Asset`] is the ingested form: tracking method, holder and status are
//! resolved once here so that read sites never re-infer them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;
use crate::utils::dates::{parse_calendar_date, parse_record_timestamp};
use crate::{NetAssetError, Result};

/* -------------------------------------------------------------------------- */
/* Status & tracking */
/* -------------------------------------------------------------------------- */

/// Physical state of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum AssetStatus {
    InStorage,
    InUse,
    Damaged,
    UnderRepair,
    OutForRepair,
}

impl_domain_status_conversions!(AssetStatus {
    InStorage => "in_storage",
    InUse => "in_use",
    Damaged => "damaged",
    UnderRepair => "under_repair",
    OutForRepair => "out_for_repair",
});

/// How an item kind is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum TrackingMethod {
    /// One record per physical unit (ONT, router, switch)
    Individual,
    /// One record holding a measured balance (cable in meters, connectors)
    Bulk,
}

impl_domain_status_conversions!(TrackingMethod {
    Individual => "individual",
    Bulk => "bulk",
});

/// Remaining and original quantity of a bulk record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct BulkBalance {
    pub initial_balance: f64,
    pub current_balance: f64,
}

/// Tracking method together with the data only bulk records carry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Tracking {
    Individual,
    Bulk(BulkBalance),
}

impl Tracking {
    #[must_use]
    pub const fn method(&self) -> TrackingMethod {
        match self {
            Self::Individual => TrackingMethod::Individual,
            Self::Bulk(_) => TrackingMethod::Bulk,
        }
    }

    /// Units this record contributes to a registration tally: one for an
    /// individual asset, the initial balance for a bulk record.
    #[must_use]
    pub fn registered_units(&self) -> f64 {
        match self {
            Self::Individual => 1.0,
            Self::Bulk(balance) => balance.initial_balance,
        }
    }
}

/// Who currently holds an asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum AssetHolder {
    Customer(String),
    User(String),
    Unassigned,
}

/* -------------------------------------------------------------------------- */
/* Asset */
/* -------------------------------------------------------------------------- */

/// One entry of an asset's append-only activity log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AssetLogEntry {
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub actor: Option<String>,
    pub details: Option<String>,
}

/// Request line item an asset was registered against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AssetOrigin {
    pub request_id: String,
    pub request_item_id: String,
}

/// A physical asset as held in the in-memory snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub serial_number: Option<String>,
    pub mac_address: Option<String>,
    pub category: String,
    pub type_name: Option<String>,
    pub unit_of_measure: String,
    pub tracking: Tracking,
    pub status: AssetStatus,
    pub condition: Option<String>,
    pub holder: AssetHolder,
    pub purchase_price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub origin: Option<AssetOrigin>,
    pub activity_log: Vec<AssetLogEntry>,
}

impl Asset {
    #[must_use]
    pub const fn tracking_method(&self) -> TrackingMethod {
        self.tracking.method()
    }

    /// Activity log ordered for display, newest first. Entries with equal
    /// timestamps keep their insertion order.
    #[must_use]
    pub fn activity_log_newest_first(&self) -> Vec<&AssetLogEntry> {
        let mut entries: Vec<&AssetLogEntry> = self.activity_log.iter().collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }
}

/* -------------------------------------------------------------------------- */
/* Raw API records */
/* -------------------------------------------------------------------------- */

/// Category as embedded in an API asset record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCategory {
    pub name: String,
    #[serde(default)]
    pub tracking_method: Option<String>,
}

/// Activity log entry as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLogEntry {
    pub timestamp: String,
    pub action: String,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// Asset record as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAsset {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub serial_number: Option<String>,
    pub mac_address: Option<String>,
    pub category: Option<RawCategory>,
    pub type_name: Option<String>,
    pub unit_of_measure: Option<String>,
    pub status: String,
    pub condition: Option<String>,
    pub current_customer_id: Option<String>,
    pub current_user_id: Option<String>,
    pub purchase_price: Option<f64>,
    pub purchase_date: Option<String>,
    pub initial_balance: Option<f64>,
    pub current_balance: Option<f64>,
    pub request_id: Option<String>,
    pub request_item_id: Option<String>,
    pub activity_log: Vec<RawLogEntry>,
}

const DEFAULT_UNIT: &str = "unit";
const UNCATEGORIZED: &str = "Uncategorized";

impl RawAsset {
    fn resolve_tracking(&self) -> Tracking {
        let declared = self
            .category
            .as_ref()
            .and_then(|c| c.tracking_method.as_deref())
            .and_then(|m| m.parse::<TrackingMethod>().ok());

        let balance = || BulkBalance {
            initial_balance: self.initial_balance.or(self.current_balance).unwrap_or(0.0),
            current_balance: self.current_balance.or(self.initial_balance).unwrap_or(0.0),
        };

        match declared {
            Some(TrackingMethod::Individual) => Tracking::Individual,
            Some(TrackingMethod::Bulk) => Tracking::Bulk(balance()),
            None if self.initial_balance.is_some() || self.current_balance.is_some() => {
                Tracking::Bulk(balance())
            }
            None => Tracking::Individual,
        }
    }

    fn resolve_holder(&self) -> AssetHolder {
        let non_empty = |v: &Option<String>| v.as_ref().filter(|s| !s.trim().is_empty()).cloned();
        non_empty(&self.current_customer_id).map_or_else(
            || non_empty(&self.current_user_id).map_or(AssetHolder::Unassigned, AssetHolder::User),
            AssetHolder::Customer,
        )
    }
}

impl TryFrom<RawAsset> for Asset {
    type Error = NetAssetError;

    fn try_from(raw: RawAsset) -> Result<Self> {
        if raw.id.trim().is_empty() {
            return Err(NetAssetError::InvalidInput("asset record without id".to_string()));
        }

        let status = raw
            .status
            .parse::<AssetStatus>()
            .map_err(|e| NetAssetError::InvalidInput(format!("asset {}: {e}", raw.id)))?;

        let purchase_date = raw.purchase_date.as_deref().and_then(|value| {
            let parsed = parse_calendar_date(value);
            if parsed.is_none() {
                tracing::debug!(asset_id = %raw.id, value, "Ignoring unparseable purchase date");
            }
            parsed
        });

        let mut activity_log = Vec::with_capacity(raw.activity_log.len());
        for entry in &raw.activity_log {
            match parse_record_timestamp(&entry.timestamp) {
                Some(timestamp) => activity_log.push(AssetLogEntry {
                    timestamp,
                    action: entry.action.clone(),
                    actor: entry.actor.clone(),
                    details: entry.details.clone(),
                }),
                None => tracing::debug!(
                    asset_id = %raw.id,
                    timestamp = %entry.timestamp,
                    "Dropping activity log entry with unparseable timestamp"
                ),
            }
        }

        let origin = match (&raw.request_id, &raw.request_item_id) {
            (Some(request_id), Some(request_item_id)) => Some(AssetOrigin {
                request_id: request_id.clone(),
                request_item_id: request_item_id.clone(),
            }),
            _ => None,
        };

        let tracking = raw.resolve_tracking();
        let holder = raw.resolve_holder();

        Ok(Self {
            category: raw.category.map_or_else(|| UNCATEGORIZED.to_string(), |c| c.name),
            unit_of_measure: raw.unit_of_measure.unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            id: raw.id,
            name: raw.name,
            brand: raw.brand,
            serial_number: raw.serial_number,
            mac_address: raw.mac_address,
            type_name: raw.type_name,
            tracking,
            status,
            condition: raw.condition,
            holder,
            purchase_price: raw.purchase_price,
            purchase_date,
            origin,
            activity_log,
        })
    }
}
