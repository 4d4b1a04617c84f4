//! In-memory snapshot of the collections the UI store holds
//!
//! The derivations never mutate a snapshot; a new one replaces the old when
//! fresh data arrives from the API.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::activity::{Dismantle, Installation, Maintenance};
use crate::types::asset::{Asset, RawAsset};
use crate::types::request::Request;

/// Customer record (only the fields the derivations need)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Collections exactly as exported by the API
///
/// Every collection other than assets is held as untyped JSON so a single
/// malformed record can be dropped without failing the whole export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSnapshot {
    pub customers: Vec<Value>,
    pub assets: Vec<RawAsset>,
    pub requests: Vec<Value>,
    pub installations: Vec<Value>,
    pub maintenances: Vec<Value>,
    pub dismantles: Vec<Value>,
}

/// Outcome of ingesting a raw export
///
/// `accepted` and `skipped` count asset records. The remaining counters
/// track records dropped from the other collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    pub accepted: usize,
    pub skipped: usize,
    pub skipped_customers: usize,
    pub skipped_requests: usize,
    /// Installations, maintenances and dismantles together
    pub skipped_documents: usize,
}

impl IngestReport {
    /// Records skipped across every collection.
    #[must_use]
    pub const fn total_skipped(&self) -> usize {
        self.skipped + self.skipped_customers + self.skipped_requests + self.skipped_documents
    }
}

/// Read-only view handed to every derivation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub customers: Vec<Customer>,
    pub assets: Vec<Asset>,
    pub requests: Vec<Request>,
    pub installations: Vec<Installation>,
    pub maintenances: Vec<Maintenance>,
    pub dismantles: Vec<Dismantle>,
}

impl InventorySnapshot {
    /// Ingest raw API collections.
    ///
    /// Records that cannot be resolved (missing id, unknown status, missing
    /// required field) are skipped with a warning instead of failing the
    /// whole snapshot.
    #[must_use]
    pub fn from_raw(raw: RawSnapshot) -> (Self, IngestReport) {
        let mut report = IngestReport::default();
        let mut assets = Vec::with_capacity(raw.assets.len());

        for record in raw.assets {
            match Asset::try_from(record) {
                Ok(asset) => {
                    report.accepted += 1;
                    assets.push(asset);
                }
                Err(err) => {
                    report.skipped += 1;
                    tracing::warn!(error = %err, "Skipping malformed asset record");
                }
            }
        }

        let customers = decode_records(raw.customers, "customer", &mut report.skipped_customers);
        let requests = decode_records(raw.requests, "request", &mut report.skipped_requests);
        let installations =
            decode_records(raw.installations, "installation", &mut report.skipped_documents);
        let maintenances =
            decode_records(raw.maintenances, "maintenance", &mut report.skipped_documents);
        let dismantles = decode_records(raw.dismantles, "dismantle", &mut report.skipped_documents);

        tracing::debug!(
            accepted = report.accepted,
            skipped = report.total_skipped(),
            customers = customers.len(),
            requests = requests.len(),
            "Snapshot ingested"
        );

        let snapshot =
            Self { customers, assets, requests, installations, maintenances, dismantles };
        (snapshot, report)
    }

    #[must_use]
    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn request(&self, id: &str) -> Option<&Request> {
        self.requests.iter().find(|r| r.id == id)
    }
}

fn decode_records<T: DeserializeOwned>(
    values: Vec<Value>,
    collection: &'static str,
    skipped: &mut usize,
) -> Vec<T> {
    let mut records = Vec::with_capacity(values.len());
    for value in values {
        let id = value.get("id").and_then(Value::as_str).unwrap_or_default().to_owned();
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(err) => {
                *skipped += 1;
                tracing::warn!(collection, id = %id, error = %err, "Skipping malformed record");
            }
        }
    }
    records
}
