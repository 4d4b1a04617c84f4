//! Snapshot source backed by a JSON export of the API collections

use std::path::{Path, PathBuf};
use std::sync::Arc;

use netasset_core::SnapshotSource;
use netasset_domain::{
    IngestReport, InventorySnapshot, NetAssetError, RawSnapshot, Result, SnapshotConfig,
};

/// Reads and ingests the export file on every `load`
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotSource {
    path: PathBuf,
}

impl JsonFileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// # Errors
    /// Returns `NetAssetError::Config` when no snapshot path is configured.
    pub fn from_config(config: &SnapshotConfig) -> Result<Self> {
        config
            .path
            .as_ref()
            .map(|path| Self::new(path.clone()))
            .ok_or_else(|| NetAssetError::Config("snapshot.path is not configured".to_string()))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the export and ingest it, returning the ingestion counts as well.
    ///
    /// # Errors
    /// Returns `NetAssetError::Io` when the file cannot be read and
    /// `NetAssetError::Parse` when it is not a valid export.
    pub fn read(&self) -> Result<(InventorySnapshot, IngestReport)> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            NetAssetError::Io(format!("Failed to read snapshot {}: {e}", self.path.display()))
        })?;
        let raw: RawSnapshot = serde_json::from_str(&contents)?;
        let (snapshot, report) = InventorySnapshot::from_raw(raw);

        if report.total_skipped() > 0 {
            tracing::warn!(
                path = %self.path.display(),
                skipped_assets = report.skipped,
                skipped_customers = report.skipped_customers,
                skipped_requests = report.skipped_requests,
                skipped_documents = report.skipped_documents,
                accepted = report.accepted,
                "Snapshot contained malformed records"
            );
        } else {
            tracing::debug!(
                path = %self.path.display(),
                accepted = report.accepted,
                "Snapshot loaded"
            );
        }
        Ok((snapshot, report))
    }
}

impl SnapshotSource for JsonFileSnapshotSource {
    fn load(&self) -> Result<Arc<InventorySnapshot>> {
        self.read().map(|(snapshot, _)| Arc::new(snapshot))
    }
}
