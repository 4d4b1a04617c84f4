//! Snapshot sources for failure-path tests

use std::sync::Arc;

use netasset_core::SnapshotSource;
use netasset_domain::{InventorySnapshot, NetAssetError, Result};

/// Always fails with an I/O error
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSnapshotSource;

impl SnapshotSource for FailingSnapshotSource {
    fn load(&self) -> Result<Arc<InventorySnapshot>> {
        Err(NetAssetError::Io("snapshot export unavailable".to_string()))
    }
}
