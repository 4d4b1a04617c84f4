//! In-memory snapshot source

use std::sync::{Arc, PoisonError, RwLock};

use netasset_domain::{InventorySnapshot, Result};

use super::ports::SnapshotSource;

/// Serves a snapshot held in memory; `replace` swaps in fresh data.
#[derive(Debug, Default)]
pub struct StaticSnapshotSource {
    current: RwLock<Arc<InventorySnapshot>>,
}

impl StaticSnapshotSource {
    #[must_use]
    pub fn new(snapshot: InventorySnapshot) -> Self {
        Self { current: RwLock::new(Arc::new(snapshot)) }
    }

    /// Replace the held snapshot. Readers holding the previous `Arc` keep it.
    pub fn replace(&self, snapshot: InventorySnapshot) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(snapshot);
    }
}

impl SnapshotSource for StaticSnapshotSource {
    fn load(&self) -> Result<Arc<InventorySnapshot>> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(&guard))
    }
}
