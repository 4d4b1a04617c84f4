//! Port interface for obtaining the current inventory snapshot

use std::sync::Arc;

use netasset_domain::{InventorySnapshot, Result};

/// Trait for loading the collections the derivations read
pub trait SnapshotSource: Send + Sync {
    /// Load the current snapshot
    fn load(&self) -> Result<Arc<InventorySnapshot>>;
}
