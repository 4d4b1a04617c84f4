//! Snapshot source port and the in-memory adapter

pub mod ports;
pub mod static_source;

pub use ports::SnapshotSource;
pub use static_source::StaticSnapshotSource;
