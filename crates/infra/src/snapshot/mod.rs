//! File-backed snapshot sources

pub mod json_file;

pub use json_file::JsonFileSnapshotSource;
