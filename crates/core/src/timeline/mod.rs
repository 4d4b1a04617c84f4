//! Customer activity timeline

pub mod merger;

pub use merger::{maintenance_title, TimelineMerger, TimelineSources};
