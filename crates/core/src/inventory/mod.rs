//! Inventory facade over the derivations

pub mod service;

pub use service::InventoryService;
