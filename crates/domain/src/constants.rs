//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Depreciation
pub const DEFAULT_USEFUL_LIFE_YEARS: u32 = 4;
pub const MONTHS_PER_YEAR: u32 = 12;
/// Upper bound on a configurable useful life
pub const MAX_USEFUL_LIFE_YEARS: u32 = 100;

// Stock
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;
/// Separator used when a stock key is rendered as a single string
/// (`"name|brand"`), e.g. as a key in persisted threshold maps.
pub const STOCK_KEY_SEPARATOR: char = '|';

// Timeline titles
pub const TITLE_INSTALLATION: &str = "New installation";
pub const TITLE_DEVICE_REPLACEMENT: &str = "Device replacement";
pub const TITLE_MATERIAL_ADDITION: &str = "Material addition";
pub const TITLE_ROUTINE_REPAIR: &str = "Routine repair";
pub const TITLE_DISMANTLE: &str = "Device dismantle";
