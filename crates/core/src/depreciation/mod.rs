//! Straight-line book value

pub mod calculator;

pub use calculator::DepreciationCalculator;
