//! Shared test helpers for `netasset-core` integration tests.
//!
//! Fixture builders for assets and documents plus a failing snapshot source,
//! so service tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod sources;
