//! Integration test utilities for the Story Time API
//!
//! Spawns the real router on an ephemeral port, backed by the in-memory
//! gateway, and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
