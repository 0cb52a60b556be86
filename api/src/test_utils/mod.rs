//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Service tests run against the in-memory repositories here. HTTP-level tests
//! in `integration_tests` use the real SeaORM adapters over in-memory SQLite
//! instead, so the persistence round-trip is covered too.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
