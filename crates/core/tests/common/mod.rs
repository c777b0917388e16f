//! Common test utilities shared by the integration tests.
//!
//! - Fixtures: sample step sequences and project directories
//! - Assertions: window comparisons by step id

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
