//! Test Utilities
//!
//! Shared builders and fixtures for the sentinel test suite. Everything
//! here is deterministic: fixtures are fixed values, not generated data,
//! so watchlist membership in tests is never a matter of luck.

pub mod builders;
pub mod fixtures;

pub use builders::ClaimSubmissionBuilder;
pub use fixtures::{AmountFixtures, DiagnosisFixtures, ProviderFixtures};
