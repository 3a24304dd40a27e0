//! Fraud Scoring Domain
//!
//! This crate implements the claim risk analysis pipeline from intake
//! payload to verdict.
//!
//! # Scoring Flow
//!
//! ```text
//! ClaimInput -> rule evaluation (additive) -> FraudVerdict
//!                                              |- risk_score / risk_level
//!                                              |- fraud flag + fraud type
//!                                              `- confidence + explanation
//! ```
//!
//! The engine is a pure function over its input: no I/O, no clock, no
//! randomness. Missing or malformed input fields are coerced to safe
//! defaults rather than rejected.

pub mod claim;
pub mod config;
pub mod engine;
pub mod watchlist;
pub mod error;

pub use claim::{Claim, ClaimInput, ClaimStatus};
pub use config::ScoringConfig;
pub use engine::{
    FraudEngine, FraudType, FraudVerdict, RiskLevel, RuleHit, RuleKind, NO_ANOMALY_EXPLANATION,
};
pub use watchlist::{ProviderWatchlist, SubstringWatchlist};
pub use error::ClaimError;
