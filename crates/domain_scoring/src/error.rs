//! Scoring domain errors

use thiserror::Error;

/// Errors that can occur in the scoring domain
///
/// Scoring itself is total; errors only arise from claim record state
/// management.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },
}
