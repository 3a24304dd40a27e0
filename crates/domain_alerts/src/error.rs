//! Alert domain errors

use thiserror::Error;

/// Errors that can occur in the alert domain
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("Alert already closed with status {status}")]
    AlreadyClosed { status: String },
}
