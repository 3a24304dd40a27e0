//! Claims Intake Application Service
//!
//! Orchestrates one claim submission end to end:
//!
//! ```text
//! submission -> score -> persist claim -> (if fraud) persist alert + audit -> verdict
//! ```
//!
//! The scoring engine and the side-effect policy are pure; this crate
//! owns the only impure step, applying their decisions through storage
//! ports. The in-memory adapters here back the test suite and small
//! deployments.

pub mod ports;
pub mod memory;
pub mod service;

pub use ports::{AlertRepository, AuditTrail, ClaimRepository};
pub use memory::{InMemoryAlertStore, InMemoryAuditTrail, InMemoryClaimStore};
pub use service::{ClaimSubmission, IntakeOutcome, IntakeService};
