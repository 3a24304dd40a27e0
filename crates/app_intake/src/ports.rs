//! Storage ports for the intake service
//!
//! Each port covers one store. Adapters implement these traits to
//! provide an internal (in-memory, database) or external implementation;
//! the service only ever sees the trait.

use async_trait::async_trait;

use core_kernel::{AlertId, ClaimId, DomainPort, PortError};
use domain_alerts::{AuditEntry, FraudAlert};
use domain_scoring::{Claim, ClaimStatus};

/// Persistence port for claim records
#[async_trait]
pub trait ClaimRepository: DomainPort {
    /// Inserts a newly submitted claim
    async fn insert(&self, claim: &Claim) -> Result<(), PortError>;

    /// Updates the status of a persisted claim
    async fn update_status(&self, id: ClaimId, status: ClaimStatus) -> Result<(), PortError>;
}

/// Persistence port for fraud alerts
#[async_trait]
pub trait AlertRepository: DomainPort {
    /// Inserts a newly raised alert
    async fn insert(&self, alert: &FraudAlert) -> Result<(), PortError>;

    /// Fetches an alert by id
    async fn get(&self, id: AlertId) -> Result<FraudAlert, PortError>;

    /// Persists an updated alert
    async fn update(&self, alert: &FraudAlert) -> Result<(), PortError>;
}

/// Append-only port for the audit trail
#[async_trait]
pub trait AuditTrail: DomainPort {
    /// Appends an entry; entries are never updated or deleted
    async fn append(&self, entry: &AuditEntry) -> Result<(), PortError>;
}
