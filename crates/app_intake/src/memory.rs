//! In-memory reference adapters
//!
//! Mutex-guarded vectors and maps standing in for real storage. These
//! back the test suite and demo deployments; a database adapter would
//! implement the same ports.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use core_kernel::{AlertId, ClaimId, DomainPort, PortError};
use domain_alerts::{AuditEntry, FraudAlert};
use domain_scoring::{Claim, ClaimStatus};

use crate::ports::{AlertRepository, AuditTrail, ClaimRepository};

/// In-memory claim store
#[derive(Default)]
pub struct InMemoryClaimStore {
    rows: Mutex<HashMap<ClaimId, Claim>>,
}

impl InMemoryClaimStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every stored claim
    pub fn all(&self) -> Result<Vec<Claim>, PortError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| PortError::internal("claim store mutex poisoned"))?;
        Ok(rows.values().cloned().collect())
    }

    /// Fetches one claim by id
    pub fn get(&self, id: ClaimId) -> Result<Claim, PortError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| PortError::internal("claim store mutex poisoned"))?;
        rows.get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Claim", id))
    }
}

impl DomainPort for InMemoryClaimStore {}

#[async_trait]
impl ClaimRepository for InMemoryClaimStore {
    async fn insert(&self, claim: &Claim) -> Result<(), PortError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| PortError::internal("claim store mutex poisoned"))?;
        if rows.contains_key(&claim.id) {
            return Err(PortError::conflict(format!(
                "claim {} already exists",
                claim.id
            )));
        }
        rows.insert(claim.id, claim.clone());
        Ok(())
    }

    async fn update_status(&self, id: ClaimId, status: ClaimStatus) -> Result<(), PortError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| PortError::internal("claim store mutex poisoned"))?;
        let claim = rows
            .get_mut(&id)
            .ok_or_else(|| PortError::not_found("Claim", id))?;
        claim
            .update_status(status)
            .map_err(|e| PortError::conflict(e.to_string()))
    }
}

/// In-memory alert store
#[derive(Default)]
pub struct InMemoryAlertStore {
    rows: Mutex<HashMap<AlertId, FraudAlert>>,
}

impl InMemoryAlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every alert still awaiting review
    pub fn open_alerts(&self) -> Result<Vec<FraudAlert>, PortError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| PortError::internal("alert store mutex poisoned"))?;
        Ok(rows.values().filter(|a| a.is_open()).cloned().collect())
    }

    /// Returns a snapshot of every stored alert
    pub fn all(&self) -> Result<Vec<FraudAlert>, PortError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| PortError::internal("alert store mutex poisoned"))?;
        Ok(rows.values().cloned().collect())
    }
}

impl DomainPort for InMemoryAlertStore {}

#[async_trait]
impl AlertRepository for InMemoryAlertStore {
    async fn insert(&self, alert: &FraudAlert) -> Result<(), PortError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| PortError::internal("alert store mutex poisoned"))?;
        if rows.contains_key(&alert.id) {
            return Err(PortError::conflict(format!(
                "alert {} already exists",
                alert.id
            )));
        }
        rows.insert(alert.id, alert.clone());
        Ok(())
    }

    async fn get(&self, id: AlertId) -> Result<FraudAlert, PortError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| PortError::internal("alert store mutex poisoned"))?;
        rows.get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("FraudAlert", id))
    }

    async fn update(&self, alert: &FraudAlert) -> Result<(), PortError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| PortError::internal("alert store mutex poisoned"))?;
        if !rows.contains_key(&alert.id) {
            return Err(PortError::not_found("FraudAlert", alert.id));
        }
        rows.insert(alert.id, alert.clone());
        Ok(())
    }
}

/// In-memory append-only audit trail
#[derive(Default)]
pub struct InMemoryAuditTrail {
    entries: Mutex<Vec<AuditEntry>>,
}

impl InMemoryAuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the trail, oldest first
    pub fn entries(&self) -> Result<Vec<AuditEntry>, PortError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| PortError::internal("audit trail mutex poisoned"))?;
        Ok(entries.clone())
    }
}

impl DomainPort for InMemoryAuditTrail {}

#[async_trait]
impl AuditTrail for InMemoryAuditTrail {
    async fn append(&self, entry: &AuditEntry) -> Result<(), PortError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| PortError::internal("audit trail mutex poisoned"))?;
        entries.push(entry.clone());
        Ok(())
    }
}
