//! Fraud alert record and triage lifecycle

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{AlertId, ClaimId};
use domain_scoring::{FraudType, FraudVerdict, RiskLevel};

use crate::audit::{AuditAction, AuditEntity, AuditEntry};
use crate::error::AlertError;

/// Action label stamped on alerts the engine raised on its own
pub const AUTO_FLAGGED_ACTION: &str = "Auto-Flagged";

/// Alert triage status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    /// Awaiting human review
    Open,
    /// Reviewed and dismissed or handled
    Resolved,
    /// Reviewed and escalated
    Flagged,
}

/// A persisted alert flagging a claim for human review
///
/// The alert's lifecycle is independent of the claim it points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudAlert {
    /// Unique identifier
    pub id: AlertId,
    /// The claim that triggered the alert
    pub claim_id: ClaimId,
    /// Risk band copied from the verdict
    pub level: RiskLevel,
    /// Fraud pattern copied from the verdict
    pub reason_code: FraudType,
    /// Engine confidence copied from the verdict
    pub confidence: Decimal,
    /// Engine explanation copied from the verdict
    pub description: String,
    /// True once a reviewer has resolved the alert
    pub is_resolved: bool,
    /// Triage status
    pub status: AlertStatus,
    /// How the alert came to exist or was last handled
    pub action: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl FraudAlert {
    /// Creates an open alert from a fraud verdict
    pub fn auto_flagged(claim_id: ClaimId, verdict: &FraudVerdict) -> Self {
        let now = Utc::now();
        Self {
            id: AlertId::new_v7(),
            claim_id,
            level: verdict.risk_level,
            reason_code: verdict.fraud_type,
            confidence: verdict.confidence,
            description: verdict.explanation.clone(),
            is_resolved: false,
            status: AlertStatus::Open,
            action: AUTO_FLAGGED_ACTION.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// True while the alert still needs human attention
    pub fn is_open(&self) -> bool {
        self.status == AlertStatus::Open
    }

    /// Resolves the alert, returning the audit entry to append
    pub fn resolve(&mut self, actor: &str, note: &str) -> Result<AuditEntry, AlertError> {
        self.transition(AlertStatus::Resolved, AuditAction::Resolved, actor, note)
    }

    /// Escalates the alert, returning the audit entry to append
    pub fn flag(&mut self, actor: &str, note: &str) -> Result<AuditEntry, AlertError> {
        self.transition(AlertStatus::Flagged, AuditAction::Flagged, actor, note)
    }

    /// Applies a lifecycle transition
    ///
    /// Only `Open` alerts can move, and only to an end state. The paired
    /// audit entry is created here so a state change without one is
    /// unrepresentable.
    fn transition(
        &mut self,
        target: AlertStatus,
        action: AuditAction,
        actor: &str,
        note: &str,
    ) -> Result<AuditEntry, AlertError> {
        if self.status != AlertStatus::Open {
            return Err(AlertError::AlreadyClosed {
                status: format!("{:?}", self.status),
            });
        }

        self.status = target;
        self.is_resolved = target == AlertStatus::Resolved;
        self.action = note.to_string();
        self.updated_at = Utc::now();

        tracing::debug!(alert_id = %self.id, status = ?self.status, actor, "alert transitioned");

        Ok(AuditEntry::new(
            AuditEntity::Alert,
            self.id.to_string(),
            action,
            actor,
            note,
        ))
    }
}
