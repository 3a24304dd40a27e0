//! Append-only audit trail entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{AuditEventId, ClaimId};
use domain_scoring::FraudType;

/// Actor recorded for detection entries
pub const SYSTEM_ACTOR: &str = "System";

/// Entity a trail entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditEntity {
    /// The automated detection engine
    #[serde(rename = "AI Sentinel")]
    Sentinel,
    /// A fraud alert under triage
    Alert,
    /// A claim record
    Claim,
}

impl fmt::Display for AuditEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AuditEntity::Sentinel => "AI Sentinel",
            AuditEntity::Alert => "Alert",
            AuditEntity::Claim => "Claim",
        };
        write!(f, "{label}")
    }
}

/// Action recorded in the trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    /// The engine flagged a risk
    Detected,
    /// A human resolved an alert
    Resolved,
    /// A human escalated an alert
    Flagged,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AuditAction::Detected => "DETECTED",
            AuditAction::Resolved => "RESOLVED",
            AuditAction::Flagged => "FLAGGED",
        };
        write!(f, "{label}")
    }
}

/// One row of the append-only audit trail
///
/// Entries are immutable once created; corrections are new entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique identifier
    pub id: AuditEventId,
    /// What kind of entity acted or was acted upon
    pub entity: AuditEntity,
    /// Identifier of that entity
    pub entity_id: String,
    /// What happened
    pub action: AuditAction,
    /// Who did it
    pub actor: String,
    /// Human-readable context
    pub details: String,
    /// When it happened
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    /// Creates an entry
    pub fn new(
        entity: AuditEntity,
        entity_id: impl Into<String>,
        action: AuditAction,
        actor: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: AuditEventId::new_v7(),
            entity,
            entity_id: entity_id.into(),
            action,
            actor: actor.into(),
            details: details.into(),
            timestamp: Utc::now(),
        }
    }

    /// Records that the engine detected a fraud risk on a claim
    pub fn detection(claim_id: ClaimId, fraud_type: FraudType) -> Self {
        Self::new(
            AuditEntity::Sentinel,
            claim_id.to_string(),
            AuditAction::Detected,
            SYSTEM_ACTOR,
            format!("AI detected {fraud_type} risk"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_entry_fields() {
        let claim_id = ClaimId::new_v7();
        let entry = AuditEntry::detection(claim_id, FraudType::Upcoding);

        assert_eq!(entry.entity, AuditEntity::Sentinel);
        assert_eq!(entry.entity_id, claim_id.to_string());
        assert_eq!(entry.action, AuditAction::Detected);
        assert_eq!(entry.actor, SYSTEM_ACTOR);
        assert_eq!(entry.details, "AI detected Upcoding risk");
    }

    #[test]
    fn test_detection_details_use_display_labels() {
        let entry = AuditEntry::detection(ClaimId::new_v7(), FraudType::PhantomBilling);
        assert_eq!(entry.details, "AI detected Phantom Billing risk");
    }

    #[test]
    fn test_serialized_action_is_uppercase() {
        assert_eq!(
            serde_json::to_string(&AuditAction::Detected).unwrap(),
            "\"DETECTED\""
        );
        assert_eq!(AuditAction::Resolved.to_string(), "RESOLVED");
    }

    #[test]
    fn test_sentinel_entity_label() {
        assert_eq!(AuditEntity::Sentinel.to_string(), "AI Sentinel");
        assert_eq!(
            serde_json::to_string(&AuditEntity::Sentinel).unwrap(),
            "\"AI Sentinel\""
        );
    }
}
