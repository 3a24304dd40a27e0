//! Comprehensive tests for domain_alerts

use rust_decimal_macros::dec;

use core_kernel::{ClaimId, Currency, Money};
use domain_scoring::{ClaimInput, FraudEngine, FraudType, RiskLevel};

use domain_alerts::alert::{AlertStatus, FraudAlert, AUTO_FLAGGED_ACTION};
use domain_alerts::audit::{AuditAction, AuditEntity, AuditEntry, SYSTEM_ACTOR};
use domain_alerts::policy::evaluate_verdict;

fn scored(cost: i64, provider: &str, diagnosis: &str) -> domain_scoring::FraudVerdict {
    FraudEngine::new().score(&ClaimInput::new(
        Money::from_minor(cost, Currency::IDR),
        provider,
        diagnosis,
    ))
}

// ============================================================================
// Side-Effect Policy Tests
// ============================================================================

mod policy_tests {
    use super::*;

    #[test]
    fn test_no_emission_below_cutoff() {
        // Missing diagnosis alone: 0.4, below the 0.5 cutoff
        let verdict = scored(1_000_000, "RS Hermina", "");
        assert!(!verdict.is_fraud);
        assert!(evaluate_verdict(ClaimId::new_v7(), &verdict).is_none());
    }

    #[test]
    fn test_emission_copies_verdict_into_alert() {
        let claim_id = ClaimId::new_v7();
        let verdict = scored(12_000_000, "RSUD Cengkareng", "");
        let directive = evaluate_verdict(claim_id, &verdict).unwrap();

        assert_eq!(directive.alert.level, RiskLevel::High);
        assert_eq!(directive.alert.reason_code, verdict.fraud_type);
        assert_eq!(directive.alert.confidence, dec!(0.99));
        assert_eq!(directive.alert.description, verdict.explanation);
        assert_eq!(directive.alert.action, AUTO_FLAGGED_ACTION);
    }

    #[test]
    fn test_detection_audit_names_the_sentinel() {
        let claim_id = ClaimId::new_v7();
        let verdict = scored(16_000_000, "Puskesmas Tebet", "");
        let directive = evaluate_verdict(claim_id, &verdict).unwrap();

        assert_eq!(directive.audit.entity, AuditEntity::Sentinel);
        assert_eq!(directive.audit.actor, SYSTEM_ACTOR);
        assert_eq!(directive.audit.details, "AI detected Upcoding risk");
    }

    #[test]
    fn test_medium_fraud_zone_still_emits() {
        // 0.25 + 0.4 = 0.65: flagged but Medium
        let verdict = scored(1_000_000, "RSUD Cengkareng", "");
        assert!(verdict.is_fraud);
        assert_eq!(verdict.risk_level, RiskLevel::Medium);

        let directive = evaluate_verdict(ClaimId::new_v7(), &verdict).unwrap();
        assert_eq!(directive.alert.level, RiskLevel::Medium);
        assert_eq!(directive.alert.reason_code, FraudType::DataInconsistency);
    }
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

mod lifecycle_tests {
    use super::*;

    fn open_alert() -> FraudAlert {
        let verdict = scored(25_000_000, "RS Hermina", "J00");
        FraudAlert::auto_flagged(ClaimId::new_v7(), &verdict)
    }

    #[test]
    fn test_every_transition_yields_an_audit_entry() {
        let mut resolved = open_alert();
        let entry = resolved.resolve("Admin User", "False positive").unwrap();
        assert_eq!(entry.action, AuditAction::Resolved);
        assert_eq!(entry.actor, "Admin User");
        assert_eq!(entry.details, "False positive");

        let mut flagged = open_alert();
        let entry = flagged.flag("Admin User", "Send to investigators").unwrap();
        assert_eq!(entry.action, AuditAction::Flagged);
    }

    #[test]
    fn test_transition_updates_record_fields() {
        let mut alert = open_alert();
        let before = alert.updated_at;

        alert.resolve("Admin User", "Checked").unwrap();

        assert_eq!(alert.status, AlertStatus::Resolved);
        assert!(alert.is_resolved);
        assert_eq!(alert.action, "Checked");
        assert!(alert.updated_at >= before);
    }

    #[test]
    fn test_no_transition_out_of_end_states() {
        let mut alert = open_alert();
        alert.flag("Admin User", "Escalated").unwrap();

        assert!(!alert.is_open());
        assert!(alert.resolve("Admin User", "too late").is_err());
        assert!(alert.flag("Admin User", "again").is_err());
        // The failed attempts left the record untouched
        assert_eq!(alert.status, AlertStatus::Flagged);
        assert_eq!(alert.action, "Escalated");
    }

    #[test]
    fn test_open_alert_never_auto_transitions() {
        let alert = open_alert();
        assert!(alert.is_open());
        assert_eq!(alert.status, AlertStatus::Open);
        assert!(!alert.is_resolved);
    }
}

// ============================================================================
// Audit Entry Tests
// ============================================================================

mod audit_tests {
    use super::*;

    #[test]
    fn test_entries_are_distinct_rows() {
        let claim_id = ClaimId::new_v7();
        let first = AuditEntry::detection(claim_id, FraudType::Upcoding);
        let second = AuditEntry::detection(claim_id, FraudType::Upcoding);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_serde_round_trip() {
        let entry = AuditEntry::detection(ClaimId::new_v7(), FraudType::DataInconsistency);
        let json = serde_json::to_string(&entry).unwrap();
        let back: AuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, entry.id);
        assert_eq!(back.action, AuditAction::Detected);
        assert_eq!(back.details, "AI detected Data Inconsistency risk");
    }
}
