//! Side-effect policy for fraud verdicts
//!
//! Pure decision stage: given a verdict and the persisted claim's
//! identifier, decide which records must come into existence. Writing
//! them is the caller's responsibility.

use serde::{Deserialize, Serialize};

use core_kernel::ClaimId;
use domain_scoring::FraudVerdict;

use crate::alert::FraudAlert;
use crate::audit::AuditEntry;

/// The records a fraud verdict requires the caller to persist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertDirective {
    /// The alert to open
    pub alert: FraudAlert,
    /// The detection entry for the audit trail
    pub audit: AuditEntry,
}

/// Decides the storage side effects of a verdict
///
/// A flagged verdict yields exactly one open alert and one detection
/// audit entry; anything else yields nothing.
pub fn evaluate_verdict(claim_id: ClaimId, verdict: &FraudVerdict) -> Option<AlertDirective> {
    if !verdict.is_fraud {
        return None;
    }

    Some(AlertDirective {
        alert: FraudAlert::auto_flagged(claim_id, verdict),
        audit: AuditEntry::detection(claim_id, verdict.fraud_type),
    })
}
