//! Claims intake service
//!
//! The single write path of the system: every submission flows through
//! `IntakeService::submit`, and every alert disposition through
//! `IntakeService::resolve_alert`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use core_kernel::{AlertId, ClaimId, PortError};
use domain_alerts::{evaluate_verdict, FraudAlert};
use domain_scoring::{claim::coerce_cost, Claim, ClaimInput, ClaimStatus, FraudEngine, FraudVerdict};

use crate::ports::{AlertRepository, AuditTrail, ClaimRepository};

/// One claim submission, as received from the wire
///
/// Every field is optional or tolerantly typed: a submission is never
/// rejected for shape, only scored for risk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClaimSubmission {
    /// Caller-assigned claim number
    pub claim_number: Option<String>,
    /// Claimed amount; numbers and numeric strings accepted
    #[serde(default)]
    pub total_cost: Value,
    /// Provider/facility name
    #[serde(default)]
    pub provider: String,
    /// Diagnostic code
    #[serde(default)]
    pub diagnosis_code: String,
}

impl ClaimSubmission {
    fn to_input(&self) -> ClaimInput {
        ClaimInput::new(
            coerce_cost(Some(&self.total_cost)),
            self.provider.clone(),
            self.diagnosis_code.clone(),
        )
    }
}

/// Result of processing one submission
#[derive(Debug, Clone, Serialize)]
pub struct IntakeOutcome {
    /// Identifier of the persisted claim
    pub claim_id: ClaimId,
    /// Claim number (caller-assigned or generated)
    pub claim_number: String,
    /// Status the claim was persisted with
    pub status: ClaimStatus,
    /// Identifier of the alert, when one was raised
    pub alert_id: Option<AlertId>,
    /// The engine's full verdict, for display to the submitter
    pub verdict: FraudVerdict,
}

/// Application service orchestrating claim intake
pub struct IntakeService {
    engine: FraudEngine,
    claims: Arc<dyn ClaimRepository>,
    alerts: Arc<dyn AlertRepository>,
    audit: Arc<dyn AuditTrail>,
}

impl IntakeService {
    /// Creates a service over the given stores, with production scoring
    pub fn new(
        claims: Arc<dyn ClaimRepository>,
        alerts: Arc<dyn AlertRepository>,
        audit: Arc<dyn AuditTrail>,
    ) -> Self {
        Self::with_engine(FraudEngine::new(), claims, alerts, audit)
    }

    /// Creates a service with a custom-configured engine
    pub fn with_engine(
        engine: FraudEngine,
        claims: Arc<dyn ClaimRepository>,
        alerts: Arc<dyn AlertRepository>,
        audit: Arc<dyn AuditTrail>,
    ) -> Self {
        Self {
            engine,
            claims,
            alerts,
            audit,
        }
    }

    /// Processes one claim submission
    ///
    /// Scores the claim, persists it with a status derived from the
    /// verdict, and, when flagged, persists exactly one open alert and
    /// one detection audit entry. The verdict is returned to the caller
    /// either way.
    pub async fn submit(&self, submission: ClaimSubmission) -> Result<IntakeOutcome, PortError> {
        let input = submission.to_input();
        let verdict = self.engine.score(&input);

        let claim = Claim::submit(submission.claim_number, &input, verdict.is_fraud);
        self.claims.insert(&claim).await?;

        let mut alert_id = None;
        if let Some(directive) = evaluate_verdict(claim.id, &verdict) {
            tracing::info!(
                claim_id = %claim.id,
                fraud_type = %verdict.fraud_type,
                level = %verdict.risk_level,
                "fraud risk detected"
            );
            alert_id = Some(directive.alert.id);
            self.alerts.insert(&directive.alert).await?;
            self.audit.append(&directive.audit).await?;
        }

        Ok(IntakeOutcome {
            claim_id: claim.id,
            claim_number: claim.claim_number,
            status: claim.status,
            alert_id,
            verdict,
        })
    }

    /// Applies a human disposition to an open alert
    ///
    /// `resolved = true` resolves the alert, `false` escalates it. The
    /// paired audit entry is appended in the same operation; a closed
    /// alert yields a conflict.
    pub async fn resolve_alert(
        &self,
        alert_id: AlertId,
        resolved: bool,
        actor: &str,
        note: &str,
    ) -> Result<FraudAlert, PortError> {
        let mut alert = self.alerts.get(alert_id).await?;

        let entry = if resolved {
            alert.resolve(actor, note)
        } else {
            alert.flag(actor, note)
        }
        .map_err(|e| PortError::conflict(e.to_string()))?;

        self.alerts.update(&alert).await?;
        self.audit.append(&entry).await?;

        tracing::info!(alert_id = %alert.id, status = ?alert.status, actor, "alert disposed");

        Ok(alert)
    }
}
