//! Claim input and the persisted claim record

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::{ClaimId, Currency, Money};
use crate::error::ClaimError;

/// Attributes of a submitted claim, as seen by the scoring engine
///
/// This is an ephemeral value: the engine reads it and returns a verdict,
/// nothing here is persisted as-is. Construction is total: a negative
/// cost is floored to zero and missing text fields become empty strings,
/// so a malformed submission degrades to a scoreable claim instead of an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimInput {
    /// Claimed amount, in whole rupiah
    pub total_cost: Money,
    /// Free-text provider/facility identifier; may be empty
    pub provider: String,
    /// Free-text diagnostic code; empty means missing
    pub diagnosis_code: String,
}

impl ClaimInput {
    /// Creates a claim input, flooring negative costs to zero
    pub fn new(
        total_cost: Money,
        provider: impl Into<String>,
        diagnosis_code: impl Into<String>,
    ) -> Self {
        let total_cost = if total_cost.is_negative() {
            Money::zero(total_cost.currency())
        } else {
            total_cost
        };
        Self {
            total_cost,
            provider: provider.into(),
            diagnosis_code: diagnosis_code.into(),
        }
    }

    /// Builds a claim input from an untrusted JSON payload
    ///
    /// A missing `total_cost` key behaves identically to `total_cost = 0`;
    /// non-numeric values coerce to zero rather than failing.
    pub fn from_json(payload: &Value) -> Self {
        Self::new(
            coerce_cost(payload.get("total_cost")),
            payload
                .get("provider")
                .and_then(Value::as_str)
                .unwrap_or_default(),
            payload
                .get("diagnosis_code")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        )
    }

    /// True when a diagnosis code is present
    pub fn has_diagnosis(&self) -> bool {
        !self.diagnosis_code.is_empty()
    }
}

/// Coerces an optional JSON value to a non-negative rupiah amount
///
/// Accepts numbers and numeric strings; everything else (missing, null,
/// arrays, garbage text) is treated as zero.
pub fn coerce_cost(value: Option<&Value>) -> Money {
    let amount = match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .and_then(|f| Decimal::try_from(f).ok())
            .unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse::<Decimal>().unwrap_or_default(),
        _ => Decimal::ZERO,
    };
    if amount.is_sign_negative() {
        Money::zero(Currency::IDR)
    } else {
        Money::new(amount, Currency::IDR)
    }
}

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Awaiting verification
    Pending,
    /// Verified by an adjuster
    Verified,
    /// Flagged by the scoring engine
    Anomalous,
}

/// A persisted claim record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Claim number
    pub claim_number: String,
    /// Submission timestamp
    pub submitted_at: DateTime<Utc>,
    /// Claimed amount
    pub total_cost: Money,
    /// Provider/facility name
    pub provider: String,
    /// Diagnostic code, if supplied
    pub diagnosis_code: Option<String>,
    /// Procedure code, if supplied by an upstream system
    pub procedure_code: Option<String>,
    /// Status
    pub status: ClaimStatus,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Creates a claim record from a scored submission
    ///
    /// `flagged` comes from the verdict: flagged claims land as
    /// `Anomalous`, everything else starts `Pending`.
    pub fn submit(claim_number: Option<String>, input: &ClaimInput, flagged: bool) -> Self {
        let now = Utc::now();
        let diagnosis_code = if input.diagnosis_code.is_empty() {
            None
        } else {
            Some(input.diagnosis_code.clone())
        };

        Self {
            id: ClaimId::new_v7(),
            claim_number: claim_number.unwrap_or_else(generate_claim_number),
            submitted_at: now,
            total_cost: input.total_cost,
            provider: input.provider.clone(),
            diagnosis_code,
            procedure_code: None,
            status: if flagged {
                ClaimStatus::Anomalous
            } else {
                ClaimStatus::Pending
            },
            created_at: now,
            updated_at: now,
        }
    }

    /// Updates the status
    pub fn update_status(&mut self, status: ClaimStatus) -> Result<(), ClaimError> {
        if !self.can_transition_to(status) {
            return Err(ClaimError::InvalidStatusTransition {
                from: format!("{:?}", self.status),
                to: format!("{:?}", status),
            });
        }
        self.status = status;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Checks if transition is valid
    fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (self.status, target),
            (Pending, Verified) | (Pending, Anomalous) | (Anomalous, Verified)
        )
    }
}

fn generate_claim_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("CLM-{}", duration.as_millis() % 10_000_000_000)
}
