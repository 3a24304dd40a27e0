//! Test Data Builders
//!
//! Builder for constructing claim submissions with sensible defaults,
//! so tests specify only the fields they care about.

use serde_json::{json, Value};

use core_kernel::Money;
use domain_scoring::ClaimInput;

use crate::fixtures::{AmountFixtures, DiagnosisFixtures, ProviderFixtures};

/// Builder for claim submission payloads
pub struct ClaimSubmissionBuilder {
    claim_number: Option<String>,
    total_cost: Value,
    provider: String,
    diagnosis_code: String,
}

impl Default for ClaimSubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimSubmissionBuilder {
    /// Creates a builder describing a routine, unremarkable claim
    pub fn new() -> Self {
        Self {
            claim_number: Some("CLM-2024-10001".to_string()),
            total_cost: json!(AmountFixtures::routine().amount()),
            provider: ProviderFixtures::clean().to_string(),
            diagnosis_code: DiagnosisFixtures::common().to_string(),
        }
    }

    /// Sets the claim number
    pub fn with_claim_number(mut self, number: impl Into<String>) -> Self {
        self.claim_number = Some(number.into());
        self
    }

    /// Removes the claim number
    pub fn without_claim_number(mut self) -> Self {
        self.claim_number = None;
        self
    }

    /// Sets the claimed amount
    pub fn with_cost(mut self, cost: Money) -> Self {
        self.total_cost = json!(cost.amount());
        self
    }

    /// Sets the raw cost value, bypassing the typed path
    pub fn with_raw_cost(mut self, cost: Value) -> Self {
        self.total_cost = cost;
        self
    }

    /// Sets the provider name
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Sets the diagnosis code
    pub fn with_diagnosis(mut self, code: impl Into<String>) -> Self {
        self.diagnosis_code = code.into();
        self
    }

    /// Removes the diagnosis code
    pub fn without_diagnosis(mut self) -> Self {
        self.diagnosis_code = String::new();
        self
    }

    /// Builds a wire-shaped JSON payload
    pub fn build_json(self) -> Value {
        let mut payload = json!({
            "total_cost": self.total_cost,
            "provider": self.provider,
            "diagnosis_code": self.diagnosis_code,
        });
        if let Some(number) = self.claim_number {
            payload["claim_number"] = json!(number);
        }
        payload
    }

    /// Builds the engine-facing input directly
    pub fn build_input(self) -> ClaimInput {
        ClaimInput::from_json(&self.build_json())
    }
}
