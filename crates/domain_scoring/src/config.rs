//! Scoring thresholds and rule weights
//!
//! Every threshold and weight used by the engine lives here as a named
//! field, so deployments can override individual values and tests can
//! construct engines with shifted bands without touching rule logic.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{CoreError, Currency, Money};

/// Configuration for the fraud scoring engine
///
/// The defaults carry the production values for the regional claims
/// profile. Amounts are in whole rupiah.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Costs strictly above this amount are extreme outliers
    pub extreme_cost_threshold: Money,
    /// Score added when the extreme cost rule fires
    pub extreme_cost_weight: Decimal,
    /// Costs strictly above this amount (and not extreme) are high outliers
    pub high_cost_threshold: Money,
    /// Score added when the high cost rule fires
    pub high_cost_weight: Decimal,
    /// Score added when the provider is under active audit watch
    pub watched_provider_weight: Decimal,
    /// Costs strictly below this amount count toward the low-value pattern
    pub low_value_threshold: Money,
    /// Score added when the low-value high-frequency rule fires
    pub low_value_pattern_weight: Decimal,
    /// Score added when the diagnosis code is missing
    pub missing_diagnosis_weight: Decimal,
    /// Scores strictly above this cutoff flag the claim as fraud
    pub fraud_score_cutoff: Decimal,
    /// Scores strictly above this threshold are High risk
    pub high_risk_threshold: Decimal,
    /// Scores strictly above this threshold (and not High) are Medium risk
    pub medium_risk_threshold: Decimal,
    /// Costs strictly above this amount classify fraud as upcoding
    pub upcoding_cost_threshold: Money,
    /// Margin added to the risk score to form the reported confidence
    pub confidence_margin: Decimal,
    /// Upper bound on the reported confidence
    pub confidence_cap: Decimal,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            extreme_cost_threshold: Money::new(dec!(20000000), Currency::IDR),
            extreme_cost_weight: dec!(0.6),
            high_cost_threshold: Money::new(dec!(10000000), Currency::IDR),
            high_cost_weight: dec!(0.3),
            watched_provider_weight: dec!(0.25),
            low_value_threshold: Money::new(dec!(300000), Currency::IDR),
            low_value_pattern_weight: dec!(0.4),
            missing_diagnosis_weight: dec!(0.4),
            fraud_score_cutoff: dec!(0.5),
            high_risk_threshold: dec!(0.7),
            medium_risk_threshold: dec!(0.4),
            upcoding_cost_threshold: Money::new(dec!(15000000), Currency::IDR),
            confidence_margin: dec!(0.1),
            confidence_cap: dec!(0.99),
        }
    }
}

impl ScoringConfig {
    /// Validates band ordering and value ranges
    ///
    /// The fraud cutoff is not tied to the risk bands: the two are
    /// independent dials, and scores between them ("flagged but Medium")
    /// are a valid state.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.high_cost_threshold.amount() >= self.extreme_cost_threshold.amount() {
            return Err(CoreError::configuration(
                "high cost threshold must be below the extreme cost threshold",
            ));
        }
        if self.medium_risk_threshold >= self.high_risk_threshold {
            return Err(CoreError::configuration(
                "medium risk threshold must be below the high risk threshold",
            ));
        }
        if self.confidence_cap > dec!(1) || self.confidence_cap.is_sign_negative() {
            return Err(CoreError::configuration(
                "confidence cap must be within [0, 1]",
            ));
        }
        let weights = [
            self.extreme_cost_weight,
            self.high_cost_weight,
            self.watched_provider_weight,
            self.low_value_pattern_weight,
            self.missing_diagnosis_weight,
        ];
        if weights.iter().any(|w| w.is_sign_negative()) {
            return Err(CoreError::configuration("rule weights must be non-negative"));
        }
        Ok(())
    }
}
