//! Heuristic fraud scoring engine
//!
//! Additive rule evaluation over a claim's cost, provider, and diagnosis
//! attributes. Rules fire independently and their weights accumulate;
//! the verdict is derived from the accumulated score. Cost bands are the
//! one exception: a cost is either extreme or a high outlier, never both.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::claim::ClaimInput;
use crate::config::ScoringConfig;
use crate::watchlist::{ProviderWatchlist, SubstringWatchlist};

/// Explanation used when no rule fires
pub const NO_ANOMALY_EXPLANATION: &str =
    "Claim data is consistent with historical patterns. No anomaly detected.";

/// Risk classification bands
///
/// Band thresholds are independent of the fraud cutoff: a score in the
/// gap between the cutoff and the High band is flagged yet Medium. That
/// zone means "flagged, not yet high-confidence" and is relied upon by
/// the triage queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classifies an accumulated score against the configured bands
    pub fn from_score(score: Decimal, config: &ScoringConfig) -> Self {
        if score > config.high_risk_threshold {
            RiskLevel::High
        } else if score > config.medium_risk_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        write!(f, "{label}")
    }
}

/// Fraud pattern label attached to flagged claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FraudType {
    /// Not flagged
    None,
    /// Billed cost disproportionate to the service rendered
    Upcoding,
    /// Repeated low-value claims indicating fabricated services
    #[serde(rename = "Phantom Billing")]
    PhantomBilling,
    /// Inconsistent or incomplete claim data
    #[serde(rename = "Data Inconsistency")]
    DataInconsistency,
}

impl fmt::Display for FraudType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FraudType::None => "None",
            FraudType::Upcoding => "Upcoding",
            FraudType::PhantomBilling => "Phantom Billing",
            FraudType::DataInconsistency => "Data Inconsistency",
        };
        write!(f, "{label}")
    }
}

/// The rules the engine evaluates, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleKind {
    ExtremeCost,
    HighCost,
    ProviderUnderAudit,
    LowValuePattern,
    MissingDiagnosis,
}

/// A single triggered rule: its weight and human-readable reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleHit {
    pub rule: RuleKind,
    pub weight: Decimal,
    pub reason: String,
}

/// The engine's complete output for one claim
///
/// Fully determined by the input: scoring the same claim twice yields an
/// identical verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudVerdict {
    /// Accumulated rule weights, floor 0
    pub risk_score: Decimal,
    /// True iff the score exceeds the fraud cutoff
    pub is_fraud: bool,
    /// Band classification of the score
    pub risk_level: RiskLevel,
    /// min(score + margin, cap); a monotonic transform of the score,
    /// not an independent probability
    pub confidence: Decimal,
    /// Pattern label; `None` unless flagged
    pub fraud_type: FraudType,
    /// Space-joined reasons of every triggered rule, in rule order
    pub explanation: String,
}

/// Heuristic fraud scoring engine
///
/// Stateless and side-effect free: safe to share across any number of
/// concurrent callers.
pub struct FraudEngine {
    config: ScoringConfig,
    watchlist: Box<dyn ProviderWatchlist>,
}

impl Default for FraudEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FraudEngine {
    /// Creates an engine with production thresholds and the default watchlist
    pub fn new() -> Self {
        Self::with_config(ScoringConfig::default())
    }

    /// Creates an engine with the given thresholds and the default watchlist
    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            config,
            watchlist: Box::new(SubstringWatchlist::default()),
        }
    }

    /// Replaces the provider watchlist
    pub fn with_watchlist(mut self, watchlist: impl ProviderWatchlist + 'static) -> Self {
        self.watchlist = Box::new(watchlist);
        self
    }

    /// Returns the active configuration
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Evaluates every rule against the claim, in fixed order
    ///
    /// All matching rules fire; there is no short-circuit across rules.
    pub fn evaluate_rules(&self, claim: &ClaimInput) -> Vec<RuleHit> {
        let mut hits = Vec::new();
        let cost = claim.total_cost.amount();

        // Cost anomaly: the two bands are exclusive, extreme supersedes high.
        if cost > self.config.extreme_cost_threshold.amount() {
            hits.push(RuleHit {
                rule: RuleKind::ExtremeCost,
                weight: self.config.extreme_cost_weight,
                reason: format!(
                    "Claim cost {} far exceeds the regional plausibility threshold.",
                    claim.total_cost
                ),
            });
        } else if cost > self.config.high_cost_threshold.amount() {
            hits.push(RuleHit {
                rule: RuleKind::HighCost,
                weight: self.config.high_cost_weight,
                reason: "Claim cost sits in the 90th percentile (high outlier).".to_string(),
            });
        }

        // Provider reputation
        if self.watchlist.is_under_audit(&claim.provider) {
            hits.push(RuleHit {
                rule: RuleKind::ProviderUnderAudit,
                weight: self.config.watched_provider_weight,
                reason: format!(
                    "Provider {} is under active audit watch.",
                    claim.provider
                ),
            });
        }
        if self.watchlist.is_low_value_pattern(&claim.provider)
            && cost < self.config.low_value_threshold.amount()
        {
            hits.push(RuleHit {
                rule: RuleKind::LowValuePattern,
                weight: self.config.low_value_pattern_weight,
                reason: "High-frequency low-value billing pattern (phantom billing indicator)."
                    .to_string(),
            });
        }

        // Data integrity
        if !claim.has_diagnosis() {
            hits.push(RuleHit {
                rule: RuleKind::MissingDiagnosis,
                weight: self.config.missing_diagnosis_weight,
                reason: "Diagnosis code missing or malformed.".to_string(),
            });
        }

        hits
    }

    /// Scores a claim and returns the complete verdict
    ///
    /// Total function: never fails, performs no I/O, reads no clock.
    pub fn score(&self, claim: &ClaimInput) -> FraudVerdict {
        let hits = self.evaluate_rules(claim);

        let risk_score: Decimal = hits.iter().map(|hit| hit.weight).sum();
        let is_fraud = risk_score > self.config.fraud_score_cutoff;
        let risk_level = RiskLevel::from_score(risk_score, &self.config);
        let confidence =
            (risk_score + self.config.confidence_margin).min(self.config.confidence_cap);

        let fraud_type = if is_fraud {
            self.classify(claim)
        } else {
            FraudType::None
        };

        let explanation = if hits.is_empty() {
            NO_ANOMALY_EXPLANATION.to_string()
        } else {
            hits.iter()
                .map(|hit| hit.reason.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        };

        tracing::debug!(%risk_score, is_fraud, level = %risk_level, "claim scored");

        FraudVerdict {
            risk_score,
            is_fraud,
            risk_level,
            confidence,
            fraud_type,
            explanation,
        }
    }

    /// Labels a flagged claim with a fraud pattern
    ///
    /// First match wins: cost is checked before the provider pattern, so
    /// an extremely costly claim from a low-value-pattern facility is
    /// Upcoding, not Phantom Billing.
    fn classify(&self, claim: &ClaimInput) -> FraudType {
        if claim.total_cost.amount() > self.config.upcoding_cost_threshold.amount() {
            FraudType::Upcoding
        } else if self.watchlist.is_low_value_pattern(&claim.provider) {
            FraudType::PhantomBilling
        } else {
            FraudType::DataInconsistency
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use core_kernel::{Currency, Money};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn arb_provider() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("RSUD Cengkareng".to_string()),
            Just("RS Harapan Kita".to_string()),
            Just("Klinik Sehat Budi".to_string()),
            Just("Puskesmas Tebet".to_string()),
            Just("RS Hermina".to_string()),
            Just(String::new()),
        ]
    }

    proptest! {
        #[test]
        fn scoring_is_deterministic(
            cost in 0i64..50_000_000i64,
            provider in arb_provider(),
            has_diagnosis in any::<bool>()
        ) {
            let engine = FraudEngine::new();
            let diagnosis = if has_diagnosis { "J00" } else { "" };
            let claim = ClaimInput::new(
                Money::from_minor(cost, Currency::IDR),
                provider,
                diagnosis,
            );

            prop_assert_eq!(engine.score(&claim), engine.score(&claim));
        }

        #[test]
        fn at_most_one_cost_rule_fires(cost in 0i64..100_000_000i64) {
            let engine = FraudEngine::new();
            let claim = ClaimInput::new(
                Money::from_minor(cost, Currency::IDR),
                "RS Hermina",
                "J00",
            );

            let cost_hits = engine
                .evaluate_rules(&claim)
                .iter()
                .filter(|h| matches!(h.rule, RuleKind::ExtremeCost | RuleKind::HighCost))
                .count();
            prop_assert!(cost_hits <= 1);
        }

        #[test]
        fn score_is_bounded(
            cost in 0i64..100_000_000i64,
            provider in arb_provider(),
            has_diagnosis in any::<bool>()
        ) {
            let engine = FraudEngine::new();
            let diagnosis = if has_diagnosis { "J00" } else { "" };
            let claim = ClaimInput::new(
                Money::from_minor(cost, Currency::IDR),
                provider,
                diagnosis,
            );
            let verdict = engine.score(&claim);

            // Floor 0, ceiling = every rule firing at once
            prop_assert!(verdict.risk_score >= dec!(0));
            prop_assert!(verdict.risk_score <= dec!(1.65));
            prop_assert!(verdict.confidence <= dec!(0.99));
        }
    }
}
