//! Fixed test data
//!
//! Values mirror the production seed set: the five facilities the demo
//! environment bills from and the ICD-10 codes they most commonly file.

use core_kernel::{Currency, Money};
use rust_decimal_macros::dec;

/// Provider/facility name fixtures
pub struct ProviderFixtures;

impl ProviderFixtures {
    /// A facility on the active-audit watchlist
    pub fn watched_audit() -> &'static str {
        "RSUD Cengkareng"
    }

    /// A facility with the known low-value billing pattern
    pub fn watched_low_value() -> &'static str {
        "Puskesmas Tebet"
    }

    /// A facility on no watchlist
    pub fn clean() -> &'static str {
        "RS Hermina"
    }

    /// The full seeded facility set
    pub fn all() -> [&'static str; 5] {
        [
            "RSUD Cengkareng",
            "RS Harapan Kita",
            "Klinik Sehat Budi",
            "Puskesmas Tebet",
            "RS Hermina",
        ]
    }
}

/// Diagnosis code fixtures
pub struct DiagnosisFixtures;

impl DiagnosisFixtures {
    /// A routine ICD-10 code
    pub fn common() -> &'static str {
        "J00"
    }

    /// The seeded ICD-10 code set
    pub fn codes() -> [&'static str; 5] {
        ["J00", "I10", "E11", "A09", "Z00"]
    }
}

/// Claim amount fixtures, in whole rupiah
pub struct AmountFixtures;

impl AmountFixtures {
    /// A routine claim well inside every band
    pub fn routine() -> Money {
        Money::new(dec!(1500000), Currency::IDR)
    }

    /// Inside the high-outlier band (10M, 20M]
    pub fn high_outlier() -> Money {
        Money::new(dec!(12000000), Currency::IDR)
    }

    /// Above the extreme-cost band
    pub fn extreme() -> Money {
        Money::new(dec!(25000000), Currency::IDR)
    }

    /// Below the low-value pattern threshold
    pub fn low_value() -> Money {
        Money::new(dec!(250000), Currency::IDR)
    }

    /// Above the upcoding classification threshold, below extreme
    pub fn upcoding() -> Money {
        Money::new(dec!(16000000), Currency::IDR)
    }
}
