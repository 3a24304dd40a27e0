//! Provider watchlist capability
//!
//! The engine does not care how a provider ends up on a watchlist, only
//! whether it is on one. This seam lets the matching strategy (substring
//! markers, an exact set, an external screening service) be swapped
//! without touching rule logic.

use serde::{Deserialize, Serialize};

/// Lookup capability for watched providers
///
/// Both flags may hold for the same provider; the corresponding rules
/// fire independently.
pub trait ProviderWatchlist: Send + Sync {
    /// True if the provider is under an active audit program
    fn is_under_audit(&self, provider: &str) -> bool;

    /// True if the provider matches the repeated low-value billing pattern list
    fn is_low_value_pattern(&self, provider: &str) -> bool;
}

/// Watchlist matching on facility-name substrings
///
/// Stand-in for a real screening feed: facility names carry a district
/// marker, and the markers below are the districts currently flagged by
/// the audit desk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstringWatchlist {
    /// Markers for providers under active audit
    pub audit_markers: Vec<String>,
    /// Markers for providers with a known low-value billing pattern
    pub low_value_markers: Vec<String>,
}

impl SubstringWatchlist {
    pub fn new(
        audit_markers: Vec<String>,
        low_value_markers: Vec<String>,
    ) -> Self {
        Self {
            audit_markers,
            low_value_markers,
        }
    }

    /// An empty watchlist that flags nothing
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl Default for SubstringWatchlist {
    fn default() -> Self {
        Self {
            audit_markers: vec!["Cengkareng".to_string()],
            low_value_markers: vec!["Tebet".to_string()],
        }
    }
}

impl ProviderWatchlist for SubstringWatchlist {
    fn is_under_audit(&self, provider: &str) -> bool {
        self.audit_markers
            .iter()
            .any(|marker| provider.contains(marker.as_str()))
    }

    fn is_low_value_pattern(&self, provider: &str) -> bool {
        self.low_value_markers
            .iter()
            .any(|marker| provider.contains(marker.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers() {
        let watchlist = SubstringWatchlist::default();

        assert!(watchlist.is_under_audit("RSUD Cengkareng"));
        assert!(!watchlist.is_under_audit("RS Hermina"));
        assert!(watchlist.is_low_value_pattern("Puskesmas Tebet"));
        assert!(!watchlist.is_low_value_pattern("Klinik Sehat Budi"));
    }

    #[test]
    fn test_both_flags_can_hold() {
        let watchlist = SubstringWatchlist::default();
        let provider = "Klinik Cengkareng Tebet";

        assert!(watchlist.is_under_audit(provider));
        assert!(watchlist.is_low_value_pattern(provider));
    }

    #[test]
    fn test_empty_watchlist_flags_nothing() {
        let watchlist = SubstringWatchlist::empty();
        assert!(!watchlist.is_under_audit("RSUD Cengkareng"));
        assert!(!watchlist.is_low_value_pattern("Puskesmas Tebet"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let watchlist = SubstringWatchlist::default();
        assert!(!watchlist.is_under_audit("rsud cengkareng"));
    }
}
