//! Per-tenant trusted issuer hashes.

use std::collections::HashSet;

const SEPARATOR: char = ';';

/// Issuer hashes a tenant trusts, parsed from its `;`-separated setting.
///
/// Entries are trimmed, empty entries dropped and duplicates collapsed.
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedIssuerHashes(HashSet<String>);

impl TrustedIssuerHashes {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(SEPARATOR)
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    #[must_use]
    pub fn contains(&self, issuer_hash: &str) -> bool {
        self.0.contains(issuer_hash)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        let list = TrustedIssuerHashes::parse(" hash1 ;hash2;  hash3");
        assert_eq!(list.len(), 3);
        assert!(list.contains("hash1"));
        assert!(list.contains("hash2"));
        assert!(list.contains("hash3"));
    }

    #[test]
    fn drops_empty_entries_and_duplicates() {
        let list = TrustedIssuerHashes::parse(";hash1;;hash1; ;");
        assert_eq!(list.len(), 1);
        assert!(!list.contains(""));
    }

    #[test]
    fn blank_setting_trusts_nothing() {
        assert!(TrustedIssuerHashes::parse("").is_empty());
        assert!(TrustedIssuerHashes::parse(" ; ").is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let list = TrustedIssuerHashes::parse("AbCd");
        assert!(list.contains("AbCd"));
        assert!(!list.contains("abcd"));
    }
}
