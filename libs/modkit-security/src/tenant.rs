use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a tenant.
///
/// Always non-empty and free of surrounding whitespace and control characters.
/// Construct through [`TenantId::new`] or the `TryFrom`/`FromStr` impls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TenantId(String);

/// Returned when a string cannot be used as a [`TenantId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTenantId {
    #[error("tenant id must not be empty")]
    Empty,
    #[error("tenant id must not contain control characters")]
    ControlCharacter,
}

impl TenantId {
    /// Create a tenant id, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTenantId`] if the trimmed id is empty or contains
    /// control characters.
    pub fn new(id: impl AsRef<str>) -> Result<Self, InvalidTenantId> {
        let id = id.as_ref().trim();
        if id.is_empty() {
            return Err(InvalidTenantId::Empty);
        }
        if id.chars().any(char::is_control) {
            return Err(InvalidTenantId::ControlCharacter);
        }
        Ok(Self(id.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for TenantId {
    type Err = InvalidTenantId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TenantId {
    type Error = InvalidTenantId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TenantId {
    type Error = InvalidTenantId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TenantId> for String {
    fn from(value: TenantId) -> Self {
        value.0
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let tenant = TenantId::new("  DEFAULT ").unwrap();
        assert_eq!(tenant.as_str(), "DEFAULT");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!(TenantId::new(""), Err(InvalidTenantId::Empty));
        assert_eq!(TenantId::new("   "), Err(InvalidTenantId::Empty));
    }

    #[test]
    fn rejects_control_characters() {
        assert_eq!(
            TenantId::new("acme\r\nX-Injected: 1"),
            Err(InvalidTenantId::ControlCharacter)
        );
    }

    #[test]
    fn deserialization_validates() {
        let ok: TenantId = serde_json::from_str("\"acme\"").unwrap();
        assert_eq!(ok.as_str(), "acme");

        let err = serde_json::from_str::<TenantId>("\"\"");
        assert!(err.is_err());
    }
}
