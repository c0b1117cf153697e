//! Domain models for the `AuthN` resolver module.

use std::collections::HashSet;
use std::fmt;

use modkit_security::SecurityContext;
use serde::{Deserialize, Serialize};

/// A controller identity forwarded by the edge proxy: the client
/// certificate's common name and the hash of its issuer.
///
/// Equality and hashing cover both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeaderAuthentication {
    common_name: String,
    issuer_hash: String,
}

impl HeaderAuthentication {
    #[must_use]
    pub fn new(common_name: impl Into<String>, issuer_hash: impl Into<String>) -> Self {
        Self {
            common_name: common_name.into(),
            issuer_hash: issuer_hash.into(),
        }
    }

    #[must_use]
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    #[must_use]
    pub fn issuer_hash(&self) -> &str {
        &self.issuer_hash
    }
}

impl fmt::Display for HeaderAuthentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cn=\"{}\" issuer_hash=\"{}\"",
            self.common_name.escape_debug(),
            self.issuer_hash.escape_debug()
        )
    }
}

/// One identity together with the issuer-hash header index it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub header_index: u32,
    pub credential: HeaderAuthentication,
}

/// Every identity a request presented, ordered by ascending header index.
///
/// Holds one entry per contributing index, so two indices carrying the same
/// hash appear twice. Use [`CandidateCredentials::to_set`] for a set view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateCredentials(Vec<Candidate>);

impl CandidateCredentials {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.0.iter()
    }

    /// Identities only, in header order.
    pub fn credentials(&self) -> impl Iterator<Item = &HeaderAuthentication> {
        self.0.iter().map(|c| &c.credential)
    }

    #[must_use]
    pub fn contains(&self, credential: &HeaderAuthentication) -> bool {
        self.credentials().any(|c| c == credential)
    }

    #[must_use]
    pub fn to_set(&self) -> HashSet<HeaderAuthentication> {
        self.credentials().cloned().collect()
    }
}

impl FromIterator<Candidate> for CandidateCredentials {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        let mut candidates: Vec<Candidate> = iter.into_iter().collect();
        candidates.sort_by_key(|c| c.header_index);
        Self(candidates)
    }
}

impl<'a> IntoIterator for &'a CandidateCredentials {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Result of a successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// Security context for the authenticated controller.
    ///
    /// Contains:
    /// - `subject_id` - The certificate common name
    /// - `subject_type` - Always `controller`
    /// - `tenant_id` - The tenant the request was addressed to
    pub security_context: SecurityContext,

    /// The trusted identity that authenticated the request.
    pub principal: HeaderAuthentication,

    /// Every identity the request presented, trusted or not.
    pub credentials: CandidateCredentials,
}
