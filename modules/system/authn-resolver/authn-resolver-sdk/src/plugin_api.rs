//! Plugin API trait for pre-authentication filters.
//!
//! A filter turns proxy-forwarded request headers into identities. It never
//! fails: every problem it meets ends as "no principal".

use async_trait::async_trait;

use crate::models::{CandidateCredentials, HeaderAuthentication};
use crate::token::PreAuthenticatedToken;

/// Plugin API trait for pre-authentication filters.
#[async_trait]
pub trait PreAuthenticationFilter: Send + Sync {
    /// Whether the token's tenant enabled this authentication mode.
    async fn is_enabled(&self, token: &PreAuthenticatedToken) -> bool;

    /// The single trusted identity the token presents, if any.
    async fn pre_authenticated_principal(
        &self,
        token: &PreAuthenticatedToken,
    ) -> Option<HeaderAuthentication>;

    /// Every identity the token presents, trusted or not.
    fn pre_authenticated_credentials(&self, token: &PreAuthenticatedToken)
    -> CandidateCredentials;
}
