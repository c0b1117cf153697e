//! Client implementations for the header `AuthN` plugin.
//!
//! Implements `PreAuthenticationFilter` and `PreAuthNResolverClient` using the
//! domain service.

use async_trait::async_trait;
use authn_resolver_sdk::{
    AuthNResolverError, AuthenticationResult, CandidateCredentials, HeaderAuthentication,
    PreAuthNResolverClient, PreAuthenticatedToken, PreAuthenticationFilter,
};

use super::service::HeaderAuthenticationFilter;

#[async_trait]
impl PreAuthenticationFilter for HeaderAuthenticationFilter {
    async fn is_enabled(&self, token: &PreAuthenticatedToken) -> bool {
        self.is_enabled(token).await
    }

    async fn pre_authenticated_principal(
        &self,
        token: &PreAuthenticatedToken,
    ) -> Option<HeaderAuthentication> {
        self.principal(token).await
    }

    fn pre_authenticated_credentials(
        &self,
        token: &PreAuthenticatedToken,
    ) -> CandidateCredentials {
        self.credentials(token)
    }
}

#[async_trait]
impl PreAuthNResolverClient for HeaderAuthenticationFilter {
    async fn authenticate(
        &self,
        token: &PreAuthenticatedToken,
    ) -> Result<AuthenticationResult, AuthNResolverError> {
        self.authenticate(token).await.map_err(Into::into)
    }
}
