//! Public API trait for the `AuthN` resolver.
//!
//! This trait defines the interface that consumers (HTTP middleware, the
//! authentication pipeline) use to authenticate pre-authenticated requests.

use async_trait::async_trait;

use crate::error::AuthNResolverError;
use crate::models::AuthenticationResult;
use crate::token::PreAuthenticatedToken;

/// Public API trait for the `AuthN` resolver.
///
/// ```ignore
/// let result = authn.authenticate(&token).await?;
/// let ctx = result.security_context;
/// ```
#[async_trait]
pub trait PreAuthNResolverClient: Send + Sync {
    /// Authenticate a request from its forwarded headers.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the tenant disabled this mode or no presented
    ///   identity is trusted
    /// - `ServiceUnavailable` if the resolver is not ready
    /// - `Internal` for unexpected errors
    async fn authenticate(
        &self,
        token: &PreAuthenticatedToken,
    ) -> Result<AuthenticationResult, AuthNResolverError>;
}
