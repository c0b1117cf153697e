//! Header authentication filter.
//!
//! Turns the certificate metadata a TLS-terminating proxy forwards as headers
//! into a controller identity:
//!
//! 1. The common name header plus every indexed issuer-hash header present
//!    form the candidate identities, ordered by index.
//! 2. The tenant's trusted issuer hashes are read with system privileges,
//!    bounded by a timeout.
//! 3. The lowest-indexed candidate whose hash is trusted is the principal.
//!
//! Lookup failures never escape; they are logged and the request simply has
//! no principal.

use std::sync::Arc;
use std::time::Duration;

use authn_resolver_sdk::{
    AuthenticationResult, Candidate, CandidateCredentials, HeaderAuthentication,
    PreAuthenticatedToken,
};
use http::HeaderName;
use modkit_security::{SecurityContext, SystemSecurityContext, TenantId};
use tenant_config_sdk::keys::{
    AUTHENTICATION_MODE_HEADER_AUTHORITY_NAME, AUTHENTICATION_MODE_HEADER_ENABLED,
};
use tenant_config_sdk::{TenantConfigurationClient, TenantConfigurationKey};

use super::error::DomainError;
use super::trust_list::TrustedIssuerHashes;
use crate::config::{ConfigError, HeaderAuthNPluginConfig, header_name};

/// Subject type of contexts produced by this filter.
pub const CONTROLLER_SUBJECT_TYPE: &str = "controller";

/// Resolves controller identities from proxy-forwarded certificate headers.
///
/// Holds only validated configuration and a shared configuration client, so
/// one instance serves all requests behind an `Arc`.
pub struct HeaderAuthenticationFilter {
    common_name_header: HeaderName,
    issuer_hash_headers: Vec<(u32, HeaderName)>,
    lookup_timeout: Duration,
    tenant_config: Arc<dyn TenantConfigurationClient>,
    system: SystemSecurityContext,
}

impl HeaderAuthenticationFilter {
    /// Create a filter from plugin configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration does not validate.
    pub fn new(
        cfg: &HeaderAuthNPluginConfig,
        tenant_config: Arc<dyn TenantConfigurationClient>,
    ) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            common_name_header: header_name(&cfg.common_name_header)?,
            issuer_hash_headers: cfg
                .issuer_hash_header_template
                .header_names(cfg.max_issuer_hash_headers)?,
            lookup_timeout: cfg.trust_list_lookup_timeout,
            tenant_config,
            system: SystemSecurityContext::new(),
        })
    }

    /// Every identity the token presents, by ascending header index.
    ///
    /// Every index up to the configured bound is probed; a missing index does
    /// not end the scan.
    #[must_use]
    pub fn credentials(&self, token: &PreAuthenticatedToken) -> CandidateCredentials {
        let Some(common_name) = present(token, &self.common_name_header) else {
            return CandidateCredentials::default();
        };

        self.issuer_hash_headers
            .iter()
            .filter_map(|(index, name)| {
                present(token, name).map(|issuer_hash| Candidate {
                    header_index: *index,
                    credential: HeaderAuthentication::new(common_name, issuer_hash),
                })
            })
            .collect()
    }

    /// The lowest-indexed presented identity whose issuer the tenant trusts.
    #[tracing::instrument(skip_all, fields(tenant = %token.tenant()))]
    pub async fn principal(&self, token: &PreAuthenticatedToken) -> Option<HeaderAuthentication> {
        let candidates = self.credentials(token);
        self.first_trusted(token.tenant(), &candidates).await
    }

    /// Whether the tenant enabled header authentication. Any lookup problem
    /// reads as disabled.
    #[tracing::instrument(skip_all, fields(tenant = %token.tenant()))]
    pub async fn is_enabled(&self, token: &PreAuthenticatedToken) -> bool {
        let key = AUTHENTICATION_MODE_HEADER_ENABLED;
        match self.lookup(token.tenant(), key).await {
            Ok(Some(serde_json::Value::Bool(enabled))) => enabled,
            Ok(None) => false,
            Ok(Some(other)) => {
                tracing::warn!(
                    error = %unexpected_type(key, &other),
                    "Header authentication treated as disabled"
                );
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "Header authentication treated as disabled");
                false
            }
        }
    }

    /// Authenticate the token and build the controller's security context.
    ///
    /// # Errors
    ///
    /// `NoTrustedIdentity` if no identity is presented or none is trusted;
    /// `Disabled` if the tenant has not enabled header authentication. A
    /// token without certificate headers is rejected before any lookup.
    #[tracing::instrument(skip_all, fields(tenant = %token.tenant()))]
    pub async fn authenticate(
        &self,
        token: &PreAuthenticatedToken,
    ) -> Result<AuthenticationResult, DomainError> {
        let credentials = self.credentials(token);
        if credentials.is_empty() {
            tracing::trace!("No certificate headers presented");
            return Err(DomainError::NoTrustedIdentity);
        }
        if !self.is_enabled(token).await {
            return Err(DomainError::Disabled);
        }

        let principal = self
            .first_trusted(token.tenant(), &credentials)
            .await
            .ok_or(DomainError::NoTrustedIdentity)?;

        let security_context = SecurityContext::builder()
            .subject_id(principal.common_name())
            .subject_type(CONTROLLER_SUBJECT_TYPE)
            .tenant_id(token.tenant().clone())
            .build();

        tracing::info!(principal = %principal, "Controller authenticated");
        Ok(AuthenticationResult {
            security_context,
            principal,
            credentials,
        })
    }

    async fn first_trusted(
        &self,
        tenant: &TenantId,
        candidates: &CandidateCredentials,
    ) -> Option<HeaderAuthentication> {
        if candidates.is_empty() {
            tracing::trace!("No certificate headers presented");
            return None;
        }

        let trusted = match self.trust_list(tenant).await {
            Ok(Some(trusted)) => trusted,
            Ok(None) => {
                tracing::debug!("Tenant has no trusted issuer hashes configured");
                return None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Trusted issuer hashes unavailable");
                return None;
            }
        };

        let principal = candidates
            .credentials()
            .find(|candidate| trusted.contains(candidate.issuer_hash()))
            .cloned();

        if principal.is_none() {
            tracing::debug!(
                candidates = candidates.len(),
                trusted = trusted.len(),
                "No presented issuer hash is trusted"
            );
        }
        principal
    }

    async fn trust_list(&self, tenant: &TenantId) -> Result<Option<TrustedIssuerHashes>, DomainError> {
        let key = AUTHENTICATION_MODE_HEADER_AUTHORITY_NAME;
        match self.lookup(tenant, key).await? {
            None => Ok(None),
            Some(serde_json::Value::String(raw)) => Ok(Some(TrustedIssuerHashes::parse(&raw))),
            Some(other) => Err(unexpected_type(key, &other)),
        }
    }

    /// Read `key` for `tenant` with system privileges.
    async fn lookup(
        &self,
        tenant: &TenantId,
        key: TenantConfigurationKey,
    ) -> Result<Option<serde_json::Value>, DomainError> {
        let client = self.tenant_config.as_ref();
        let fetch = self.system.run_as_system(tenant, |ctx| async move {
            client.get_configuration_value(&ctx, tenant, key.name).await
        });

        let value = tokio::time::timeout(self.lookup_timeout, fetch)
            .await
            .map_err(|_| DomainError::LookupTimeout {
                timeout: self.lookup_timeout,
            })??;
        Ok(value.map(|v| v.value))
    }
}

/// Trimmed header value, `None` when missing or blank.
fn present<'a>(token: &'a PreAuthenticatedToken, name: &HeaderName) -> Option<&'a str> {
    token
        .header(name.as_str())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn unexpected_type(key: TenantConfigurationKey, value: &serde_json::Value) -> DomainError {
    let found = match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    };
    DomainError::UnexpectedValueType {
        key: key.name,
        found,
    }
}
