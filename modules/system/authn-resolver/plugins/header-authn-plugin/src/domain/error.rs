use std::time::Duration;

use authn_resolver_sdk::AuthNResolverError;
use tenant_config_sdk::TenantConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("header authentication disabled")]
    Disabled,

    #[error("no trusted controller certificate presented")]
    NoTrustedIdentity,

    #[error("tenant configuration lookup failed: {0}")]
    Lookup(#[from] TenantConfigError),

    #[error("tenant configuration key '{key}' holds an unexpected {found} value")]
    UnexpectedValueType { key: &'static str, found: &'static str },

    #[error("tenant configuration lookup timed out after {}", humantime::format_duration(*timeout))]
    LookupTimeout { timeout: Duration },
}

/// Only `Disabled` and `NoTrustedIdentity` leave the service; lookup failures
/// are logged and read as "no trust list". Anything else maps to `Internal`.
impl From<DomainError> for AuthNResolverError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Disabled | DomainError::NoTrustedIdentity => {
                Self::Unauthorized(err.to_string())
            }
            DomainError::Lookup(_)
            | DomainError::UnexpectedValueType { .. }
            | DomainError::LookupTimeout { .. } => Self::Internal(err.to_string()),
        }
    }
}
