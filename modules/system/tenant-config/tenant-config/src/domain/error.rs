//! Domain errors for the tenant configuration store.

use modkit_security::InvalidTenantId;
use tenant_config_sdk::TenantConfigError;

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("access to configuration of tenant '{tenant}' is forbidden")]
    Forbidden { tenant: String },

    #[error("unknown configuration key '{0}'")]
    UnknownKey(String),

    #[error("invalid value for configuration key '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("invalid tenant id '{tenant}': {source}")]
    InvalidTenant {
        tenant: String,
        #[source]
        source: InvalidTenantId,
    },
}

impl From<DomainError> for TenantConfigError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Forbidden { tenant } => Self::Forbidden { tenant },
            DomainError::UnknownKey(key) => Self::UnknownKey(key),
            DomainError::InvalidValue { key, reason } => Self::InvalidValue { key, reason },
            e @ DomainError::InvalidTenant { .. } => Self::Internal(e.to_string()),
        }
    }
}
