//! Error types for the tenant configuration module.

use thiserror::Error;

/// Errors that can occur when using the tenant configuration API.
#[derive(Debug, Error)]
pub enum TenantConfigError {
    /// The caller is not allowed to access the tenant's configuration.
    #[error("access to configuration of tenant '{tenant}' is forbidden")]
    Forbidden { tenant: String },

    /// The key is not a known tenant configuration key.
    #[error("unknown configuration key '{0}'")]
    UnknownKey(String),

    /// The value does not match the key's declared type.
    #[error("invalid value for configuration key '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    /// The backing store could not be reached.
    #[error("configuration store unavailable: {0}")]
    Unavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
