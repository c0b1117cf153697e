//! Error types for the `AuthN` resolver.

use thiserror::Error;

/// Errors that can occur when using the `AuthN` resolver API.
#[derive(Debug, Error)]
pub enum AuthNResolverError {
    /// The request carries no trusted identity.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The resolver is not available yet.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
