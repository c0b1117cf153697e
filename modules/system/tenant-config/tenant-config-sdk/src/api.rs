//! Public API trait for tenant configuration reads.

use async_trait::async_trait;
use modkit_security::{SecurityContext, TenantId};

use crate::error::TenantConfigError;
use crate::models::TenantConfigurationValue;

/// Read access to per-tenant configuration.
///
/// Implementations must be safe for concurrent reads. Callers that have no
/// tenant-authorized context yet (authentication filters) run the read inside
/// [`SystemSecurityContext::run_as_system`](modkit_security::SystemSecurityContext::run_as_system).
#[async_trait]
pub trait TenantConfigurationClient: Send + Sync {
    /// Resolve `key` for `tenant`.
    ///
    /// Returns the tenant's value, the key's default (marked `global`) when
    /// the tenant never set it, or `None` when neither exists.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if `ctx` may not access `tenant`
    /// - `UnknownKey` if `key` is not a known configuration key
    /// - `Unavailable` if the backing store cannot be reached
    async fn get_configuration_value(
        &self,
        ctx: &SecurityContext,
        tenant: &TenantId,
        key: &str,
    ) -> Result<Option<TenantConfigurationValue>, TenantConfigError>;
}
