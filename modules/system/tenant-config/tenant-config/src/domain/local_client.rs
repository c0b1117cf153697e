//! Local (in-process) client for the tenant configuration store.

use std::sync::Arc;

use async_trait::async_trait;
use modkit_security::{SecurityContext, TenantId};
use tenant_config_sdk::{TenantConfigError, TenantConfigurationClient, TenantConfigurationValue};

use super::{DomainError, TenantConfigurationStore};

/// Local client wrapping the store.
pub struct TenantConfigLocalClient {
    store: Arc<TenantConfigurationStore>,
}

impl TenantConfigLocalClient {
    #[must_use]
    pub fn new(store: Arc<TenantConfigurationStore>) -> Self {
        Self { store }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> TenantConfigError {
    tracing::debug!(operation = op, error = %e, "tenant_config call failed");
    e.into()
}

#[async_trait]
impl TenantConfigurationClient for TenantConfigLocalClient {
    async fn get_configuration_value(
        &self,
        ctx: &SecurityContext,
        tenant: &TenantId,
        key: &str,
    ) -> Result<Option<TenantConfigurationValue>, TenantConfigError> {
        self.store
            .get(ctx, tenant, key)
            .map_err(|e| log_and_convert("get_configuration_value", e))
    }
}
