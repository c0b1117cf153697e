//! In-memory tenant configuration store.

use std::collections::HashMap;

use dashmap::DashMap;
use modkit_security::{SecurityContext, TenantId};
use tenant_config_sdk::{TenantConfigurationKey, TenantConfigurationValue, keys};

use super::error::DomainError;
use crate::config::TenantConfigModuleConfig;

/// Per-tenant configuration values.
///
/// Sharded concurrent map: reads for different tenants never contend and
/// writes lock only the tenant being written.
#[derive(Default)]
pub struct TenantConfigurationStore {
    values: DashMap<TenantId, HashMap<&'static str, serde_json::Value>>,
}

impl TenantConfigurationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store seeded from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a tenant id is invalid, a key is unknown, or a
    /// value does not match its key's type.
    pub fn from_config(cfg: &TenantConfigModuleConfig) -> Result<Self, DomainError> {
        let store = Self::new();
        for (tenant, settings) in &cfg.tenants {
            let tenant_id = TenantId::new(tenant).map_err(|source| DomainError::InvalidTenant {
                tenant: tenant.clone(),
                source,
            })?;
            for (key, value) in settings {
                let key = checked_key(key, value)?;
                store.insert(tenant_id.clone(), key, value.clone());
            }
        }
        tracing::info!(tenants = store.values.len(), "Seeded tenant configuration");
        Ok(store)
    }

    /// Resolve `key` for `tenant`, falling back to the key's default.
    ///
    /// # Errors
    ///
    /// `Forbidden` if `ctx` may not access `tenant`; `UnknownKey` if `key` is
    /// not a known configuration key.
    pub fn get(
        &self,
        ctx: &SecurityContext,
        tenant: &TenantId,
        key: &str,
    ) -> Result<Option<TenantConfigurationValue>, DomainError> {
        authorize(ctx, tenant)?;
        let key = known_key(key)?;

        let stored = self
            .values
            .get(tenant)
            .and_then(|settings| settings.get(key.name).cloned());

        Ok(match stored {
            Some(value) => Some(TenantConfigurationValue::tenant(value)),
            None => key.default.to_value().map(TenantConfigurationValue::global),
        })
    }

    /// Set `key` for `tenant`.
    ///
    /// # Errors
    ///
    /// `Forbidden` if `ctx` may not access `tenant`; `UnknownKey` or
    /// `InvalidValue` if the key/value pair is not acceptable.
    pub fn set(
        &self,
        ctx: &SecurityContext,
        tenant: &TenantId,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), DomainError> {
        authorize(ctx, tenant)?;
        let key = checked_key(key, &value)?;
        self.insert(tenant.clone(), key, value);
        tracing::debug!(tenant = %tenant, key = key.name, "Tenant configuration updated");
        Ok(())
    }

    /// Remove the tenant's value for `key`; returns whether a value existed.
    ///
    /// # Errors
    ///
    /// `Forbidden` if `ctx` may not access `tenant`; `UnknownKey` if `key` is
    /// not a known configuration key.
    pub fn delete(
        &self,
        ctx: &SecurityContext,
        tenant: &TenantId,
        key: &str,
    ) -> Result<bool, DomainError> {
        authorize(ctx, tenant)?;
        let key = known_key(key)?;

        let removed = self
            .values
            .get_mut(tenant)
            .is_some_and(|mut settings| settings.remove(key.name).is_some());
        // Drop tenants with no settings left so the map does not grow unbounded.
        self.values.remove_if(tenant, |_, settings| settings.is_empty());
        Ok(removed)
    }

    fn insert(&self, tenant: TenantId, key: TenantConfigurationKey, value: serde_json::Value) {
        self.values
            .entry(tenant)
            .or_default()
            .insert(key.name, value);
    }
}

fn authorize(ctx: &SecurityContext, tenant: &TenantId) -> Result<(), DomainError> {
    if ctx.may_access_tenant(tenant) {
        Ok(())
    } else {
        tracing::debug!(
            tenant = %tenant,
            caller_tenant = ?ctx.tenant_id().map(TenantId::as_str),
            "Tenant configuration access denied"
        );
        Err(DomainError::Forbidden {
            tenant: tenant.to_string(),
        })
    }
}

fn known_key(name: &str) -> Result<TenantConfigurationKey, DomainError> {
    keys::find(name).ok_or_else(|| DomainError::UnknownKey(name.to_owned()))
}

fn checked_key(name: &str, value: &serde_json::Value) -> Result<TenantConfigurationKey, DomainError> {
    let key = known_key(name)?;
    if key.kind.matches(value) {
        Ok(key)
    } else {
        Err(DomainError::InvalidValue {
            key: name.to_owned(),
            reason: format!("expected a {} value", key.kind.as_str()),
        })
    }
}
