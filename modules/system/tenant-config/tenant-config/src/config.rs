//! Configuration for the tenant configuration store.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TenantConfigModuleConfig {
    /// Initial values: tenant id -> configuration key -> value.
    pub tenants: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}
