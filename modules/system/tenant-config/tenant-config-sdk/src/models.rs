//! Domain models for the tenant configuration module.

use serde::{Deserialize, Serialize};

/// A resolved tenant configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantConfigurationValue {
    pub value: serde_json::Value,
    /// `true` when the value is the key's default rather than a tenant setting.
    pub global: bool,
}

impl TenantConfigurationValue {
    #[must_use]
    pub fn tenant(value: serde_json::Value) -> Self {
        Self {
            value,
            global: false,
        }
    }

    #[must_use]
    pub fn global(value: serde_json::Value) -> Self {
        Self {
            value,
            global: true,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_bool()
    }
}
