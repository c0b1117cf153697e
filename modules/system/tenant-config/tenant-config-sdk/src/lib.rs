//! Tenant Configuration SDK
//!
//! This crate provides the public API for the `tenant_config` module:
//!
//! - [`TenantConfigurationClient`] - Read API used by consumers
//! - [`TenantConfigurationKey`] - Well-known configuration keys
//! - [`TenantConfigurationValue`] - A resolved value
//! - [`TenantConfigError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use tenant_config_sdk::{TenantConfigurationClient, keys};
//!
//! let value = client
//!     .get_configuration_value(&ctx, &tenant, keys::AUTHENTICATION_MODE_HEADER_AUTHORITY_NAME.name)
//!     .await?;
//! ```

pub mod api;
pub mod error;
pub mod keys;
pub mod models;

pub use api::TenantConfigurationClient;
pub use error::TenantConfigError;
pub use keys::{KeyDefault, TenantConfigurationKey, ValueKind};
pub use models::TenantConfigurationValue;
