#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Tenant Configuration Store
//!
//! Keeps per-tenant configuration values in memory and serves them through
//! [`tenant_config_sdk::TenantConfigurationClient`].
//!
//! Every read and write is authorized against the caller's
//! [`SecurityContext`](modkit_security::SecurityContext): a caller may only
//! touch its own tenant unless it runs with system privilege.
//!
//! ## Configuration
//!
//! ```yaml
//! tenant_config:
//!   tenants:
//!     DEFAULT:
//!       authentication.header.enabled: true
//!       authentication.header.authority: "hash1;hash2"
//! ```

pub mod config;
pub mod domain;

pub use config::TenantConfigModuleConfig;
pub use domain::{DomainError, TenantConfigLocalClient, TenantConfigurationStore};
