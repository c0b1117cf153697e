#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Header `AuthN` Resolver Plugin
//!
//! Authenticates device controllers behind a TLS-terminating proxy. The proxy
//! forwards the client certificate's common name and the hash of each issuer
//! in its chain as headers; this plugin matches those hashes against the
//! tenant's trusted issuers and produces a controller `SecurityContext`.
//!
//! ## Headers
//!
//! - `ca-cn` - certificate common name
//! - `X-Ssl-Issuer-Hash-1` .. `X-Ssl-Issuer-Hash-N` - issuer hashes, probed up
//!   to `max_issuer_hash_headers`; the lowest trusted index wins
//!
//! ## Tenant settings
//!
//! - `authentication.header.enabled` - opt-in flag, `false` by default
//! - `authentication.header.authority` - `;`-separated trusted issuer hashes
//!
//! ## Configuration
//!
//! ```yaml
//! header_authn:
//!   common_name_header: ca-cn
//!   issuer_hash_header_template: "X-Ssl-Issuer-Hash-%d"
//!   max_issuer_hash_headers: 10
//!   trust_list_lookup_timeout: 2s
//! ```

pub mod api;
pub mod config;
pub mod domain;

pub use api::header_authn_middleware;
pub use config::{ConfigError, HeaderAuthNPluginConfig, IssuerHashHeaderTemplate};
pub use domain::{DomainError, HeaderAuthenticationFilter, TrustedIssuerHashes};
