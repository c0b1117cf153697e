//! `AuthN` Resolver SDK
//!
//! This crate provides the public API for resolving controller identities that
//! a TLS-terminating proxy forwards as request headers:
//!
//! - [`PreAuthenticatedToken`] - Per-request headers and tenant, built by the transport
//! - [`HeaderAuthentication`] - A (common name, issuer hash) identity
//! - [`CandidateCredentials`] - Every identity a request presented, in header order
//! - [`PreAuthenticationFilter`] - Plugin API trait for filter implementations
//! - [`PreAuthNResolverClient`] - Public API trait for consumers
//! - [`AuthenticationResult`] - Authentication result model
//! - [`AuthNResolverError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use authn_resolver_sdk::{PreAuthNResolverClient, PreAuthenticatedToken};
//!
//! let token = PreAuthenticatedToken::from_header_map(tenant, req.headers());
//! let result = authn.authenticate(&token).await?;
//! let security_context = result.security_context;
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod plugin_api;
pub mod token;

// Re-export main types at crate root
pub use api::PreAuthNResolverClient;
pub use error::AuthNResolverError;
pub use models::{AuthenticationResult, Candidate, CandidateCredentials, HeaderAuthentication};
pub use plugin_api::PreAuthenticationFilter;
pub use token::PreAuthenticatedToken;
