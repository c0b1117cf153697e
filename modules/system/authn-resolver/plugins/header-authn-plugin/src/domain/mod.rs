pub mod client;
pub mod error;
pub mod service;
pub mod trust_list;

pub use error::DomainError;
pub use service::HeaderAuthenticationFilter;
pub use trust_list::TrustedIssuerHashes;
