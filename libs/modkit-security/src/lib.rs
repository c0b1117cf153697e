#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod constants;
pub mod context;
pub mod system;
pub mod tenant;

pub use context::{Privilege, SecurityContext, SecurityContextBuilder};
pub use system::SystemSecurityContext;
pub use tenant::{InvalidTenantId, TenantId};
