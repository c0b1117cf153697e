pub mod error;
pub mod local_client;
pub mod store;

pub use error::DomainError;
pub use local_client::TenantConfigLocalClient;
pub use store::TenantConfigurationStore;
