pub mod middleware;
pub mod problem;

pub use middleware::{ControllerPath, header_authn_middleware, split_tenant_path};
pub use problem::Problem;
