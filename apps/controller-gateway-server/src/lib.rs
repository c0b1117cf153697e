#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Controller gateway: serves tenant-prefixed controller routes behind
//! proxy-forwarded certificate header authentication.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;

pub use app::build_router;
pub use cli::Cli;
pub use config::AppConfig;
