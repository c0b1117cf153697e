//! Application configuration.
//!
//! Loaded from an optional YAML file, then overridden by environment
//! variables prefixed `CONTROLLER_GATEWAY__` with `__` separating nested keys
//! (`CONTROLLER_GATEWAY__SERVER__BIND_ADDR=0.0.0.0:8087`).

use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use anyhow::{Context, bail};
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use header_authn_plugin::HeaderAuthNPluginConfig;
use serde::Deserialize;
use tenant_config::TenantConfigModuleConfig;

pub const ENV_PREFIX: &str = "CONTROLLER_GATEWAY__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub header_authn: HeaderAuthNPluginConfig,
    pub tenant_config: TenantConfigModuleConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8087)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or the merged
    /// configuration does not parse or validate.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new();

        if let Some(p) = path {
            if !p.exists() {
                bail!("config file not found: {}", p.display());
            }
            figment = figment.merge(Yaml::file(p));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Self = figment.extract().context("failed to parse configuration")?;
        config
            .header_authn
            .validate()
            .context("invalid header_authn configuration")?;
        Ok(config)
    }
}
