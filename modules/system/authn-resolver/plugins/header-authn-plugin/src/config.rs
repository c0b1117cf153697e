//! Configuration for the header `AuthN` plugin.

use std::fmt;
use std::time::Duration;

use http::HeaderName;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

const PLACEHOLDER: &str = "%d";

/// Largest accepted `max_issuer_hash_headers`.
pub const MAX_ISSUER_HASH_HEADERS_LIMIT: u32 = 64;

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderAuthNPluginConfig {
    /// Header carrying the client certificate common name.
    pub common_name_header: String,

    /// Issuer-hash header names, `%d` standing for the 1-based index.
    pub issuer_hash_header_template: IssuerHashHeaderTemplate,

    /// Highest issuer-hash header index probed.
    pub max_issuer_hash_headers: u32,

    /// Upper bound on one trust-list lookup.
    #[serde(deserialize_with = "deserialize_duration")]
    pub trust_list_lookup_timeout: Duration,
}

impl Default for HeaderAuthNPluginConfig {
    fn default() -> Self {
        Self {
            common_name_header: "ca-cn".to_owned(),
            issuer_hash_header_template: IssuerHashHeaderTemplate::default(),
            max_issuer_hash_headers: 10,
            trust_list_lookup_timeout: Duration::from_secs(2),
        }
    }
}

impl HeaderAuthNPluginConfig {
    /// Check the values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        header_name(&self.common_name_header)?;
        if !(1..=MAX_ISSUER_HASH_HEADERS_LIMIT).contains(&self.max_issuer_hash_headers) {
            return Err(ConfigError::MaxIssuerHashHeaders(self.max_issuer_hash_headers));
        }
        if self.trust_list_lookup_timeout.is_zero() {
            return Err(ConfigError::ZeroLookupTimeout);
        }
        Ok(())
    }
}

/// Invalid plugin configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("issuer hash header template '{template}' must contain exactly one '%d', found {found}")]
    TemplatePlaceholder { template: String, found: usize },

    #[error("issuer hash header template '{template}' contains a '%' outside its '%d' placeholder")]
    TemplateStrayPercent { template: String },

    #[error("'{0}' is not a valid HTTP header name")]
    InvalidHeaderName(String),

    #[error(
        "max_issuer_hash_headers must be between 1 and {MAX_ISSUER_HASH_HEADERS_LIMIT}, got {0}"
    )]
    MaxIssuerHashHeaders(u32),

    #[error("trust_list_lookup_timeout must be greater than zero")]
    ZeroLookupTimeout,
}

/// Template for indexed issuer-hash header names, e.g. `X-Ssl-Issuer-Hash-%d`.
///
/// Holds exactly one `%d` and no other `%`; the name it yields for index 1 is
/// a valid header name, and so is every other index since only digits change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct IssuerHashHeaderTemplate {
    prefix: String,
    suffix: String,
}

impl IssuerHashHeaderTemplate {
    /// Parse and validate a template.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the placeholder count is not one, a stray `%`
    /// remains, or the rendered name is not a valid header name.
    pub fn new(template: &str) -> Result<Self, ConfigError> {
        let found = template.matches(PLACEHOLDER).count();
        let Some((prefix, suffix)) = template.split_once(PLACEHOLDER).filter(|_| found == 1)
        else {
            return Err(ConfigError::TemplatePlaceholder {
                template: template.to_owned(),
                found,
            });
        };
        if prefix.contains('%') || suffix.contains('%') {
            return Err(ConfigError::TemplateStrayPercent {
                template: template.to_owned(),
            });
        }

        let parsed = Self {
            prefix: prefix.to_owned(),
            suffix: suffix.to_owned(),
        };
        header_name(&parsed.render(1))?;
        Ok(parsed)
    }

    /// Header name for `index`.
    #[must_use]
    pub fn render(&self, index: u32) -> String {
        format!("{}{index}{}", self.prefix, self.suffix)
    }

    /// Header names for indices `1..=max`.
    pub(crate) fn header_names(
        &self,
        max: u32,
    ) -> Result<Vec<(u32, HeaderName)>, ConfigError> {
        (1..=max)
            .map(|index| header_name(&self.render(index)).map(|name| (index, name)))
            .collect()
    }
}

impl Default for IssuerHashHeaderTemplate {
    fn default() -> Self {
        Self {
            prefix: "X-Ssl-Issuer-Hash-".to_owned(),
            suffix: String::new(),
        }
    }
}

impl fmt::Display for IssuerHashHeaderTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{PLACEHOLDER}{}", self.prefix, self.suffix)
    }
}

impl TryFrom<String> for IssuerHashHeaderTemplate {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

pub(crate) fn header_name(name: &str) -> Result<HeaderName, ConfigError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| ConfigError::InvalidHeaderName(name.to_owned()))
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    humantime::parse_duration(&raw).map_err(serde::de::Error::custom)
}
