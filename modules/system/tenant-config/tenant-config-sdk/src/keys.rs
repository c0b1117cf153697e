//! Well-known tenant configuration keys.

/// Type of value a key accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Boolean,
    String,
}

impl ValueKind {
    /// Whether `value` has this kind.
    #[must_use]
    pub fn matches(self, value: &serde_json::Value) -> bool {
        match self {
            Self::Boolean => value.is_boolean(),
            Self::String => value.is_string(),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
        }
    }
}

/// Value used when a tenant never set the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDefault {
    None,
    Bool(bool),
    Str(&'static str),
}

impl KeyDefault {
    #[must_use]
    pub fn to_value(self) -> Option<serde_json::Value> {
        match self {
            Self::None => None,
            Self::Bool(b) => Some(serde_json::Value::Bool(b)),
            Self::Str(s) => Some(serde_json::Value::String(s.to_owned())),
        }
    }
}

/// A tenant configuration key with its declared type and default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantConfigurationKey {
    pub name: &'static str,
    pub kind: ValueKind,
    pub default: KeyDefault,
}

/// Whether controllers may authenticate with proxy-forwarded certificate headers.
pub const AUTHENTICATION_MODE_HEADER_ENABLED: TenantConfigurationKey = TenantConfigurationKey {
    name: "authentication.header.enabled",
    kind: ValueKind::Boolean,
    default: KeyDefault::Bool(false),
};

/// `;`-separated issuer hashes trusted for header authentication.
pub const AUTHENTICATION_MODE_HEADER_AUTHORITY_NAME: TenantConfigurationKey =
    TenantConfigurationKey {
        name: "authentication.header.authority",
        kind: ValueKind::String,
        default: KeyDefault::None,
    };

/// All known keys.
pub const ALL: &[TenantConfigurationKey] = &[
    AUTHENTICATION_MODE_HEADER_ENABLED,
    AUTHENTICATION_MODE_HEADER_AUTHORITY_NAME,
];

/// Look up a known key by name.
#[must_use]
pub fn find(name: &str) -> Option<TenantConfigurationKey> {
    ALL.iter().copied().find(|key| key.name == name)
}
