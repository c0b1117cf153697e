//! The per-request identity token.

use std::collections::HashMap;

use modkit_security::TenantId;

/// Everything the transport knows about a request before authentication: the
/// target tenant, the request headers and an opaque resource reference.
///
/// Header names are case-insensitive. The token is immutable once built; the
/// `with_*` methods consume and return it.
#[derive(Debug, Clone)]
pub struct PreAuthenticatedToken {
    tenant: TenantId,
    headers: HashMap<String, String>,
    resource: Option<String>,
}

impl PreAuthenticatedToken {
    #[must_use]
    pub fn new(tenant: TenantId) -> Self {
        Self {
            tenant,
            headers: HashMap::new(),
            resource: None,
        }
    }

    /// Build a token from transport headers.
    ///
    /// Values that are not valid UTF-8 are skipped. For a repeated header the
    /// first value wins.
    #[must_use]
    pub fn from_header_map(tenant: TenantId, headers: &http::HeaderMap) -> Self {
        let mut map = HashMap::with_capacity(headers.keys_len());
        for (name, value) in headers {
            // `HeaderValue::to_str` rejects non-ASCII; any UTF-8 is accepted here.
            let Ok(value) = std::str::from_utf8(value.as_bytes()) else {
                continue;
            };
            // HeaderName is already lowercase.
            map.entry(name.as_str().to_owned())
                .or_insert_with(|| value.to_owned());
        }
        Self {
            tenant,
            headers: map,
            resource: None,
        }
    }

    /// Set a header, replacing any previous value.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    #[must_use]
    pub fn tenant(&self) -> &TenantId {
        &self.tenant
    }

    /// Value of `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        let value = if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.headers.get(&name.to_ascii_lowercase())
        } else {
            self.headers.get(name)
        };
        value.map(String::as_str)
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }
}
