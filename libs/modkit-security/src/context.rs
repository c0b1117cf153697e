use crate::constants::{SYSTEM_SUBJECT_ID, SYSTEM_SUBJECT_TYPE, UNRESTRICTED_SCOPE};
use crate::tenant::TenantId;

/// Privilege level of a [`SecurityContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Privilege {
    /// Regular caller, gated by tenant authorization checks.
    #[default]
    Tenant,
    /// Backend-internal caller that bypasses tenant authorization checks.
    ///
    /// Only [`SystemSecurityContext`](crate::SystemSecurityContext) hands out
    /// contexts with this privilege.
    System,
}

/// `SecurityContext` encapsulates the security-related information for a request or operation.
///
/// Built by an authentication plugin once a request is authenticated and passed
/// explicitly through the request lifecycle.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SecurityContext {
    /// Subject ID: the authenticated controller, user, service or system.
    subject_id: Option<String>,
    /// Subject type classification (e.g., "controller", "system").
    subject_type: Option<String>,
    /// Tenant the subject acts within.
    tenant_id: Option<TenantId>,
    /// Token capability restrictions. `["*"]` means unrestricted.
    #[serde(default)]
    token_scopes: Vec<String>,
    /// Never serialized: a context read from the wire is never elevated.
    #[serde(skip)]
    privilege: Privilege,
}

impl SecurityContext {
    /// Create a new `SecurityContext` builder
    #[must_use]
    pub fn builder() -> SecurityContextBuilder {
        SecurityContextBuilder::default()
    }

    /// Create an anonymous `SecurityContext` with no tenant, subject, or permissions
    #[must_use]
    pub fn anonymous() -> Self {
        SecurityContextBuilder::default().build()
    }

    /// Elevated context bound to `tenant_id`.
    pub(crate) fn system(tenant_id: TenantId) -> Self {
        Self {
            subject_id: Some(SYSTEM_SUBJECT_ID.to_owned()),
            subject_type: Some(SYSTEM_SUBJECT_TYPE.to_owned()),
            tenant_id: Some(tenant_id),
            token_scopes: vec![UNRESTRICTED_SCOPE.to_owned()],
            privilege: Privilege::System,
        }
    }

    #[must_use]
    pub fn subject_id(&self) -> Option<&str> {
        self.subject_id.as_deref()
    }

    #[must_use]
    pub fn subject_type(&self) -> Option<&str> {
        self.subject_type.as_deref()
    }

    #[must_use]
    pub fn tenant_id(&self) -> Option<&TenantId> {
        self.tenant_id.as_ref()
    }

    /// Get the token scopes. `["*"]` means unrestricted.
    #[must_use]
    pub fn token_scopes(&self) -> &[String] {
        &self.token_scopes
    }

    #[must_use]
    pub fn privilege(&self) -> Privilege {
        self.privilege
    }

    #[must_use]
    pub fn is_system(&self) -> bool {
        self.privilege == Privilege::System
    }

    /// Whether this context may act on data owned by `tenant`.
    ///
    /// System contexts bypass the check; everyone else must belong to `tenant`.
    #[must_use]
    pub fn may_access_tenant(&self, tenant: &TenantId) -> bool {
        self.is_system() || self.tenant_id.as_ref() == Some(tenant)
    }
}

#[derive(Default)]
pub struct SecurityContextBuilder {
    subject_id: Option<String>,
    subject_type: Option<String>,
    tenant_id: Option<TenantId>,
    token_scopes: Vec<String>,
}

impl SecurityContextBuilder {
    #[must_use]
    pub fn subject_id(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_id = Some(subject_id.into());
        self
    }

    #[must_use]
    pub fn subject_type(mut self, subject_type: &str) -> Self {
        self.subject_type = Some(subject_type.to_owned());
        self
    }

    #[must_use]
    pub fn tenant_id(mut self, tenant_id: TenantId) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    #[must_use]
    pub fn token_scopes(mut self, scopes: Vec<String>) -> Self {
        self.token_scopes = scopes;
        self
    }

    /// Builds a context with [`Privilege::Tenant`]; the builder cannot elevate.
    #[must_use]
    pub fn build(self) -> SecurityContext {
        SecurityContext {
            subject_id: self.subject_id,
            subject_type: self.subject_type,
            tenant_id: self.tenant_id,
            token_scopes: self.token_scopes,
            privilege: Privilege::Tenant,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn tenant(id: &str) -> TenantId {
        TenantId::new(id).unwrap()
    }

    #[test]
    fn test_security_context_builder_full() {
        let ctx = SecurityContext::builder()
            .subject_id("box1")
            .subject_type("controller")
            .tenant_id(tenant("DEFAULT"))
            .token_scopes(vec!["controller:poll".to_owned()])
            .build();

        assert_eq!(ctx.subject_id(), Some("box1"));
        assert_eq!(ctx.subject_type(), Some("controller"));
        assert_eq!(ctx.tenant_id().map(TenantId::as_str), Some("DEFAULT"));
        assert_eq!(ctx.token_scopes(), &["controller:poll"]);
        assert_eq!(ctx.privilege(), Privilege::Tenant);
    }

    #[test]
    fn test_security_context_anonymous() {
        let ctx = SecurityContext::anonymous();

        assert!(ctx.subject_id().is_none());
        assert!(ctx.tenant_id().is_none());
        assert!(ctx.token_scopes().is_empty());
        assert!(!ctx.is_system());
    }

    #[test]
    fn anonymous_context_may_not_access_any_tenant() {
        let ctx = SecurityContext::anonymous();
        assert!(!ctx.may_access_tenant(&tenant("DEFAULT")));
    }

    #[test]
    fn tenant_context_may_access_only_own_tenant() {
        let ctx = SecurityContext::builder()
            .tenant_id(tenant("acme"))
            .build();

        assert!(ctx.may_access_tenant(&tenant("acme")));
        assert!(!ctx.may_access_tenant(&tenant("globex")));
    }

    #[test]
    fn system_context_may_access_any_tenant() {
        let ctx = SecurityContext::system(tenant("acme"));

        assert!(ctx.is_system());
        assert_eq!(ctx.subject_id(), Some(SYSTEM_SUBJECT_ID));
        assert!(ctx.may_access_tenant(&tenant("globex")));
    }

    #[test]
    fn test_security_context_privilege_not_serialized() {
        let original = SecurityContext::system(tenant("acme"));

        let serialized = serde_json::to_string(&original).unwrap();
        assert!(!serialized.contains("privilege"));

        let deserialized: SecurityContext = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.subject_id(), original.subject_id());
        assert_eq!(deserialized.tenant_id(), original.tenant_id());
        assert_eq!(deserialized.privilege(), Privilege::Tenant);
    }

    #[test]
    fn test_security_context_clone() {
        let ctx1 = SecurityContext::builder()
            .subject_id("box1")
            .tenant_id(tenant("DEFAULT"))
            .token_scopes(vec!["*".to_owned()])
            .build();

        let ctx2 = ctx1.clone();

        assert_eq!(ctx2.subject_id(), ctx1.subject_id());
        assert_eq!(ctx2.tenant_id(), ctx1.tenant_id());
        assert_eq!(ctx2.token_scopes(), ctx1.token_scopes());
    }
}
