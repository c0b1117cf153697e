//! Scoped elevated execution.
//!
//! Some backend-internal reads happen before any tenant-authorized caller
//! exists (for example, reading a tenant's authentication settings while that
//! tenant's device is still authenticating). [`SystemSecurityContext`] runs
//! such a read with a system-privileged [`SecurityContext`] that lives only for
//! the duration of a closure.
//!
//! ```ignore
//! let system = SystemSecurityContext::new();
//! let value = system
//!     .run_as_system(&tenant, |ctx| async move {
//!         tenant_config.get_configuration_value(&ctx, &tenant, key).await
//!     })
//!     .await;
//! ```

use std::future::Future;

use crate::context::SecurityContext;
use crate::tenant::TenantId;

/// Hands out system-privileged contexts scoped to a closure.
///
/// The caller's own context is never touched: the elevated context is a
/// separate value created for the closure and dropped when its future
/// completes, fails, panics or is cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSecurityContext;

impl SystemSecurityContext {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Run `f` with a system-privileged context bound to `tenant`.
    ///
    /// The closure owns the elevated context; it must not hand it back through
    /// `T`.
    pub async fn run_as_system<F, Fut, T>(&self, tenant: &TenantId, f: F) -> T
    where
        F: FnOnce(SecurityContext) -> Fut,
        Fut: Future<Output = T>,
    {
        let _scope = SystemScope::enter(tenant);
        f(SecurityContext::system(tenant.clone())).await
    }
}

/// Marks the lifetime of one elevated call; exit is logged on every path.
struct SystemScope<'a> {
    tenant: &'a TenantId,
}

impl<'a> SystemScope<'a> {
    fn enter(tenant: &'a TenantId) -> Self {
        tracing::trace!(tenant = %tenant, "entered system scope");
        Self { tenant }
    }
}

impl Drop for SystemScope<'_> {
    fn drop(&mut self) {
        tracing::trace!(tenant = %self.tenant, "left system scope");
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::time::Duration;

    use tracing_test::traced_test;

    use super::*;
    use crate::context::Privilege;

    fn tenant(id: &str) -> TenantId {
        TenantId::new(id).unwrap()
    }

    #[tokio::test]
    async fn closure_receives_elevated_context_for_tenant() {
        let system = SystemSecurityContext::new();
        let acme = tenant("acme");

        let (privilege, ctx_tenant) = system
            .run_as_system(&acme, |ctx| async move {
                (ctx.privilege(), ctx.tenant_id().cloned())
            })
            .await;

        assert_eq!(privilege, Privilege::System);
        assert_eq!(ctx_tenant, Some(acme));
    }

    #[tokio::test]
    async fn caller_context_is_unchanged() {
        let system = SystemSecurityContext::new();
        let caller = SecurityContext::anonymous();

        let elevated_inside = system
            .run_as_system(&tenant("acme"), |ctx| async move { ctx.is_system() })
            .await;

        assert!(elevated_inside);
        assert!(!caller.is_system());
        assert!(caller.tenant_id().is_none());
    }

    #[tokio::test]
    async fn error_results_pass_through() {
        let system = SystemSecurityContext::new();

        let result: Result<(), &str> = system
            .run_as_system(&tenant("acme"), |_ctx| async { Err("store unreachable") })
            .await;

        assert_eq!(result, Err("store unreachable"));
    }

    #[tokio::test]
    #[traced_test]
    async fn scope_exit_is_logged_on_completion() {
        let system = SystemSecurityContext::new();

        system
            .run_as_system(&tenant("acme"), |_ctx| async {})
            .await;

        assert!(logs_contain("entered system scope"));
        assert!(logs_contain("left system scope"));
    }

    #[tokio::test]
    #[traced_test]
    async fn scope_exit_is_logged_on_cancellation() {
        let system = SystemSecurityContext::new();
        let acme = tenant("acme");

        let outcome = tokio::time::timeout(
            Duration::from_millis(10),
            system.run_as_system(&acme, |_ctx| async {
                tokio::time::sleep(Duration::from_secs(10)).await;
            }),
        )
        .await;

        assert!(outcome.is_err());
        assert!(logs_contain("left system scope"));
    }
}
