//! Axum middleware authenticating controller requests.
//!
//! Controller routes are tenant-prefixed: `/{tenant}/controller/v1/...`. The
//! first path segment names the tenant, the remainder is passed on as the
//! token's opaque resource.

use std::sync::Arc;

use authn_resolver_sdk::{AuthNResolverError, PreAuthNResolverClient, PreAuthenticatedToken};
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use modkit_security::TenantId;

use super::problem::Problem;

/// Tenant and remaining path of a tenant-prefixed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerPath {
    pub tenant: TenantId,
    pub resource: String,
}

/// Split `/{tenant}/{resource}`; `None` when the tenant segment is missing or
/// not a valid tenant id.
#[must_use]
pub fn split_tenant_path(path: &str) -> Option<ControllerPath> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let (tenant, resource) = path.split_once('/').unwrap_or((path, ""));
    let tenant = TenantId::new(tenant).ok()?;
    Some(ControllerPath {
        tenant,
        resource: resource.to_owned(),
    })
}

/// Authenticate the request from its certificate headers.
///
/// On success the controller's `SecurityContext` and `HeaderAuthentication`
/// are inserted into request extensions.
pub async fn header_authn_middleware(
    State(authn): State<Arc<dyn PreAuthNResolverClient>>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(ControllerPath { tenant, resource }) = split_tenant_path(req.uri().path()) else {
        return Problem::new(
            StatusCode::BAD_REQUEST,
            "Bad Request",
            "Request path does not name a tenant",
        )
        .into_response();
    };

    let token = PreAuthenticatedToken::from_header_map(tenant, req.headers()).with_resource(resource);

    match authn.authenticate(&token).await {
        Ok(result) => {
            req.extensions_mut().insert(result.security_context);
            req.extensions_mut().insert(result.principal);
            next.run(req).await
        }
        Err(err) => authn_error_to_response(&err),
    }
}

fn authn_error_to_response(err: &AuthNResolverError) -> Response {
    let (status, title, detail) = match err {
        AuthNResolverError::Unauthorized(msg) => {
            tracing::debug!("AuthN rejected: {msg}");
            (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "Authentication failed",
            )
        }
        AuthNResolverError::ServiceUnavailable(msg) => {
            tracing::error!("AuthN service unavailable: {msg}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Service Unavailable",
                "Authentication service unavailable",
            )
        }
        AuthNResolverError::Internal(msg) => {
            tracing::error!("AuthN internal error: {msg}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "Internal authentication error",
            )
        }
    };
    Problem::new(status, title, detail).into_response()
}
