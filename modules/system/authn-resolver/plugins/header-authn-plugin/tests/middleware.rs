#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the header authentication middleware
//!
//! These tests verify that:
//! 1. Requests with a trusted certificate header reach the handler with a
//!    controller `SecurityContext`
//! 2. Untrusted, missing and disabled cases answer 401 with a problem body
//! 3. Paths without a tenant segment answer 400
//! 4. Resolver outages answer 503 and resolver faults answer 500

use std::sync::Arc;

use async_trait::async_trait;
use authn_resolver_sdk::{
    AuthNResolverError, AuthenticationResult, HeaderAuthentication, PreAuthNResolverClient,
    PreAuthenticatedToken,
};
use axum::{
    Extension, Json, Router,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::from_fn_with_state,
    routing::get,
};
use header_authn_plugin::{HeaderAuthNPluginConfig, HeaderAuthenticationFilter, header_authn_middleware};
use http_body_util::BodyExt;
use modkit_security::{SecurityContext, TenantId};
use serde_json::{Value, json};
use tenant_config::{TenantConfigLocalClient, TenantConfigurationStore};
use tenant_config_sdk::keys::{
    AUTHENTICATION_MODE_HEADER_AUTHORITY_NAME, AUTHENTICATION_MODE_HEADER_ENABLED,
};
use tower::ServiceExt;

fn seed(store: &TenantConfigurationStore, tenant: &str, enabled: bool, authority: &str) {
    let tenant = TenantId::new(tenant).unwrap();
    let ctx = SecurityContext::builder().tenant_id(tenant.clone()).build();
    store
        .set(&ctx, &tenant, AUTHENTICATION_MODE_HEADER_ENABLED.name, json!(enabled))
        .unwrap();
    store
        .set(
            &ctx,
            &tenant,
            AUTHENTICATION_MODE_HEADER_AUTHORITY_NAME.name,
            json!(authority),
        )
        .unwrap();
}

fn app() -> Router {
    let store = Arc::new(TenantConfigurationStore::new());
    seed(&store, "acme", true, "hash-acme-1;hash-acme-2");
    seed(&store, "globex", false, "hash-globex");

    let filter = HeaderAuthenticationFilter::new(
        &HeaderAuthNPluginConfig::default(),
        Arc::new(TenantConfigLocalClient::new(store)),
    )
    .unwrap();
    let authn: Arc<dyn PreAuthNResolverClient> = Arc::new(filter);

    Router::new()
        .route("/{tenant}/controller/v1/{controller_id}", get(whoami))
        .layer(from_fn_with_state(authn, header_authn_middleware))
}

async fn whoami(
    Extension(ctx): Extension<SecurityContext>,
    Extension(principal): Extension<HeaderAuthentication>,
) -> Json<Value> {
    Json(json!({
        "subject_id": ctx.subject_id(),
        "tenant": ctx.tenant_id().map(TenantId::as_str),
        "issuer_hash": principal.issuer_hash(),
    }))
}

fn request(path: &str, headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder().uri(path);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn trusted_certificate_reaches_handler() {
    let response = app()
        .oneshot(request(
            "/acme/controller/v1/ctrl-1",
            &[
                ("ca-cn", "ctrl-1"),
                ("X-Ssl-Issuer-Hash-1", "hash-unknown"),
                ("X-Ssl-Issuer-Hash-2", "hash-acme-2"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["subject_id"], "ctrl-1");
    assert_eq!(body["tenant"], "acme");
    assert_eq!(body["issuer_hash"], "hash-acme-2");
}

#[tokio::test]
async fn untrusted_certificate_is_unauthorized() {
    let response = app()
        .oneshot(request(
            "/acme/controller/v1/ctrl-1",
            &[("ca-cn", "ctrl-1"), ("X-Ssl-Issuer-Hash-1", "hash-globex")],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/problem+json"
    );
    let body = json_body(response).await;
    assert_eq!(body["status"], 401);
    assert_eq!(body["title"], "Unauthorized");
}

#[tokio::test]
async fn missing_headers_are_unauthorized() {
    let response = app()
        .oneshot(request("/acme/controller/v1/ctrl-1", &[]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn disabled_tenant_is_unauthorized() {
    let response = app()
        .oneshot(request(
            "/globex/controller/v1/ctrl-1",
            &[("ca-cn", "ctrl-1"), ("X-Ssl-Issuer-Hash-1", "hash-globex")],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn trust_lists_do_not_cross_tenants() {
    let response = app()
        .oneshot(request(
            "/globex/controller/v1/ctrl-1",
            &[("ca-cn", "ctrl-1"), ("X-Ssl-Issuer-Hash-1", "hash-acme-1")],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_tenant_segment_is_bad_request() {
    let app = Router::new()
        .fallback(|| async { StatusCode::OK })
        .layer(from_fn_with_state(
            {
                let store = Arc::new(TenantConfigurationStore::new());
                let filter = HeaderAuthenticationFilter::new(
                    &HeaderAuthNPluginConfig::default(),
                    Arc::new(TenantConfigLocalClient::new(store)),
                )
                .unwrap();
                Arc::new(filter) as Arc<dyn PreAuthNResolverClient>
            },
            header_authn_middleware,
        ));

    let response = app.oneshot(request("/", &[])).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

struct FailingResolver(fn() -> AuthNResolverError);

#[async_trait]
impl PreAuthNResolverClient for FailingResolver {
    async fn authenticate(
        &self,
        _token: &PreAuthenticatedToken,
    ) -> Result<AuthenticationResult, AuthNResolverError> {
        Err((self.0)())
    }
}

fn failing_app(error: fn() -> AuthNResolverError) -> Router {
    let authn: Arc<dyn PreAuthNResolverClient> = Arc::new(FailingResolver(error));
    Router::new()
        .route("/{tenant}/controller/v1/{controller_id}", get(whoami))
        .layer(from_fn_with_state(authn, header_authn_middleware))
}

#[tokio::test]
async fn unavailable_resolver_is_service_unavailable() {
    let response = failing_app(|| AuthNResolverError::ServiceUnavailable("starting".to_owned()))
        .oneshot(request("/acme/controller/v1/ctrl-1", &[("ca-cn", "ctrl-1")]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/problem+json"
    );
    let body = json_body(response).await;
    assert_eq!(body["status"], 503);
    assert_eq!(body["detail"], "Authentication service unavailable");
}

#[tokio::test]
async fn resolver_fault_is_internal_error_without_leaking_detail() {
    let response = failing_app(|| AuthNResolverError::Internal("store exploded".to_owned()))
        .oneshot(request("/acme/controller/v1/ctrl-1", &[("ca-cn", "ctrl-1")]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["status"], 500);
    assert_eq!(body["title"], "Internal Server Error");
    assert!(!body.to_string().contains("store exploded"));
}
