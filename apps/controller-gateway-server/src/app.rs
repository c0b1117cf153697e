//! HTTP routes.

use std::sync::Arc;

use anyhow::Context;
use authn_resolver_sdk::{HeaderAuthentication, PreAuthNResolverClient};
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use header_authn_plugin::api::Problem;
use header_authn_plugin::{HeaderAuthenticationFilter, header_authn_middleware};
use modkit_security::{SecurityContext, TenantId};
use serde::Serialize;
use tenant_config::{TenantConfigLocalClient, TenantConfigurationStore};
use tenant_config_sdk::TenantConfigurationClient;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

/// Authenticated controller as seen by the gateway.
#[derive(Debug, Serialize)]
pub struct ControllerDto {
    pub controller_id: String,
    pub tenant: Option<String>,
    pub issuer_hash: String,
}

/// Build the application router.
///
/// `/health` is public; controller routes require header authentication.
///
/// # Errors
///
/// Returns an error if the tenant seed or header authentication settings are
/// invalid.
pub fn build_router(config: &AppConfig) -> anyhow::Result<Router> {
    let store = TenantConfigurationStore::from_config(&config.tenant_config)
        .context("invalid tenant_config configuration")?;
    let tenant_config: Arc<dyn TenantConfigurationClient> =
        Arc::new(TenantConfigLocalClient::new(Arc::new(store)));

    let filter = HeaderAuthenticationFilter::new(&config.header_authn, tenant_config)
        .context("invalid header_authn configuration")?;
    let authn: Arc<dyn PreAuthNResolverClient> = Arc::new(filter);

    let controllers = Router::new()
        .route("/{tenant}/controller/v1/{controller_id}", get(get_controller))
        .route_layer(from_fn_with_state(authn, header_authn_middleware));

    Ok(Router::new()
        .route("/health", get(health))
        .merge(controllers)
        .layer(TraceLayer::new_for_http()))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn get_controller(
    Path((_tenant, controller_id)): Path<(String, String)>,
    Extension(ctx): Extension<SecurityContext>,
    Extension(principal): Extension<HeaderAuthentication>,
) -> Response {
    // The path's controller must be the certificate's subject.
    if principal.common_name() != controller_id {
        tracing::debug!(
            principal = %principal,
            controller_id = %controller_id.escape_debug(),
            "Controller id does not match certificate"
        );
        return Problem::new(
            StatusCode::FORBIDDEN,
            "Forbidden",
            "Controller id does not match the authenticated certificate",
        )
        .into_response();
    }

    Json(ControllerDto {
        controller_id,
        tenant: ctx.tenant_id().map(TenantId::to_string),
        issuer_hash: principal.issuer_hash().to_owned(),
    })
    .into_response()
}
