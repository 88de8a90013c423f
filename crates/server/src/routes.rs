use axum::{
    http::{header, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, Level};
use utoipa::OpenApi;

use common::{metrics, types::{Health, Message}};

use crate::admin;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod catalog;
pub mod contact;
pub mod status;

#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, description = "Process is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(get, path = "/api/", tag = "health",
    responses((status = 200, description = "Readiness banner", body = crate::openapi::MessageDoc)))]
pub async fn root() -> Json<Message> {
    Json(Message::new("Exhibilo API - Ready to serve"))
}

/// Prometheus text exposition of the catalog counters.
pub async fn metrics_text() -> impl IntoResponse {
    match metrics::gather_text() {
        Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body).into_response(),
        Err(e) => {
            error!(category = "metrics", error = %e, "failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: public catalog routes plus the gated seed route.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_text))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/api/", get(root))
        .route("/api/contact", post(contact::submit_contact))
        .route("/api/contacts", get(contact::list_contacts))
        .route("/api/projects", get(catalog::list_projects))
        .route("/api/services", get(catalog::list_services))
        .route("/api/testimonials", get(catalog::list_testimonials))
        .route("/api/company", get(catalog::get_company_info))
        .route("/api/status", post(status::create_status_check).get(status::list_status_checks));

    let admin_routes = Router::new()
        .route("/api/seed-data", post(catalog::seed_data))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin::require_admin_key));

    public
        .merge(admin_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
