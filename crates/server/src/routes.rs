use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::auth;
use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod companies;
pub mod services;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Reject ids that cannot name a stored row.
pub(crate) fn positive_id(id: i64, what: &str) -> Result<i64, JsonApiError> {
    if id <= 0 {
        return Err(JsonApiError::validation(format!("{what} must be a positive integer")));
    }
    Ok(id)
}

/// Build the full application router: public reads, authenticated writes and docs
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api/v1/companies", get(companies::list))
        .route("/api/v1/companies/:id", get(companies::get));

    let protected = Router::new()
        .route("/api/v1/companies", post(companies::create))
        .route("/api/v1/companies/:id", put(companies::update).delete(companies::delete))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_actor));

    let catalog = Router::new()
        .route("/api/v1/companies/:id/services", get(services::list))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::optional_actor));

    public
        .merge(protected)
        .merge(catalog)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
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
