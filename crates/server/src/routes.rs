pub mod fornecedor;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::{observability, openapi, state::ServerState};

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: supplier resource, health, metrics and,
/// in development, the OpenAPI document.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let mut router: Router<ServerState> = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(observability::metrics))
        .route("/fornecedor", get(fornecedor::list).post(fornecedor::create))
        .route(
            "/fornecedor/:id",
            get(fornecedor::get).put(fornecedor::update).delete(fornecedor::delete),
        );

    if state.environment.is_development() {
        router = router.route("/api-docs/openapi.json", get(openapi::openapi_json));
    }

    router
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
