use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    routing::post,
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

pub mod contacts;
pub mod lookups;
pub mod pets;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(
    get, path = "/", tag = "documentacao",
    responses((status = 302, description = "Redirect to the Swagger UI"))
)]
pub async fn home() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/docs")])
}

#[utoipa::path(
    get, path = "/health", tag = "documentacao",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: API routes plus the documentation UI
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route("/pet", post(pets::create).get(pets::get).delete(pets::delete))
        .route("/pets", get(pets::list))
        .route("/contato", post(contacts::create))
        .route("/tipos-animal", get(lookups::animal_types))
        .route("/tipos-contato", get(lookups::contact_types))
        .with_state(state);

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()))
        .merge(api)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
