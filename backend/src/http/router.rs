//! Router configuration for the HTTP API.
//!
//! This module sets up all routes and middleware (JSON content type, CORS,
//! tracing) and creates the axum router ready for serving.

use axum::{
    http::{header, HeaderValue},
    middleware,
    response::Response,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/students",
            get(handlers::list_students).post(handlers::create_student),
        )
        .route("/students/subject", get(handlers::list_students_by_subject))
        .route("/student/{id}", get(handlers::get_student))
        .layer(middleware::map_response(json_content_type))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Every response is declared JSON, including bare status-code responses.
async fn json_content_type(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
