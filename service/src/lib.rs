//! Shared types and HTTP API for the Streamables solve service.

use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use streamables_solver::Solver;
use tracing::{debug, info};

/// Body returned for every request the service refuses to route.
pub const METHOD_NOT_FOUND: &str = "<METHOD_NOT_FOUND>";

/// `detail` of the 405 body for unsupported methods on `/` and `/health`.
pub const METHOD_NOT_ALLOWED_DETAIL: &str = "Method Not Allowed";

/// Body of `GET /`.
pub const ROOT_TEXT: &str = "Nothing here to see";

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SolveResponse {
    pub signature: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DetailResponse {
    pub detail: String,
}

async fn root_handler() -> &'static str {
    ROOT_TEXT
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok".to_string() })
}

async fn solve_handler(
    State(solver): State<Arc<Solver>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Exact match: parameters such as `; charset=utf-8` are refused.
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    if content_type != Some(JSON_CONTENT_TYPE) {
        debug!(content_type = ?content_type, "Rejected solve request");
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(ErrorResponse { error: METHOD_NOT_FOUND.to_string() }),
        )
            .into_response();
    }

    let signature = solver.solve(&body);
    info!(payload_len = body.len(), "Solve request served");
    Json(SolveResponse { signature }).into_response()
}

async fn method_not_found() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_FOUND)
}

async fn method_not_allowed() -> (StatusCode, Json<DetailResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(DetailResponse { detail: METHOD_NOT_ALLOWED_DETAIL.to_string() }),
    )
}

/// Build the HTTP API router around the given solver.
///
/// Only `GET /`, `GET /health` and `POST /solve` are served. Other methods
/// on `/` and `/health` get a JSON 405 ([`DetailResponse`]); other methods on
/// `/solve` and unknown paths get a plain 405 with [`METHOD_NOT_FOUND`].
pub fn build_router(solver: Arc<Solver>) -> Router {
    Router::new()
        .route("/", get(root_handler).fallback(method_not_allowed))
        .route("/health", get(health_handler).fallback(method_not_allowed))
        .route("/solve", post(solve_handler).fallback(method_not_found))
        .fallback(method_not_found)
        .with_state(solver)
}
