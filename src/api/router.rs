//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Every response is JSON, including the unknown-route fallback; CORS is
//! permissive so browser clients can call from any origin.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::error::ErrorDetail;
use crate::api::types::ApiContext;
use crate::corpus::CorpusStore;

/// Routes advertised by the 404 fallback.
const AVAILABLE_ENDPOINTS: [&str; 5] = [
    "/",
    "/health",
    "/analyze",
    "/quick-symptoms",
    "/analyze-for-doctors",
];

/// Build the API router over a loaded (or empty, degraded) corpus.
pub fn api_router(corpus: Arc<CorpusStore>) -> Router {
    let ctx = ApiContext::new(corpus);

    Router::new()
        .route("/", get(endpoints::home::index))
        .route("/health", get(endpoints::health::check))
        .route("/analyze", post(endpoints::analyze::analyze))
        .route("/quick-symptoms", post(endpoints::quick_symptoms::scan))
        .route("/analyze-for-doctors", post(endpoints::doctors::brief))
        .fallback(not_found)
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}

#[derive(Serialize)]
struct NotFoundBody {
    success: bool,
    error: ErrorDetail,
    available_endpoints: [&'static str; 5],
}

async fn not_found() -> (StatusCode, Json<NotFoundBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            success: false,
            error: ErrorDetail {
                code: "NOT_FOUND",
                message: "Endpoint not found".to_string(),
            },
            available_endpoints: AVAILABLE_ENDPOINTS,
        }),
    )
}
