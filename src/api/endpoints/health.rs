//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::config;
use crate::models::Language;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: &'static str,
    pub mode: &'static str,
    pub cache_loaded: bool,
    pub total_cached: usize,
    pub languages: Vec<&'static str>,
    pub generated_at: String,
    pub timestamp: String,
}

/// `GET /health`: liveness plus corpus state. An empty store reports
/// `degraded` so deployment checks catch a missing cache artifact.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let cache_loaded = ctx.corpus.is_loaded();

    Ok(Json(HealthResponse {
        status: if cache_loaded { "healthy" } else { "degraded" },
        model: config::MODEL_NAME,
        mode: config::SERVE_MODE,
        cache_loaded,
        total_cached: ctx.corpus.total_cases(),
        languages: Language::ALL.iter().map(Language::as_str).collect(),
        generated_at: ctx.corpus.generated_at().to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
