//! Service index endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::config;
use crate::models::Language;

#[derive(Serialize)]
pub struct IndexResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub languages: Vec<&'static str>,
    pub total_cached_responses: usize,
    pub endpoints: EndpointGuide,
    pub status: &'static str,
}

/// Route-to-usage map shown to API explorers; keys are the literal paths.
#[derive(Serialize)]
pub struct EndpointGuide {
    #[serde(rename = "/health")]
    pub health: &'static str,
    #[serde(rename = "/analyze")]
    pub analyze: &'static str,
    #[serde(rename = "/quick-symptoms")]
    pub quick_symptoms: &'static str,
    #[serde(rename = "/analyze-for-doctors")]
    pub analyze_for_doctors: &'static str,
}

/// `GET /`: service descriptor for API discovery.
pub async fn index(State(ctx): State<ApiContext>) -> Result<Json<IndexResponse>, ApiError> {
    Ok(Json(IndexResponse {
        name: config::APP_NAME,
        version: config::APP_VERSION,
        description: config::APP_DESCRIPTION,
        languages: Language::ALL.iter().map(Language::display_name).collect(),
        total_cached_responses: ctx.corpus.total_cases(),
        endpoints: EndpointGuide {
            health: "Health check",
            analyze: "Full medical analysis (POST)",
            quick_symptoms: "Quick symptom extraction (POST)",
            analyze_for_doctors: "Analysis formatted for doctor suggestion (POST)",
        },
        status: "online",
    }))
}
