//! Doctor-facing analysis endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::analysis::{self, engine};
use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ComplaintRequest};
use crate::models::{MatchType, Severity};

/// Restructured view of an analysis for the specialist-recommendation
/// consumer: clinical notes first, cultural fields grouped.
#[derive(Serialize)]
pub struct DoctorResponse {
    pub success: bool,
    pub enhanced_notes: String,
    pub original: String,
    pub translation: String,
    pub keywords: Vec<String>,
    pub severity: Severity,
    pub recommended_specialties: Vec<String>,
    pub cultural_insights: CulturalInsights,
    pub match_type: MatchType,
    pub similarity_score: u32,
    pub cached: bool,
}

#[derive(Serialize)]
pub struct CulturalInsights {
    pub context: String,
    pub nigerian_health_notes: String,
}

/// `POST /analyze-for-doctors`: the same analysis as `/analyze`, reshaped.
pub async fn brief(
    State(ctx): State<ApiContext>,
    Json(request): Json<ComplaintRequest>,
) -> Result<Json<DoctorResponse>, ApiError> {
    let text = request.text()?;
    let language = analysis::resolve(text, request.hint())?;
    let result = engine::analyze(&ctx.corpus, text, language);

    Ok(Json(DoctorResponse {
        success: result.success,
        enhanced_notes: result.enhanced_notes,
        original: text.to_string(),
        translation: result.translation,
        keywords: result.medical_keywords,
        severity: result.severity,
        recommended_specialties: result.recommended_specialties,
        cultural_insights: CulturalInsights {
            context: result.cultural_context,
            nigerian_health_notes: result.nigerian_context,
        },
        match_type: result.match_type,
        similarity_score: result.similarity_score,
        cached: result.cached,
    }))
}
