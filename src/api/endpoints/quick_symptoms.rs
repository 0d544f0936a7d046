//! Quick symptom extraction endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::analysis::{self, engine};
use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ComplaintRequest};
use crate::models::Language;

#[derive(Serialize)]
pub struct QuickSymptomsResponse {
    pub success: bool,
    pub symptoms: Vec<String>,
    pub language: Language,
    pub cached: bool,
}

/// `POST /quick-symptoms`: fast symptom listing for triage screens.
pub async fn scan(
    State(ctx): State<ApiContext>,
    Json(request): Json<ComplaintRequest>,
) -> Result<Json<QuickSymptomsResponse>, ApiError> {
    let text = request.text()?;
    let language = analysis::resolve(text, request.hint())?;
    let scan = engine::quick_symptoms(&ctx.corpus, text, language);

    Ok(Json(QuickSymptomsResponse {
        success: true,
        symptoms: scan.symptoms,
        language: scan.language,
        cached: scan.cached,
    }))
}
