//! Full complaint analysis endpoint.

use axum::extract::State;
use axum::Json;

use crate::analysis::{self, engine};
use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ComplaintRequest};
use crate::models::AnalysisResponse;

/// `POST /analyze`: match one complaint against the corpus and return the
/// annotated case, or a synthesized fallback when nothing scores high enough.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    Json(request): Json<ComplaintRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let text = request.text()?;
    let language = analysis::resolve(text, request.hint())?;
    Ok(Json(engine::analyze(&ctx.corpus, text, language)))
}
