use serde::Serialize;

use super::case::AnnotatedCase;
use super::enums::{Language, MatchType, Severity};

/// Outcome of a similarity search. Borrows the matched case from the store;
/// never serialized or persisted.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    pub case: &'a AnnotatedCase,
    pub score: u32,
    pub match_kind: MatchType,
}

/// Uniform wire shape for the analyze family, whether the source is a cache
/// hit or a synthesized fallback. `matched_input` only appears on cache hits.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub input: String,
    pub language: Language,
    pub translation: String,
    pub cultural_context: String,
    pub medical_keywords: Vec<String>,
    pub severity: Severity,
    pub nigerian_context: String,
    pub recommended_specialties: Vec<String>,
    pub enhanced_notes: String,
    pub match_type: MatchType,
    pub similarity_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_input: Option<String>,
    pub success: bool,
    pub cached: bool,
}
