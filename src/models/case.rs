use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{Language, Severity};

/// One pre-generated corpus record, tagged with the partition it came from.
///
/// `input` and `success` are mandatory in the stored record; every annotation
/// field may be absent and defaults to empty. A record that cannot be decoded
/// into this shape is quarantined by the loader instead of served.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedCase {
    pub language: Language,
    pub input: String,
    pub success: bool,
    pub translation: String,
    pub medical_keywords: Vec<String>,
    pub cultural_context: String,
    pub nigerian_context: String,
    pub severity: Severity,
    pub recommended_specialties: Vec<String>,
    pub enhanced_notes: String,
}

/// Decode target for a stored record before the partition language is known.
#[derive(Debug, Deserialize)]
struct RawCase {
    input: String,
    success: bool,
    #[serde(default)]
    translation: String,
    #[serde(default)]
    medical_keywords: Vec<String>,
    #[serde(default)]
    cultural_context: String,
    #[serde(default)]
    nigerian_context: String,
    #[serde(default)]
    severity: Severity,
    #[serde(default)]
    recommended_specialties: Vec<String>,
    #[serde(default)]
    enhanced_notes: String,
}

fn decode(record: &Value) -> Option<RawCase> {
    let raw: RawCase = serde_json::from_value(record.clone()).ok()?;
    if raw.input.trim().is_empty() {
        return None;
    }
    Some(raw)
}

impl AnnotatedCase {
    /// Decodes one stored record. The partition key is authoritative for the
    /// language; any `language` field embedded in the record is ignored.
    /// Returns `None` for malformed records (missing/blank `input`, missing
    /// `success`, wrong field types, unknown `severity`).
    pub fn from_record(record: &Value, language: Language) -> Option<Self> {
        let raw = decode(record)?;
        Some(Self {
            language,
            input: raw.input,
            success: raw.success,
            translation: raw.translation,
            medical_keywords: raw.medical_keywords,
            cultural_context: raw.cultural_context,
            nigerian_context: raw.nigerian_context,
            severity: raw.severity,
            recommended_specialties: raw.recommended_specialties,
            enhanced_notes: raw.enhanced_notes,
        })
    }
}

/// Integrity predicate shared by the serving loader and the offline cleaner.
pub fn is_well_formed(record: &Value) -> bool {
    decode(record).is_some()
}

/// Provenance sidecar loaded from `metadata.json`. Everything is optional;
/// a missing or unreadable file degrades to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorpusMetadata {
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub total_responses: Option<u64>,
}
