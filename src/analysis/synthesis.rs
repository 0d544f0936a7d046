//! Builds the uniform `AnalysisResponse`, from a cache hit or from scratch.
//!
//! Every response leaving this module has a non-empty `translation`, at least
//! one entry in `medical_keywords`, and a non-empty `recommended_specialties`
//! list. Corpus records are allowed to lack those three fields, so the
//! cache-hit path overlays them from the fallback templates when needed;
//! genuine cached values are never replaced.

use crate::analysis::keywords::extract_keywords;
use crate::models::{AnalysisResponse, Language, MatchResult, MatchType, Severity};

const DEFAULT_SPECIALTIES: [&str; 2] = ["General Practitioner", "Internal Medicine"];
const KEYWORD_PLACEHOLDER: &str = "symptom assessment needed";

/// Lexicon terms that read as a fever or pain presentation. Their presence
/// switches the Nigerian-context template to endemic-disease triage wording.
const FEVER_PAIN_TERMS: &[&str] = &[
    "iba", "ịba", "ọkụ", "ọkụọkụ", "zazzaɓi", "fever", "malaria", "malariya",
    "pain", "ache", "sore", "mgbu", "oké mgbu", "ciwo", "ciwon ciki", "ọgbẹ",
];

/// One entry point for both paths so callers cannot skip the field invariant.
pub fn synthesize(
    text: &str,
    language: Language,
    result: Option<&MatchResult<'_>>,
) -> AnalysisResponse {
    match result {
        Some(matched) => from_match(text, language, matched),
        None => fallback(text, language),
    }
}

/// Cache-hit path: the matched case's fields verbatim, plus match metadata.
pub fn from_match(text: &str, language: Language, result: &MatchResult<'_>) -> AnalysisResponse {
    let case = result.case;
    let mut response = AnalysisResponse {
        input: case.input.clone(),
        language: case.language,
        translation: case.translation.clone(),
        cultural_context: case.cultural_context.clone(),
        medical_keywords: case.medical_keywords.clone(),
        severity: case.severity,
        nigerian_context: case.nigerian_context.clone(),
        recommended_specialties: case.recommended_specialties.clone(),
        enhanced_notes: case.enhanced_notes.clone(),
        match_type: result.match_kind,
        similarity_score: result.score,
        matched_input: Some(case.input.clone()),
        success: case.success,
        cached: true,
    };
    patch_missing(&mut response, text, language);
    response
}

/// Fallback path: every field comes from templates parameterized by the
/// caller's text, the resolved language, and the extracted keywords.
pub fn fallback(text: &str, language: Language) -> AnalysisResponse {
    let keywords = extract_keywords(text);
    let display = language.display_name();

    let translation = if keywords.is_empty() {
        format!("Medical complaint detected in {display}: general malaise")
    } else {
        format!(
            "Medical complaint detected in {display}: mentions {}",
            keywords.join(", ")
        )
    };

    let cultural_context =
        format!("Patient is communicating in {display}, a major Nigerian language.");

    let nigerian_context = if keywords
        .iter()
        .any(|k| FEVER_PAIN_TERMS.contains(&k.as_str()))
    {
        "Fever and pain presentations in Nigerian healthcare warrant screening for \
         endemic causes such as malaria and typhoid. Requires professional assessment."
            .to_string()
    } else {
        "Common medical presentation in Nigerian healthcare. Requires professional assessment."
            .to_string()
    };

    let keyword_line = if keywords.is_empty() {
        "None specific".to_string()
    } else {
        keywords.join(", ")
    };
    let enhanced_notes = format!(
        "Patient complaint: {text}\n\n\
         Translation: {translation}\n\
         Cultural context: {cultural_context}\n\
         Language: {display}\n\
         Detected keywords: {keyword_line}\n\n\
         Recommendation: Professional medical assessment needed."
    );

    let medical_keywords = if keywords.is_empty() {
        vec![KEYWORD_PLACEHOLDER.to_string()]
    } else {
        keywords
    };

    AnalysisResponse {
        input: text.to_string(),
        language,
        translation,
        cultural_context,
        medical_keywords,
        severity: Severity::Moderate,
        nigerian_context,
        recommended_specialties: DEFAULT_SPECIALTIES.iter().map(|s| s.to_string()).collect(),
        enhanced_notes,
        match_type: MatchType::Fallback,
        similarity_score: 0,
        matched_input: None,
        success: true,
        cached: false,
    }
}

/// Overlays the three fields a corpus record may lack. Anything present in
/// the cached record stays untouched.
fn patch_missing(response: &mut AnalysisResponse, text: &str, language: Language) {
    if !response.translation.is_empty()
        && !response.medical_keywords.is_empty()
        && !response.recommended_specialties.is_empty()
    {
        return;
    }
    let patch = fallback(text, language);
    if response.translation.is_empty() {
        response.translation = patch.translation;
    }
    if response.medical_keywords.is_empty() {
        response.medical_keywords = patch.medical_keywords;
    }
    if response.recommended_specialties.is_empty() {
        response.recommended_specialties = patch.recommended_specialties;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnnotatedCase;

    fn full_case() -> AnnotatedCase {
        AnnotatedCase {
            language: Language::Yoruba,
            input: "mo ni iba ati otutu".into(),
            success: true,
            translation: "I have fever and chills".into(),
            medical_keywords: vec!["iba".into(), "otutu".into()],
            cultural_context: "Yoruba speaker from the southwest".into(),
            nigerian_context: "Endemic malaria zone".into(),
            severity: Severity::Severe,
            recommended_specialties: vec!["Infectious Disease".into()],
            enhanced_notes: "Prior notes".into(),
        }
    }

    fn sparse_case() -> AnnotatedCase {
        AnnotatedCase {
            language: Language::English,
            input: "fever and headache".into(),
            success: true,
            translation: String::new(),
            medical_keywords: Vec::new(),
            cultural_context: String::new(),
            nigerian_context: String::new(),
            severity: Severity::Moderate,
            recommended_specialties: Vec::new(),
            enhanced_notes: String::new(),
        }
    }

    #[test]
    fn fallback_names_detected_keywords() {
        let response = fallback("I have fever and headache", Language::English);
        assert_eq!(response.language, Language::English);
        assert!(response.translation.contains("English"));
        assert!(response.translation.contains("fever"));
        assert!(response.medical_keywords.contains(&"headache".to_string()));
        assert_eq!(response.match_type, MatchType::Fallback);
        assert_eq!(response.similarity_score, 0);
        assert!(!response.cached);
        assert!(response.success);
        assert!(response.matched_input.is_none());
        assert_eq!(
            response.recommended_specialties,
            vec!["General Practitioner", "Internal Medicine"]
        );
    }

    #[test]
    fn fallback_without_keywords_uses_placeholders() {
        let response = fallback("qqq zzz 123", Language::Igbo);
        assert!(response.translation.ends_with("general malaise"));
        assert_eq!(response.medical_keywords, vec![KEYWORD_PLACEHOLDER]);
        assert!(response.enhanced_notes.contains("None specific"));
        assert!(response.nigerian_context.starts_with("Common medical presentation"));
    }

    #[test]
    fn fever_keywords_switch_to_endemic_triage_wording() {
        let response = fallback("mo ni iba", Language::Yoruba);
        assert!(response.nigerian_context.contains("malaria"));
        assert!(response.nigerian_context.contains("typhoid"));
    }

    #[test]
    fn body_part_keywords_keep_standard_wording() {
        // "egungun" (bone) is in the lexicon but is not a fever/pain term
        let response = fallback("egungun mi", Language::Yoruba);
        assert!(response.medical_keywords.contains(&"egungun".to_string()));
        assert!(response.nigerian_context.starts_with("Common medical presentation"));
    }

    #[test]
    fn fallback_notes_carry_complaint_and_context() {
        let response = fallback("I have fever", Language::English);
        assert!(response.enhanced_notes.contains("Patient complaint: I have fever"));
        assert!(response.enhanced_notes.contains("Language: English"));
        assert!(response.enhanced_notes.contains("Translation: "));
        assert!(response
            .enhanced_notes
            .ends_with("Recommendation: Professional medical assessment needed."));
    }

    #[test]
    fn cache_hit_keeps_case_fields_verbatim() {
        let case = full_case();
        let result = MatchResult {
            case: &case,
            score: 87,
            match_kind: MatchType::Fuzzy,
        };
        let response = from_match("mo ni iba", Language::Yoruba, &result);
        assert_eq!(response.input, "mo ni iba ati otutu");
        assert_eq!(response.language, Language::Yoruba);
        assert_eq!(response.translation, "I have fever and chills");
        assert_eq!(response.severity, Severity::Severe);
        assert_eq!(response.recommended_specialties, vec!["Infectious Disease"]);
        assert_eq!(response.match_type, MatchType::Fuzzy);
        assert_eq!(response.similarity_score, 87);
        assert_eq!(response.matched_input.as_deref(), Some("mo ni iba ati otutu"));
        assert!(response.cached);
    }

    #[test]
    fn cache_hit_patches_only_missing_fields() {
        let case = sparse_case();
        let result = MatchResult {
            case: &case,
            score: 100,
            match_kind: MatchType::Exact,
        };
        let response = from_match("fever and headache", Language::English, &result);
        assert!(!response.translation.is_empty());
        assert!(response.medical_keywords.contains(&"fever".to_string()));
        assert_eq!(
            response.recommended_specialties,
            vec!["General Practitioner", "Internal Medicine"]
        );
        // Fields outside the patch set stay as stored, even when empty
        assert_eq!(response.nigerian_context, "");
        assert_eq!(response.enhanced_notes, "");
        assert!(response.cached);
        assert_eq!(response.match_type, MatchType::Exact);
    }

    #[test]
    fn every_path_satisfies_the_field_invariant() {
        let case = sparse_case();
        let result = MatchResult {
            case: &case,
            score: 92,
            match_kind: MatchType::Fuzzy,
        };
        for response in [
            synthesize("fever", Language::English, Some(&result)),
            synthesize("fever", Language::English, None),
            synthesize("qqq", Language::Hausa, None),
        ] {
            assert!(!response.translation.is_empty());
            assert!(!response.medical_keywords.is_empty());
            assert!(!response.recommended_specialties.is_empty());
        }
    }
}
