//! Request-level orchestration: pick the pool, match, synthesize.

use tracing::info;

use crate::analysis::{keywords, matcher, synthesis};
use crate::config;
use crate::corpus::CorpusStore;
use crate::models::{AnalysisResponse, Language, MatchType};

/// Upper bound on the symptom list returned by the quick scan.
const QUICK_SYMPTOM_LIMIT: usize = 10;

/// Full analysis of one complaint. Matches against every language partition
/// so a case can be served even when the identified language is wrong or the
/// complaint is code-mixed; a cross-language fuzzy hit is flagged as such.
pub fn analyze(store: &CorpusStore, text: &str, language: Language) -> AnalysisResponse {
    let pool = store.universal_pool();
    let mut best = matcher::find_best_match(text, &pool, config::ANALYZE_MATCH_THRESHOLD);
    if let Some(result) = best.as_mut() {
        if result.match_kind == MatchType::Fuzzy && result.case.language != language {
            result.match_kind = MatchType::UniversalFuzzy;
        }
    }
    // Complaint text stays out of the logs.
    match &best {
        Some(result) => info!(
            language = language.as_str(),
            match_type = result.match_kind.as_str(),
            score = result.score,
            matched_language = result.case.language.as_str(),
            "corpus match accepted"
        ),
        None => info!(
            language = language.as_str(),
            "no corpus match, synthesizing fallback"
        ),
    }
    synthesis::synthesize(text, language, best.as_ref())
}

#[derive(Debug, Clone)]
pub struct QuickScan {
    pub symptoms: Vec<String>,
    pub language: Language,
    pub cached: bool,
}

/// Lightweight symptom listing. Runs at a looser threshold than [`analyze`]
/// and reports the matched case's keywords, or lexicon hits when no case is
/// close enough.
pub fn quick_symptoms(store: &CorpusStore, text: &str, language: Language) -> QuickScan {
    let pool = store.universal_pool();
    let best = matcher::find_best_match(text, &pool, config::QUICK_MATCH_THRESHOLD);
    let (mut symptoms, cached) = match &best {
        Some(result) => (result.case.medical_keywords.clone(), true),
        None => (keywords::extract_keywords(text), false),
    };
    symptoms.truncate(QUICK_SYMPTOM_LIMIT);
    info!(
        language = language.as_str(),
        cached,
        symptoms = symptoms.len(),
        "quick symptom scan"
    );
    QuickScan {
        symptoms,
        language,
        cached,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::fs;

    fn store_with(dataset: &Value) -> CorpusStore {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join(config::RESPONSES_FILE),
            serde_json::to_string(dataset).unwrap(),
        )
        .unwrap();
        CorpusStore::load(tmp.path()).unwrap()
    }

    fn sample_store() -> CorpusStore {
        store_with(&json!({
            "yoruba": [{
                "input": "mo ni iba",
                "success": true,
                "translation": "I have a fever",
                "medical_keywords": ["iba"],
                "cultural_context": "Common phrasing for febrile illness",
                "nigerian_context": "Malaria is a frequent cause",
                "severity": "moderate",
                "recommended_specialties": ["General Practitioner"],
                "enhanced_notes": "Febrile complaint"
            }],
            "english": [{
                "input": "fever and headache",
                "success": true,
                "translation": "fever and headache",
                "medical_keywords": ["fever", "headache"],
                "cultural_context": "Plain symptom listing",
                "nigerian_context": "Screen for malaria",
                "severity": "moderate",
                "recommended_specialties": ["General Practitioner"],
                "enhanced_notes": "Two symptoms"
            }]
        }))
    }

    #[test]
    fn exact_match_is_served_from_cache() {
        let store = sample_store();
        let response = analyze(&store, "mo ni iba", Language::Yoruba);
        assert_eq!(response.match_type, MatchType::Exact);
        assert_eq!(response.similarity_score, 100);
        assert!(response.cached);
        assert_eq!(response.matched_input.as_deref(), Some("mo ni iba"));
        assert_eq!(response.translation, "I have a fever");
        assert_eq!(response.language, Language::Yoruba);
    }

    #[test]
    fn cross_language_fuzzy_hit_is_flagged() {
        let store = sample_store();
        let response = analyze(&store, "I have fever and headache", Language::Yoruba);
        assert_eq!(response.match_type, MatchType::UniversalFuzzy);
        assert!(response.cached);
        // The served record keeps its own language tag; the match kind
        // carries the mismatch.
        assert_eq!(response.language, Language::English);
    }

    #[test]
    fn exact_hit_stays_exact_across_languages() {
        let store = sample_store();
        let response = analyze(&store, "fever and headache", Language::Yoruba);
        assert_eq!(response.match_type, MatchType::Exact);
        assert_eq!(response.similarity_score, 100);
    }

    #[test]
    fn same_language_fuzzy_hit_stays_fuzzy() {
        let store = sample_store();
        let response = analyze(&store, "I have fever and headache", Language::English);
        assert_eq!(response.match_type, MatchType::Fuzzy);
        assert!(response.cached);
    }

    #[test]
    fn unmatched_complaint_falls_back() {
        let store = sample_store();
        let response = analyze(&store, "completely unrelated words here", Language::English);
        assert_eq!(response.match_type, MatchType::Fallback);
        assert_eq!(response.similarity_score, 0);
        assert!(!response.cached);
        assert!(response.matched_input.is_none());
    }

    #[test]
    fn empty_store_always_falls_back() {
        let store = CorpusStore::empty();
        let response = analyze(&store, "mo ni iba", Language::Yoruba);
        assert_eq!(response.match_type, MatchType::Fallback);
    }

    #[test]
    fn quick_scan_reports_cached_keywords_on_a_hit() {
        let store = sample_store();
        let scan = quick_symptoms(&store, "I have fever and headache", Language::English);
        assert!(scan.cached);
        assert_eq!(scan.symptoms, vec!["fever", "headache"]);
        assert_eq!(scan.language, Language::English);
    }

    #[test]
    fn quick_scan_extracts_keywords_on_a_miss() {
        let store = sample_store();
        let scan = quick_symptoms(&store, "my chest hurts when I cough", Language::English);
        assert!(!scan.cached);
        assert_eq!(scan.symptoms, vec!["chest", "cough"]);
    }

    #[test]
    fn quick_scan_caps_the_symptom_list() {
        let store = CorpusStore::empty();
        let text = "fever headache pain sore body stomach chest bone back cough vomit weak cold";
        let scan = quick_symptoms(&store, text, Language::English);
        assert_eq!(scan.symptoms.len(), QUICK_SYMPTOM_LIMIT);
        assert!(!scan.cached);
    }

    #[test]
    fn mid_confidence_match_serves_quick_but_not_analyze() {
        let store = store_with(&json!({
            "english": [{
                "input": "high fever",
                "success": true,
                "medical_keywords": ["fever"]
            }]
        }));
        // "fever is high degree" scores 67 against "high fever": past the
        // quick threshold of 65, short of the analyze threshold of 70.
        let scan = quick_symptoms(&store, "fever is high degree", Language::English);
        assert!(scan.cached);
        assert_eq!(scan.symptoms, vec!["fever"]);

        let response = analyze(&store, "fever is high degree", Language::English);
        assert_eq!(response.match_type, MatchType::Fallback);
    }
}
