//! Lexicon scan for symptom vocabulary.
//!
//! The table covers fever, pain, body parts, and common symptom words in the
//! four supported languages. Extraction is substring containment over the
//! lower-cased text, unioned across every language: diacritics and loanwords
//! make language-scoped lookup unreliable, so coverage wins over precision.

use std::collections::BTreeSet;

use crate::models::Language;

const MEDICAL_TERMS: [(Language, &[&str]); 4] = [
    (
        Language::Yoruba,
        &[
            "iba", "otutu", "aarun", "aisan", "ori", "inu", "ara", "egungun", "aya",
            "gbuuru", "ikọ", "obi", "eebi", "rẹwẹsi", "tutu", "ogun oru", "ọgbẹ",
            "malaria", "àìsàn", "gbígbọ̀n",
        ],
    ),
    (
        Language::Igbo,
        &[
            "ọkụ", "isi", "ahụ", "mgbu", "ọrịa", "afọ", "obi", "akụkụ", "ụkwara",
            "nsi", "ike", "oyi", "ọbara", "agbọ", "ọkụọkụ", "isi ọwụwa", "ịgba",
            "ịba", "oké mgbu", "nkwonkwo", "azụ",
        ],
    ),
    (
        Language::Hausa,
        &[
            "zazzaɓi", "sanyi", "ciwo", "jinya", "kai", "ciki", "jiki", "ƙashi",
            "ƙirji", "tari", "zawo", "mura", "ƙarfi", "hanta", "zubar", "jini",
            "amo", "malariya", "ciwon ciki", "amai", "baya",
        ],
    ),
    (
        Language::English,
        &[
            "fever", "headache", "pain", "ache", "sore", "body", "stomach", "chest",
            "bone", "back", "cough", "diarrhea", "vomit", "weak", "cold", "chills",
            "flu", "malaria", "nausea", "sickness", "illness", "fatigue",
        ],
    ),
];

/// Returns every lexicon term contained in the text, deduplicated and sorted.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut found = BTreeSet::new();
    for (_, terms) in MEDICAL_TERMS {
        for &term in terms {
            if lowered.contains(term) {
                found.insert(term.to_string());
            }
        }
    }
    found.into_iter().collect()
}
