//! Language identification for short complaint text.
//!
//! An explicit caller hint always wins. Without one, a deterministic
//! heuristic scorer stands in for a statistical classifier: each candidate
//! language carries marker substrings plus a script signal (Yoruba tone-marked
//! and under-dot vowels, Igbo dotted vowels, Hausa hooked consonants). The
//! scorer emits an ISO 639-1 code which is folded through a fixed table, so
//! the same text always resolves to the same supported language.

use std::str::FromStr;

use crate::models::Language;

/// Hint outside the supported set. The message names the valid tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language: {value}. Supported: yoruba, igbo, hausa, english")]
pub struct UnsupportedLanguage {
    pub value: String,
}

struct LanguageProfile {
    code: &'static str,
    markers: &'static [&'static str],
    script: &'static [char],
}

/// Candidate order is fixed; earlier profiles win ties.
const PROFILES: [LanguageProfile; 7] = [
    LanguageProfile {
        code: "yo",
        markers: &[
            "mo ", "ni ", "ati ", "naa ", "fun ", "si ", "wa ", "mi ", "ti ", "gan ",
            "iba", "otutu", "aarun", "aisan", "oogun", "dokita", "ara ", "ori ",
            "inu ", "eebi", "gbuuru",
        ],
        script: &[
            'ẹ', 'ọ', 'ṣ', 'à', 'á', 'è', 'é', 'ì', 'í', 'ò', 'ó', 'ù', 'ú',
            '\u{0300}', '\u{0301}', '\u{0323}',
        ],
    },
    LanguageProfile {
        code: "ig",
        markers: &[
            " m ", "na ", "nke ", "ihe ", "ike ", "anyị", "unu ", "gị ", "dị ", "ndị",
            "enwere", "nwere", "ọkụ", "ọrịa", "mgbu", "ahụ", "isi ", "afọ",
            "ụkwara", "ịba", "agbọ",
        ],
        script: &['ị', 'ụ', 'ṅ', 'ọ', '\u{0323}'],
    },
    LanguageProfile {
        code: "ha",
        markers: &[
            "da ", "ina ", "yana ", "tana ", "ba ", "sai ", "kuma ", "mai ",
            "cikin ", "jin ", "ciwo", "zazza", "sanyi", "jiki", "kai", "ciki",
            "tari", "zawo", "mura", "amai",
        ],
        script: &['ɓ', 'ɗ', 'ƙ', 'ƴ'],
    },
    LanguageProfile {
        code: "en",
        markers: &[
            "the ", "and ", "my ", "have ", "has ", "with ", "for ", "this ",
            "that ", "feel", "pain", "ache", "fever", "headache", "stomach",
            "cough", "cold", "sore", "sick", "body", "chest", "tired", "hurt",
        ],
        script: &[],
    },
    LanguageProfile {
        code: "pt",
        markers: &[
            "eu ", "não ", "uma ", "com ", "para ", "por ", "tenho ", "estou ",
            "muito ", "dor ", "febre", "cabeça", "doente",
        ],
        script: &['ã', 'õ'],
    },
    LanguageProfile {
        code: "fr",
        markers: &[
            "je ", "le ", "la ", "les ", "et ", "est ", "une ", "avec ", "dans ",
            "depuis ", "mal ", "j'ai", "fièvre", "tête", "douleur", "malade",
            "ventre",
        ],
        script: &['ç', 'ê', 'î', 'ô', 'û', 'ë', 'ï', 'ü', 'œ'],
    },
    LanguageProfile {
        code: "es",
        markers: &[
            "yo ", "el ", "los ", "las ", "con ", "para ", "tengo ", "estoy ",
            "mucho ", "dolor", "fiebre", "cabeza", "enfermo",
        ],
        script: &['ñ', '¿', '¡'],
    },
];

/// Resolves the language for a request: a non-empty hint must be one of the
/// four supported tags (case-insensitive), an empty hint means "detect".
pub fn resolve(text: &str, hint: Option<&str>) -> Result<Language, UnsupportedLanguage> {
    match hint {
        Some(raw) if !raw.is_empty() => {
            let lowered = raw.to_lowercase();
            Language::from_str(&lowered).map_err(|_| UnsupportedLanguage { value: lowered })
        }
        _ => Ok(detect(text)),
    }
}

/// Detects the language of free text. Never fails: text with no usable
/// signal falls through to English.
pub fn detect(text: &str) -> Language {
    let lowered = text.to_lowercase();
    match classify(&lowered) {
        Some(code) => map_code(code),
        None => Language::English,
    }
}

/// Raw classifier codes fold into the supported set; the romance near
/// neighbours share the English bucket.
fn map_code(code: &str) -> Language {
    match code {
        "yo" => Language::Yoruba,
        "ig" => Language::Igbo,
        "ha" => Language::Hausa,
        "en" => Language::English,
        "pt" | "fr" | "es" => Language::English,
        _ => Language::English,
    }
}

/// Best-scoring candidate code, or `None` when every profile scores zero.
/// Replacement is strictly-greater, so earlier profiles win ties.
fn classify(lowered: &str) -> Option<&'static str> {
    let mut best: Option<(&'static str, u32)> = None;
    for profile in &PROFILES {
        let score = count_markers(lowered, profile.markers)
            + count_script_chars(lowered, profile.script) / 2;
        if score > 0 && best.map_or(true, |(_, s)| score > s) {
            best = Some((profile.code, score));
        }
    }
    best.map(|(code, _)| code)
}

/// Count marker occurrences in the text; each occurrence adds 1.
fn count_markers(lowered: &str, markers: &[&str]) -> u32 {
    let mut score = 0u32;
    for &marker in markers {
        score += lowered.matches(marker).count() as u32;
    }
    score
}

/// Count script characters tied to one language. Weighted half per
/// occurrence relative to markers when scored.
fn count_script_chars(lowered: &str, script: &[char]) -> u32 {
    let mut count = 0u32;
    for ch in lowered.chars() {
        if script.contains(&ch) {
            count += 1;
        }
    }
    count
}
