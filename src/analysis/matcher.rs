//! Token-sort similarity search over corpus inputs.
//!
//! Medical phrases reorder freely ("head pain" vs "pain head") without a
//! change in meaning, so both sides are normalized to sorted token form
//! before scoring. The score is an indel ratio scaled to an integer 0..=100.

use crate::models::{AnnotatedCase, MatchResult, MatchType};

/// Lower-cases, splits on whitespace, sorts the tokens, and rejoins with
/// single spaces. Diacritics and in-token punctuation are preserved.
fn token_sort_normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut tokens: Vec<&str> = lowered.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Longest common subsequence over chars, two-row dynamic programming.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Indel similarity of two already-normalized strings:
/// `round(100 · 2·LCS / (|a| + |b|))`. Two empty strings count as identical.
fn indel_ratio(a: &str, b: &str) -> u32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }
    let lcs = lcs_len(&a, &b);
    ((200.0 * lcs as f64) / total as f64).round() as u32
}

/// Token-sort similarity between two raw strings, 0..=100.
pub fn token_sort_ratio(a: &str, b: &str) -> u32 {
    indel_ratio(&token_sort_normalize(a), &token_sort_normalize(b))
}

/// Scores `text` against every eligible candidate in the pool and returns
/// the best one at or above `threshold`. Ties keep the earliest candidate in
/// pool order. Candidates with `success = false` are never returned.
pub fn find_best_match<'a>(
    text: &str,
    pool: &[&'a AnnotatedCase],
    threshold: u32,
) -> Option<MatchResult<'a>> {
    let query = token_sort_normalize(text);
    let query_len = query.chars().count();

    let mut best: Option<(&'a AnnotatedCase, u32)> = None;
    for &case in pool {
        if !case.success {
            continue;
        }
        let needed = best.map_or(threshold, |(_, s)| threshold.max(s + 1));
        let candidate = token_sort_normalize(&case.input);
        let candidate_len = candidate.chars().count();
        // LCS cannot exceed the shorter side, so the ratio is bounded before
        // running the DP; candidates that cannot reach `needed` are skipped.
        if query_len + candidate_len > 0 {
            let cap = 200.0 * query_len.min(candidate_len) as f64
                / (query_len + candidate_len) as f64;
            if cap < needed as f64 - 0.5 {
                continue;
            }
        }
        let score = indel_ratio(&query, &candidate);
        match best {
            Some((_, s)) if score <= s => {}
            _ => best = Some((case, score)),
        }
    }

    let (case, score) = best?;
    if score < threshold {
        return None;
    }
    let match_kind = if score == 100 {
        MatchType::Exact
    } else {
        MatchType::Fuzzy
    };
    Some(MatchResult {
        case,
        score,
        match_kind,
    })
}
