//! Complaint analysis: language identification, corpus matching, and
//! response synthesis.

pub mod engine;
pub mod keywords;
pub mod language;
pub mod matcher;
pub mod synthesis;

pub use engine::{analyze, quick_symptoms, QuickScan};
pub use keywords::extract_keywords;
pub use language::{detect, resolve, UnsupportedLanguage};
pub use matcher::{find_best_match, token_sort_ratio};
