//! In-memory corpus of pre-generated annotated cases.
//!
//! Loaded once at startup from the cache directory and never mutated while
//! serving: request handling is read-only lookup over these partitions.
//! Malformed records are quarantined here, once, so nothing downstream has
//! to defend against them. A failed load degrades to an empty store rather
//! than aborting the process; `/health` surfaces that state.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config;
use crate::models::{AnnotatedCase, CorpusMetadata, Language};

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Dataset is not a JSON object keyed by language")]
    MalformedDataset,
}

pub struct CorpusStore {
    partitions: BTreeMap<Language, Vec<AnnotatedCase>>,
    /// (language, index) pairs of successful cases, in partition order.
    /// Rebuilt with the partitions; pool iteration order flows from here.
    eligible: Vec<(Language, usize)>,
    metadata: CorpusMetadata,
    quarantined: usize,
}

impl CorpusStore {
    /// Loads the dataset and its metadata sidecar from `dir`.
    pub fn load(dir: &Path) -> Result<Self, CorpusError> {
        let dataset_path = dir.join(config::RESPONSES_FILE);
        let raw = fs::read_to_string(&dataset_path).map_err(|source| CorpusError::Io {
            path: dataset_path.clone(),
            source,
        })?;
        let dataset: Value = serde_json::from_str(&raw).map_err(|source| CorpusError::Parse {
            path: dataset_path.clone(),
            source,
        })?;
        let root = dataset.as_object().ok_or(CorpusError::MalformedDataset)?;

        let mut partitions = BTreeMap::new();
        let mut quarantined = 0usize;
        for language in Language::ALL {
            let mut cases = Vec::new();
            match root.get(language.as_str()) {
                Some(Value::Array(records)) => {
                    for record in records {
                        match AnnotatedCase::from_record(record, language) {
                            Some(case) => cases.push(case),
                            None => quarantined += 1,
                        }
                    }
                }
                Some(_) => {
                    warn!(
                        language = language.as_str(),
                        "dataset partition is not an array, treating as empty"
                    );
                }
                None => {}
            }
            partitions.insert(language, cases);
        }

        Ok(Self {
            eligible: build_eligible(&partitions),
            partitions,
            metadata: load_metadata(dir),
            quarantined,
        })
    }

    /// Loads the corpus, falling back to an empty store when the dataset is
    /// missing or unreadable. The outcome is logged either way.
    pub fn load_or_empty(dir: &Path) -> Self {
        match Self::load(dir) {
            Ok(store) => {
                info!(
                    total = store.total_cases(),
                    quarantined = store.quarantined,
                    generated_at = store.generated_at(),
                    "corpus loaded"
                );
                store
            }
            Err(err) => {
                error!(%err, "corpus load failed, serving fallback-only responses");
                Self::empty()
            }
        }
    }

    /// A store with all four partitions present but no cases.
    pub fn empty() -> Self {
        let partitions = Language::ALL
            .iter()
            .map(|language| (*language, Vec::new()))
            .collect();
        Self {
            partitions,
            eligible: Vec::new(),
            metadata: CorpusMetadata::default(),
            quarantined: 0,
        }
    }

    pub fn total_cases(&self) -> usize {
        self.partitions.values().map(Vec::len).sum()
    }

    pub fn is_loaded(&self) -> bool {
        self.total_cases() > 0
    }

    pub fn quarantined(&self) -> usize {
        self.quarantined
    }

    pub fn metadata(&self) -> &CorpusMetadata {
        &self.metadata
    }

    /// Provenance timestamp for `/health`; "Unknown" when the sidecar had none.
    pub fn generated_at(&self) -> &str {
        self.metadata.generated_at.as_deref().unwrap_or("Unknown")
    }

    /// Successful cases of one language, in load order.
    pub fn candidate_pool(&self, language: Language) -> Vec<&AnnotatedCase> {
        self.partitions
            .get(&language)
            .map(|cases| cases.iter().filter(|case| case.success).collect())
            .unwrap_or_default()
    }

    /// Successful cases across every language: yoruba, igbo, hausa, english,
    /// each partition in load order.
    pub fn universal_pool(&self) -> Vec<&AnnotatedCase> {
        self.eligible
            .iter()
            .filter_map(|(language, idx)| {
                self.partitions
                    .get(language)
                    .and_then(|cases| cases.get(*idx))
            })
            .collect()
    }
}

fn build_eligible(partitions: &BTreeMap<Language, Vec<AnnotatedCase>>) -> Vec<(Language, usize)> {
    let mut eligible = Vec::new();
    for language in Language::ALL {
        if let Some(cases) = partitions.get(&language) {
            for (idx, case) in cases.iter().enumerate() {
                if case.success {
                    eligible.push((language, idx));
                }
            }
        }
    }
    eligible
}

fn load_metadata(dir: &Path) -> CorpusMetadata {
    let path = dir.join(config::METADATA_FILE);
    match fs::read_to_string(&path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!(path = %path.display(), %err, "metadata sidecar unreadable, using defaults");
                CorpusMetadata::default()
            }
        },
        Err(err) => {
            warn!(path = %path.display(), %err, "metadata sidecar missing, using defaults");
            CorpusMetadata::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_cache(dir: &Path, dataset: &Value, metadata: Option<&Value>) {
        fs::write(
            dir.join(config::RESPONSES_FILE),
            serde_json::to_string_pretty(dataset).unwrap(),
        )
        .unwrap();
        if let Some(meta) = metadata {
            fs::write(
                dir.join(config::METADATA_FILE),
                serde_json::to_string_pretty(meta).unwrap(),
            )
            .unwrap();
        }
    }

    fn sample_dataset() -> Value {
        json!({
            "yoruba": [
                {"input": "mo ni iba", "success": true, "translation": "I have a fever"},
                {"input": "inu mi n dun", "success": false}
            ],
            "igbo": [
                {"input": "isi na-awa m", "success": true}
            ],
            "hausa": [],
            "english": [
                {"input": "fever and headache", "success": true},
                {"success": true},
                {"input": "", "success": true}
            ],
            "metadata": {"note": "dataset-level key, ignored by the loader"}
        })
    }

    fn sample_metadata() -> Value {
        json!({"generated_at": "2025-06-01T12:00:00Z", "model": "N-ATLAS", "total_responses": 4})
    }

    #[test]
    fn loads_partitions_and_quarantines_malformed() {
        let tmp = tempfile::tempdir().unwrap();
        write_cache(tmp.path(), &sample_dataset(), Some(&sample_metadata()));

        let store = CorpusStore::load(tmp.path()).unwrap();
        // 2 yoruba + 1 igbo + 1 english survive; 2 english records are malformed
        assert_eq!(store.total_cases(), 4);
        assert_eq!(store.quarantined(), 2);
        assert!(store.is_loaded());
        assert_eq!(store.generated_at(), "2025-06-01T12:00:00Z");
        assert_eq!(store.metadata().model.as_deref(), Some("N-ATLAS"));
    }

    #[test]
    fn pools_exclude_unsuccessful_cases() {
        let tmp = tempfile::tempdir().unwrap();
        write_cache(tmp.path(), &sample_dataset(), None);

        let store = CorpusStore::load(tmp.path()).unwrap();
        let yoruba = store.candidate_pool(Language::Yoruba);
        assert_eq!(yoruba.len(), 1);
        assert_eq!(yoruba[0].input, "mo ni iba");
        assert!(store.candidate_pool(Language::Hausa).is_empty());
    }

    #[test]
    fn universal_pool_iterates_languages_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        write_cache(tmp.path(), &sample_dataset(), None);

        let store = CorpusStore::load(tmp.path()).unwrap();
        let pool = store.universal_pool();
        let inputs: Vec<&str> = pool.iter().map(|case| case.input.as_str()).collect();
        assert_eq!(inputs, vec!["mo ni iba", "isi na-awa m", "fever and headache"]);
        let languages: Vec<Language> = pool.iter().map(|case| case.language).collect();
        assert_eq!(
            languages,
            vec![Language::Yoruba, Language::Igbo, Language::English]
        );
    }

    #[test]
    fn missing_metadata_defaults_to_unknown() {
        let tmp = tempfile::tempdir().unwrap();
        write_cache(tmp.path(), &sample_dataset(), None);

        let store = CorpusStore::load(tmp.path()).unwrap();
        assert_eq!(store.generated_at(), "Unknown");
        assert!(store.is_loaded());
    }

    #[test]
    fn missing_dataset_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(matches!(
            CorpusStore::load(tmp.path()),
            Err(CorpusError::Io { .. })
        ));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(config::RESPONSES_FILE), "{not json").unwrap();
        assert!(matches!(
            CorpusStore::load(tmp.path()),
            Err(CorpusError::Parse { .. })
        ));
    }

    #[test]
    fn non_object_dataset_is_malformed() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(config::RESPONSES_FILE), "[1, 2, 3]").unwrap();
        assert!(matches!(
            CorpusStore::load(tmp.path()),
            Err(CorpusError::MalformedDataset)
        ));
    }

    #[test]
    fn non_array_partition_is_treated_as_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let dataset = json!({"yoruba": "oops", "english": [{"input": "fever", "success": true}]});
        write_cache(tmp.path(), &dataset, None);

        let store = CorpusStore::load(tmp.path()).unwrap();
        assert_eq!(store.total_cases(), 1);
        assert!(store.candidate_pool(Language::Yoruba).is_empty());
    }

    #[test]
    fn load_or_empty_degrades_instead_of_failing() {
        let tmp = tempfile::tempdir().unwrap();
        let store = CorpusStore::load_or_empty(tmp.path());
        assert_eq!(store.total_cases(), 0);
        assert!(!store.is_loaded());
        assert!(store.universal_pool().is_empty());
        assert_eq!(store.generated_at(), "Unknown");
    }

    #[test]
    fn empty_store_has_all_partitions() {
        let store = CorpusStore::empty();
        for language in Language::ALL {
            assert!(store.candidate_pool(language).is_empty());
        }
    }
}
