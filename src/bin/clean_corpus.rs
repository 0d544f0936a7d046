//! Offline corpus hygiene: rewrite the dataset keeping only well-formed
//! records.
//!
//! The serving loader quarantines malformed records on every start; this
//! tool applies the same predicate once and persists the result, so the
//! stored dataset meets the loader's precondition. The dataset-level
//! `metadata` key is carried through untouched.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use serde_json::{Map, Value};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use natlas_api::config;
use natlas_api::corpus::CorpusError;
use natlas_api::models::{self, Language};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    match clean_file(&config::responses_path()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "corpus cleanup failed");
            ExitCode::FAILURE
        }
    }
}

/// Cleans one dataset file in place, logging per-language removal counts.
fn clean_file(path: &Path) -> Result<(), CorpusError> {
    info!(path = %path.display(), "cleaning corpus dataset");

    let raw = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset: Value = serde_json::from_str(&raw).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let (cleaned, removed) = clean_dataset(dataset)?;
    for language in Language::ALL {
        info!(
            language = language.as_str(),
            removed = removed.get(&language).copied().unwrap_or(0),
            "partition cleaned"
        );
    }

    let pretty = serde_json::to_string_pretty(&cleaned).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, pretty).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("dataset rewritten in place");
    Ok(())
}

/// Rebuilds the dataset with only the records the serving loader would
/// accept. Returns the cleaned dataset and per-language removal counts.
fn clean_dataset(dataset: Value) -> Result<(Value, BTreeMap<Language, usize>), CorpusError> {
    let root = match dataset {
        Value::Object(map) => map,
        _ => return Err(CorpusError::MalformedDataset),
    };

    let mut cleaned = Map::new();
    if let Some(metadata) = root.get("metadata") {
        cleaned.insert("metadata".to_string(), metadata.clone());
    }

    let mut removed = BTreeMap::new();
    for language in Language::ALL {
        let records = match root.get(language.as_str()) {
            Some(Value::Array(records)) => records.clone(),
            _ => Vec::new(),
        };
        let total = records.len();
        let kept: Vec<Value> = records.into_iter().filter(models::is_well_formed).collect();
        removed.insert(language, total - kept.len());
        cleaned.insert(language.as_str().to_string(), Value::Array(kept));
    }

    Ok((Value::Object(cleaned), removed))
}
