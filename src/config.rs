use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "N-ATLAS Nigerian Medical API";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_DESCRIPTION: &str =
    "Serves cached N-ATLAS medical language responses for Nigerian languages";

/// Model identity reported by /health
pub const MODEL_NAME: &str = "N-ATLAS";
pub const SERVE_MODE: &str = "cached_responses";

/// Cache artifacts produced by the offline generation run
pub const RESPONSES_FILE: &str = "natlas_responses_complete.json";
pub const METADATA_FILE: &str = "metadata.json";

/// Minimum token-sort similarity (0-100) for a full-analysis cache hit
pub const ANALYZE_MATCH_THRESHOLD: u32 = 70;
/// Looser floor for the quick-symptoms scan
pub const QUICK_MATCH_THRESHOLD: u32 = 65;

const DEFAULT_PORT: u16 = 5000;

/// Get the cache directory holding the response artifacts
/// `NATLAS_CACHE_DIR` overrides the relative default for deployments
pub fn cache_dir() -> PathBuf {
    match std::env::var("NATLAS_CACHE_DIR") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("cache"),
    }
}

/// Path to the pre-generated response dataset
pub fn responses_path() -> PathBuf {
    cache_dir().join(RESPONSES_FILE)
}

/// Path to the generation-run metadata
pub fn metadata_path() -> PathBuf {
    cache_dir().join(METADATA_FILE)
}

/// Listen port, `PORT` env override with platform default 5000
pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn default_log_filter() -> &'static str {
    "info"
}
