//! Shared types for the API layer.

use std::sync::Arc;

use serde::Deserialize;

use crate::api::error::ApiError;
use crate::corpus::CorpusStore;

// ═══════════════════════════════════════════════════════════
// API context: shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes. The corpus is immutable after load,
/// so handlers share it without locking.
#[derive(Clone)]
pub struct ApiContext {
    pub corpus: Arc<CorpusStore>,
}

impl ApiContext {
    pub fn new(corpus: Arc<CorpusStore>) -> Self {
        Self { corpus }
    }
}

// ═══════════════════════════════════════════════════════════
// Request body shared by the analysis endpoints
// ═══════════════════════════════════════════════════════════

/// Body accepted by every complaint endpoint: free text plus an optional
/// language tag. The same validation applies everywhere it is used.
#[derive(Debug, Deserialize)]
pub struct ComplaintRequest {
    pub text: Option<String>,
    pub language: Option<String>,
}

impl ComplaintRequest {
    /// The complaint text, trimmed. A missing field and a blank field are
    /// distinct client errors.
    pub fn text(&self) -> Result<&str, ApiError> {
        let raw = self.text.as_deref().ok_or(ApiError::MissingText)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ApiError::EmptyText);
        }
        Ok(trimmed)
    }

    /// The raw language hint; hint semantics (empty means "detect") live in
    /// the resolver.
    pub fn hint(&self) -> Option<&str> {
        self.language.as_deref()
    }
}
