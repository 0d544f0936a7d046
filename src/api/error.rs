//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::analysis::UnsupportedLanguage;

/// Structured error response body. Every error carries `success: false` so
/// clients can branch on one field before inspecting the detail.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing 'text' in request body")]
    MissingText,
    #[error("Empty text provided")]
    EmptyText,
    #[error("{0}")]
    UnsupportedLanguage(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::MissingText => (
                StatusCode::BAD_REQUEST,
                "MISSING_TEXT",
                "Missing 'text' in request body".to_string(),
            ),
            ApiError::EmptyText => (
                StatusCode::BAD_REQUEST,
                "EMPTY_TEXT",
                "Empty text provided".to_string(),
            ),
            ApiError::UnsupportedLanguage(detail) => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_LANGUAGE",
                detail.clone(),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    detail.clone(),
                )
            }
        };

        let body = ErrorBody {
            success: false,
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<UnsupportedLanguage> for ApiError {
    fn from(err: UnsupportedLanguage) -> Self {
        ApiError::UnsupportedLanguage(err.to_string())
    }
}
