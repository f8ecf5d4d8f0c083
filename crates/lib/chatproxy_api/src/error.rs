//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// JSON error envelope for HTTP-level failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable code (e.g. `internal_error`).
    pub error: String,
    pub message: String,
    /// RFC 3339 timestamp of when the error was produced.
    pub timestamp: String,
}

/// HTTP-level errors with status mapping.
///
/// Resolver failures stay inside the GraphQL response; this type covers
/// everything that fails before the schema executes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, "validation_error", m.as_str()),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error",
            ),
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_error_hides_details() {
        let rendered = AppError::Internal("secret detail".into()).to_string();
        assert_eq!(rendered, "Internal server error");
    }

    #[test]
    fn envelope_serializes_all_fields() {
        let body = ErrorResponse {
            error: "internal_error".into(),
            message: "Internal server error".into(),
            timestamp: Utc::now().to_rfc3339(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "internal_error");
        assert!(json["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
    }
}
