//! HTTP-facing error type.
//!
//! Module errors are logged where they are caught; clients only ever see the
//! short message carried here, as `{"error": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub const INVALID_GRADE: &str = "Invalid grade. Choose from 7, 8, or 9.";
pub const INVALID_DIFFICULTY: &str = "Invalid difficulty level. Choose from easy, medium, or hard.";
pub const VOCABULARY_FAILED: &str = "Failed to load vocabulary";
pub const TEMPLATE_FAILED: &str = "Failed to load exam template";
pub const QUESTIONS_FAILED: &str = "Failed to generate questions";
pub const EXAM_FAILED: &str = "Failed to generate exam";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Missing or invalid request parameter.
    #[error("{0}")]
    BadRequest(String),

    /// Local file or upstream failure; details are in the logs.
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::bad_request(INVALID_GRADE).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal(EXAM_FAILED).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::Internal(EXAM_FAILED).to_string(), EXAM_FAILED);
    }
}
