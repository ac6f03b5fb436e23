// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use crate::models::Toast;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and a JSON error body
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Service temporarily unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl CmsError {
    /// Stable machine-readable code used in the error body
    pub fn code(&self) -> &'static str {
        match self {
            CmsError::NotFound(_) => "NOT_FOUND",
            CmsError::InvalidInput(_) => "INVALID_INPUT",
            CmsError::ValidationError(_) => "VALIDATION_ERROR",
            CmsError::ExternalApiError(_) => "EXTERNAL_API_ERROR",
            CmsError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            CmsError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            CmsError::IoError(_) => "IO_ERROR",
            CmsError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Error notice shown by the UI next to the failed action
    pub fn toast(&self) -> Toast {
        let title = match self {
            CmsError::NotFound(_) => "Not found",
            CmsError::InvalidInput(_) | CmsError::ValidationError(_) => "Please check the form",
            CmsError::ExternalApiError(_) => "Content service error",
            CmsError::RateLimitExceeded => "Too many requests",
            CmsError::ServiceUnavailable(_) => "Service unavailable",
            CmsError::IoError(_) | CmsError::InternalError(_) => "Something went wrong",
        };
        Toast::error(title, self.to_string())
    }
}

impl From<validator::ValidationErrors> for CmsError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CmsError::ValidationError(errors.to_string())
    }
}

impl From<serde_json::Error> for CmsError {
    fn from(e: serde_json::Error) -> Self {
        CmsError::InvalidInput(e.to_string())
    }
}

/// Convert CmsError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for CmsError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            },
            "toast": self.toast()
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            CmsError::NotFound(_) => StatusCode::NOT_FOUND,
            CmsError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CmsError::ValidationError(_) => StatusCode::BAD_REQUEST,
            CmsError::ExternalApiError(_) => StatusCode::BAD_GATEWAY,
            CmsError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            CmsError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            CmsError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CmsError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
