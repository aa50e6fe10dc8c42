pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Error body for infrastructure routes (fallbacks, readiness).
///
/// ```json
/// {
///   "code": 1011,
///   "error": "SERVICE_UNAVAILABLE",
///   "message": "database ping failed"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Builds a JSON error response for `code` with the given status and message.
pub fn error_response(status: StatusCode, message: String, code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: code.code(),
        error: code.as_str().to_string(),
        message,
        details: None,
    });
    (status, body).into_response()
}

/// Errors raised by the shared HTTP plumbing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        if status.is_server_error() {
            tracing::error!(error_code = code.code(), error = %self, "Request failed");
        } else {
            tracing::info!(error_code = code.code(), error = %self, "Request rejected");
        }

        let message = match self {
            AppError::NotFound(msg) | AppError::ServiceUnavailable(msg) => msg,
        };

        error_response(status, message, code)
    }
}
