//! Type-safe error codes for infrastructure responses.
//!
//! Each code has a client-facing string, an integer for logs and metrics, and a
//! default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ServiceUnavailable;
//! assert_eq!(code.as_str(), "SERVICE_UNAVAILABLE");
//! assert_eq!(code.code(), 1011);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Route does not exist
    NotFound,

    /// A dependency is not reachable
    ServiceUnavailable,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Integer code for structured logs
    pub fn code(&self) -> i32 {
        match self {
            Self::NotFound => 1004,
            Self::ServiceUnavailable => 1011,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::NotFound => "The requested resource was not found",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
