use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::time::Duration;
use thiserror::Error;

use crate::envelope::EventResponse;

#[derive(Debug, Error)]
pub enum EventError {
    /// Body could not be parsed or failed validation
    #[error("{0}")]
    BadRequest(String),

    /// Delete matched no document
    #[error("Event with specified ID not found!")]
    NotFound,

    /// Get-one matched no document
    #[error("mongo: no documents in result")]
    NoDocuments,

    #[error("{0}")]
    Store(String),

    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),
}

pub type EventResult<T> = Result<T, EventError>;

impl EventError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EventError::BadRequest(_) => StatusCode::BAD_REQUEST,
            EventError::NotFound => StatusCode::NOT_FOUND,
            EventError::NoDocuments | EventError::Store(_) | EventError::Timeout(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Event request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Event request rejected");
        }

        EventResponse::error(status, self.to_string()).into_response()
    }
}

impl From<mongodb::error::Error> for EventError {
    fn from(err: mongodb::error::Error) -> Self {
        EventError::Store(err.to_string())
    }
}

impl From<validator::ValidationErrors> for EventError {
    fn from(err: validator::ValidationErrors) -> Self {
        EventError::BadRequest(err.to_string())
    }
}
