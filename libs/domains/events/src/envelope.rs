//! Uniform reply wrapper for the event routes:
//! `{"status": 200, "message": "success", "data": {"data": ...}}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMessage {
    Success,
    Error,
}

/// Inner `{"data": ...}` object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Payload<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventResponse<T> {
    /// Mirrors the HTTP status code
    pub status: u16,
    pub message: ResponseMessage,
    pub data: Payload<T>,
}

impl<T> EventResponse<T> {
    pub fn success(status: StatusCode, data: T) -> Self {
        Self::new(status, ResponseMessage::Success, data)
    }

    pub fn error(status: StatusCode, data: T) -> Self {
        Self::new(status, ResponseMessage::Error, data)
    }

    fn new(status: StatusCode, message: ResponseMessage, data: T) -> Self {
        Self {
            status: status.as_u16(),
            message,
            data: Payload { data },
        }
    }
}

impl<T: Serialize> IntoResponse for EventResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
