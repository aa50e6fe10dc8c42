//! Request extractors that never answer with axum's plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;
use mongodb::bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use std::convert::Infallible;

use crate::error::EventError;

/// Parse a path identifier. Anything that is not a 24-digit hex ObjectId maps
/// to the all-zero id, which matches no stored event.
pub fn parse_event_id(raw: &str) -> ObjectId {
    ObjectId::parse_str(raw).unwrap_or_else(|e| {
        tracing::debug!(event_id = raw, error = %e, "Unparseable event id, using zero id");
        ObjectId::from_bytes([0; 12])
    })
}

/// `{eventId}` path segment resolved to an `ObjectId`.
///
/// Never rejects: a segment that fails to decode (invalid UTF-8 after
/// percent-decoding, for instance) becomes the zero id, like malformed hex,
/// so the request still reaches the store and is answered in the envelope.
pub struct EventId(pub ObjectId);

impl<S> FromRequestParts<S> for EventId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => Ok(Self(parse_event_id(&raw))),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Undecodable event id, using zero id");
                Ok(Self(ObjectId::from_bytes([0; 12])))
            }
        }
    }
}

/// Like `axum::Json`, but a bad body becomes `EventError::BadRequest` carrying
/// the rejection text, so clients always receive the event envelope.
///
/// Validation runs in the service, not here.
pub struct EventJson<T>(pub T);

impl<T, S> FromRequest<S> for EventJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = EventError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| EventError::BadRequest(rejection.body_text()))?;

        Ok(Self(data))
    }
}
