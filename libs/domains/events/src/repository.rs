use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::EventResult;
use crate::models::{Event, EventInput};

/// Storage operations for events.
///
/// Each method maps to a single store call; deadlines and not-found
/// semantics live in [`EventService`](crate::service::EventService).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert a new event and return the id the store assigned
    async fn insert(&self, input: EventInput) -> EventResult<ObjectId>;

    async fn find_by_id(&self, id: ObjectId) -> EventResult<Option<Event>>;

    /// Overwrite all mutable fields; returns the matched count
    async fn update_fields(&self, id: ObjectId, input: EventInput) -> EventResult<u64>;

    /// Returns the deleted count (0 or 1)
    async fn delete(&self, id: ObjectId) -> EventResult<u64>;

    /// Every event in store order. Any decode failure fails the whole call.
    async fn find_all(&self) -> EventResult<Vec<Event>>;
}
