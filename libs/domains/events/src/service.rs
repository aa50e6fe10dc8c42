//! Event service: validation and store deadlines

use mongodb::bson::oid::ObjectId;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;
use validator::Validate;

use crate::error::{EventError, EventResult};
use crate::models::{CreatedEvent, Event, EventInput};
use crate::repository::EventRepository;

/// Deadline applied to each store operation unless overridden
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
    timeout: Duration,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs `operation` under the store deadline; the future is dropped when
    /// the deadline passes.
    async fn bounded<T>(&self, operation: impl Future<Output = EventResult<T>>) -> EventResult<T> {
        tokio::time::timeout(self.timeout, operation)
            .await
            .map_err(|_| EventError::Timeout(self.timeout))?
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: EventInput) -> EventResult<CreatedEvent> {
        input.validate()?;

        let id = self.bounded(self.repository.insert(input)).await?;
        Ok(CreatedEvent::from(id))
    }

    /// Fails with `NoDocuments` when nothing matches.
    #[instrument(skip(self))]
    pub async fn get(&self, id: ObjectId) -> EventResult<Event> {
        self.bounded(self.repository.find_by_id(id))
            .await?
            .ok_or(EventError::NoDocuments)
    }

    /// Overwrites every field and returns the stored result. When no document
    /// matched, returns an empty `Event` instead of an error.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: ObjectId, input: EventInput) -> EventResult<Event> {
        input.validate()?;

        self.bounded(async {
            let matched = self.repository.update_fields(id, input).await?;
            if matched != 1 {
                return Ok(Event::default());
            }

            self.repository
                .find_by_id(id)
                .await?
                .ok_or(EventError::NoDocuments)
        })
        .await
    }

    /// Fails with `NotFound` when nothing was deleted.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ObjectId) -> EventResult<()> {
        let deleted = self.bounded(self.repository.delete(id)).await?;
        if deleted == 0 {
            return Err(EventError::NotFound);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> EventResult<Vec<Event>> {
        self.bounded(self.repository.find_all()).await
    }
}

impl<R: EventRepository> Clone for EventService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            timeout: self.timeout,
        }
    }
}
