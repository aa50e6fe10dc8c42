//! Process-local EventRepository, kept in insertion order.
//!
//! Backs the handler tests and lets the router run without a database.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{EventError, EventResult};
use crate::models::{Event, EventDocument, EventInput};
use crate::repository::EventRepository;

#[derive(Default)]
pub struct InMemoryEventRepository {
    events: RwLock<Vec<EventDocument>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> EventResult<RwLockReadGuard<'_, Vec<EventDocument>>> {
        self.events
            .read()
            .map_err(|_| EventError::Store("event store lock poisoned".to_string()))
    }

    fn write(&self) -> EventResult<RwLockWriteGuard<'_, Vec<EventDocument>>> {
        self.events
            .write()
            .map_err(|_| EventError::Store("event store lock poisoned".to_string()))
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn insert(&self, input: EventInput) -> EventResult<ObjectId> {
        let id = ObjectId::new();
        let mut doc = EventDocument::new(input);
        doc.id = Some(id);

        self.write()?.push(doc);
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> EventResult<Option<Event>> {
        Ok(self
            .read()?
            .iter()
            .find(|doc| doc.id == Some(id))
            .cloned()
            .map(Event::from))
    }

    async fn update_fields(&self, id: ObjectId, input: EventInput) -> EventResult<u64> {
        let mut events = self.write()?;
        match events.iter_mut().find(|doc| doc.id == Some(id)) {
            Some(doc) => {
                doc.apply(input);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ObjectId) -> EventResult<u64> {
        let mut events = self.write()?;
        let before = events.len();
        events.retain(|doc| doc.id != Some(id));
        Ok((before - events.len()) as u64)
    }

    async fn find_all(&self) -> EventResult<Vec<Event>> {
        Ok(self.read()?.iter().cloned().map(Event::from).collect())
    }
}
