//! MongoDB implementation of EventRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
};
use tracing::instrument;

use crate::error::{EventError, EventResult};
use crate::models::{Event, EventDocument, EventInput};
use crate::repository::EventRepository;

pub const DEFAULT_COLLECTION: &str = "events";

pub struct MongoEventRepository {
    collection: Collection<EventDocument>,
}

impl MongoEventRepository {
    /// Repository over the default `events` collection.
    ///
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoEventRepository::new(&client.database("events_api"));
    /// ```
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<EventDocument>(collection_name),
        }
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn insert(&self, input: EventInput) -> EventResult<ObjectId> {
        let result = self.collection.insert_one(EventDocument::new(input)).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| EventError::Store("inserted id is not an ObjectId".to_string()))?;

        tracing::info!(event_id = %id, "Event created");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> EventResult<Option<Event>> {
        let doc = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(doc.map(Event::from))
    }

    #[instrument(skip(self, input))]
    async fn update_fields(&self, id: ObjectId, input: EventInput) -> EventResult<u64> {
        let update = doc! {
            "$set": {
                "title": input.title,
                "description": input.description,
                "date": input.date,
                "time": input.time,
                "location": input.location,
                "amount": input.amount,
            }
        };

        let result = self.collection.update_one(doc! { "_id": id }, update).await?;
        tracing::debug!(matched = result.matched_count, "Event update applied");
        Ok(result.matched_count)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> EventResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        if result.deleted_count > 0 {
            tracing::info!(event_id = %id, "Event deleted");
        }
        Ok(result.deleted_count)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> EventResult<Vec<Event>> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut events = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            events.push(Event::from(doc));
        }

        Ok(events)
    }
}
