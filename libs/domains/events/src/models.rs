use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Event as returned to clients.
///
/// Empty fields are left out of the JSON, except `description` which is
/// always present. `Event::default()` serializes as `{"description":""}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Hex ObjectId assigned by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub time: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub amount: String,
}

/// Body accepted by create and update.
///
/// Missing fields deserialize as empty strings so that absence and emptiness
/// fail validation the same way. A client-supplied `id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(default)]
pub struct EventInput {
    #[validate(length(min = 1, message = "title is required"))]
    #[schema(example = "Launch")]
    pub title: String,

    pub description: String,

    #[validate(length(min = 1, message = "date is required"))]
    #[schema(example = "2025-01-01")]
    pub date: String,

    #[validate(length(min = 1, message = "time is required"))]
    #[schema(example = "10:00")]
    pub time: String,

    #[validate(length(min = 1, message = "location is required"))]
    #[schema(example = "HQ")]
    pub location: String,

    /// Kept verbatim, never parsed as a number
    #[validate(length(min = 1, message = "amount is required"))]
    #[schema(example = "0")]
    pub amount: String,
}

/// Insert result returned by create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedEvent {
    #[serde(rename = "InsertedID")]
    pub inserted_id: String,
}

impl From<ObjectId> for CreatedEvent {
    fn from(id: ObjectId) -> Self {
        Self {
            inserted_id: id.to_hex(),
        }
    }
}

/// Stored shape of an event in the `events` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub amount: String,
}

impl EventDocument {
    /// New document without an id; the database assigns `_id` on insert.
    pub fn new(input: EventInput) -> Self {
        Self {
            id: None,
            title: input.title,
            description: input.description,
            date: input.date,
            time: input.time,
            location: input.location,
            amount: input.amount,
        }
    }

    /// Replace every mutable field, keeping the id.
    pub fn apply(&mut self, input: EventInput) {
        self.title = input.title;
        self.description = input.description;
        self.date = input.date;
        self.time = input.time;
        self.location = input.location;
        self.amount = input.amount;
    }
}

impl From<EventDocument> for Event {
    fn from(doc: EventDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()),
            title: doc.title,
            description: doc.description,
            date: doc.date,
            time: doc.time,
            location: doc.location,
            amount: doc.amount,
        }
    }
}
