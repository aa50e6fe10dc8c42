//! Events Domain
//!
//! CRUD over a single `events` collection, answered with a uniform envelope:
//!
//! ```json
//! { "status": 200, "message": "success", "data": { "data": { "title": "Launch", "description": "" } } }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, extractors, envelope
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, store deadline
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + MongoDB and in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Event, EventInput, EventDocument
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_events::{handlers, mongodb::MongoEventRepository, service::EventService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("events_api");
//!
//! let service = EventService::new(MongoEventRepository::new(&db));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod envelope;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use envelope::{EventResponse, Payload, ResponseMessage};
pub use error::{EventError, EventResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryEventRepository;
pub use models::{CreatedEvent, Event, EventDocument, EventInput};
pub use crate::mongodb::MongoEventRepository;
pub use repository::EventRepository;
pub use extract::{EventId, parse_event_id};
pub use service::{DEFAULT_STORE_TIMEOUT, EventService};
