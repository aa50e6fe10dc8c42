use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::envelope::{EventResponse, ResponseMessage};
use crate::error::EventResult;
use crate::extract::{EventId, EventJson};
use crate::models::{CreatedEvent, Event, EventInput};
use crate::repository::EventRepository;
use crate::service::EventService;

pub const DELETED_MESSAGE: &str = "Event successfully deleted!";

#[derive(OpenApi)]
#[openapi(
    paths(create_event, get_event, update_event, delete_event, list_events),
    components(schemas(Event, EventInput, CreatedEvent, ResponseMessage)),
    tags(
        (name = "Events", description = "Event CRUD endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Event routes with their full paths and state applied.
pub fn router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/event", post(create_event))
        .route(
            "/event/{eventId}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/events", get(list_events))
        .with_state(shared_service)
}

/// Create an event
#[utoipa::path(
    post,
    path = "/event",
    tag = "Events",
    request_body = EventInput,
    responses(
        (status = 201, description = "Event created", body = EventResponse<CreatedEvent>),
        (status = 400, description = "Malformed body or missing field", body = EventResponse<String>),
        (status = 500, description = "Store failure", body = EventResponse<String>)
    )
)]
async fn create_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    EventJson(input): EventJson<EventInput>,
) -> EventResult<EventResponse<CreatedEvent>> {
    let created = service.create(input).await?;
    Ok(EventResponse::success(StatusCode::CREATED, created))
}

/// Get an event by id
#[utoipa::path(
    get,
    path = "/event/{eventId}",
    tag = "Events",
    params(
        ("eventId" = String, Path, description = "Hex ObjectId")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse<Event>),
        (status = 500, description = "No document or store failure", body = EventResponse<String>)
    )
)]
async fn get_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    EventId(id): EventId,
) -> EventResult<EventResponse<Event>> {
    let event = service.get(id).await?;
    Ok(EventResponse::success(StatusCode::OK, event))
}

/// Replace every field of an event
///
/// When no event matches, responds 200 with an empty event.
#[utoipa::path(
    put,
    path = "/event/{eventId}",
    tag = "Events",
    params(
        ("eventId" = String, Path, description = "Hex ObjectId")
    ),
    request_body = EventInput,
    responses(
        (status = 200, description = "Updated event, or an empty event when none matched", body = EventResponse<Event>),
        (status = 400, description = "Malformed body or missing field", body = EventResponse<String>),
        (status = 500, description = "Store failure", body = EventResponse<String>)
    )
)]
async fn update_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    EventId(id): EventId,
    EventJson(input): EventJson<EventInput>,
) -> EventResult<EventResponse<Event>> {
    let event = service.update(id, input).await?;
    Ok(EventResponse::success(StatusCode::OK, event))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/event/{eventId}",
    tag = "Events",
    params(
        ("eventId" = String, Path, description = "Hex ObjectId")
    ),
    responses(
        (status = 200, description = "Event deleted", body = EventResponse<String>),
        (status = 404, description = "No event with this id", body = EventResponse<String>),
        (status = 500, description = "Store failure", body = EventResponse<String>)
    )
)]
async fn delete_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    EventId(id): EventId,
) -> EventResult<EventResponse<&'static str>> {
    service.delete(id).await?;
    Ok(EventResponse::success(StatusCode::OK, DELETED_MESSAGE))
}

/// List all events
#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    responses(
        (status = 200, description = "All events, empty when none", body = EventResponse<Vec<Event>>),
        (status = 500, description = "Store or decode failure", body = EventResponse<String>)
    )
)]
async fn list_events<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
) -> EventResult<EventResponse<Vec<Event>>> {
    let events = service.list().await?;
    Ok(EventResponse::success(StatusCode::OK, events))
}
