//! Events API routes backed by MongoDB

use axum::Router;
use domain_events::{EventService, MongoEventRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let events = &state.config.events;
    let repository = MongoEventRepository::with_collection(&state.db, &events.collection);
    let service = EventService::new(repository).with_timeout(events.store_timeout);

    handlers::router(service)
}
