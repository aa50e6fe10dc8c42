//! API routes
//!
//! Event routes keep their full paths (`/event`, `/events`) at the root.

pub mod events;
pub mod health;

use axum::Router;

use crate::state::AppState;

pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(events::router(state))
        .merge(health::router(state.clone()))
}
