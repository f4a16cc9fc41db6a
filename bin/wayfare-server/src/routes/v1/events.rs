//! Database-backed event listing.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::entities::EventStore;
use crate::error::ServerError;
use crate::schemas::v1::events::EventResponse;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_events), components(schemas(EventResponse)))]
pub struct EventsApi;

/// Register event routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/events", get(list_events))
}

#[utoipa::path(
    get,
    path = "/v1/events",
    tag = "events",
    responses(
        (status = 200, description = "Event list retrieved", body = Vec<EventResponse>),
        (status = 500, description = "Store error"),
    )
)]
pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EventResponse>>, ServerError> {
    let events = state.store.list_events().await?;
    Ok(Json(events.iter().map(|e| e.to_response()).collect()))
}
