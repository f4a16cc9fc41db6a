//! Static discover catalog routes.
//!
//! Served from the in-memory [`crate::catalog`] table with its own numeric
//! id scheme; independent of the database-backed `/v1/events`.

use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::catalog;
use crate::error::ServerError;
use crate::schemas::v1::discover::{DiscoverEventResponse, DiscoverQuery};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(list_discover_events, get_discover_event),
    components(schemas(DiscoverEventResponse))
)]
pub struct DiscoverApi;

/// Register discover routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/discover/events", get(list_discover_events))
        .route("/discover/events/{id}", get(get_discover_event))
}

#[utoipa::path(
    get,
    path = "/v1/discover/events",
    tag = "discover",
    params(("category" = Option<String>, Query, description = "Filter by category")),
    responses(
        (status = 200, description = "Catalog entries", body = Vec<DiscoverEventResponse>),
    )
)]
pub async fn list_discover_events(
    Query(query): Query<DiscoverQuery>,
) -> Json<Vec<DiscoverEventResponse>> {
    let events = catalog::by_category(query.category.as_deref());
    Json(events.into_iter().map(DiscoverEventResponse::from_catalog).collect())
}

#[utoipa::path(
    get,
    path = "/v1/discover/events/{id}",
    tag = "discover",
    responses(
        (status = 200, description = "Catalog entry", body = DiscoverEventResponse),
        (status = 404, description = "Unknown or non-numeric id"),
    )
)]
pub async fn get_discover_event(
    Path(id): Path<String>,
) -> Result<Json<DiscoverEventResponse>, ServerError> {
    // A non-numeric id is indistinguishable from a missing event to callers.
    let event = id
        .parse::<u32>()
        .ok()
        .and_then(catalog::by_id)
        .ok_or_else(|| ServerError::NotFound("Event not found.".into()))?;
    Ok(Json(DiscoverEventResponse::from_catalog(event)))
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn non_numeric_id_is_not_found() {
        let err = get_discover_event(Path("abc".into())).await.unwrap_err();
        assert!(matches!(err, ServerError::NotFound(m) if m == "Event not found."));
    }

    #[tokio::test]
    async fn unknown_numeric_id_is_not_found() {
        let err = get_discover_event(Path("9999".into())).await.unwrap_err();
        assert!(matches!(err, ServerError::NotFound(_)));
    }

    #[tokio::test]
    async fn known_id_is_returned() {
        let Json(event) = get_discover_event(Path("1".into())).await.unwrap();
        assert_eq!(event.id, 1);
    }
}
