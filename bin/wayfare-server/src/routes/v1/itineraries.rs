//! Offline itinerary generation and the saved-itinerary listing.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::entities::ItineraryStore;
use crate::error::ServerError;
use crate::planner::{self, Pace, Plan};
use crate::schemas::v1::itineraries::{GenerateItineraryRequest, ItineraryResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(generate_itinerary, list_itineraries),
    components(schemas(
        GenerateItineraryRequest,
        ItineraryResponse,
        Plan,
        planner::DayPlan,
        planner::Activity,
        Pace
    ))
)]
pub struct ItinerariesApi;

/// Register itinerary routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/itineraries/generate", post(generate_itinerary))
        .route("/itineraries", get(list_itineraries))
}

#[utoipa::path(
    post,
    path = "/v1/itineraries/generate",
    tag = "itineraries",
    request_body = GenerateItineraryRequest,
    responses(
        (status = 200, description = "Plan generated", body = Plan),
        (status = 422, description = "Validation failure"),
    )
)]
pub async fn generate_itinerary(
    Json(req): Json<GenerateItineraryRequest>,
) -> Result<Json<Plan>, ServerError> {
    let interests: Vec<String> = req
        .interests
        .iter()
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect();
    if interests.is_empty() {
        return Err(ServerError::Unprocessable("interests must not be empty".into()));
    }
    if req.duration_days < 1 {
        return Err(ServerError::Unprocessable("duration_days must be a positive integer".into()));
    }
    if req.duration_days > 30 {
        return Err(ServerError::Unprocessable("duration_days must be at most 30".into()));
    }
    let pace = Pace::from_str(&req.pace).map_err(|_| {
        ServerError::Unprocessable(format!(
            "pace must be one of relaxed, moderate, packed (got '{}')",
            req.pace
        ))
    })?;

    Ok(Json(planner::generate(&interests, req.duration_days as u32, pace)))
}

#[utoipa::path(
    get,
    path = "/v1/itineraries",
    tag = "itineraries",
    responses(
        (status = 200, description = "Saved itineraries", body = Vec<ItineraryResponse>),
        (status = 500, description = "Store error"),
    )
)]
pub async fn list_itineraries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItineraryResponse>>, ServerError> {
    let itineraries = state.store.list_itineraries().await?;
    Ok(Json(itineraries.iter().map(|i| i.to_response()).collect()))
}
