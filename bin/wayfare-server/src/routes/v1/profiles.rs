use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use utoipa::OpenApi;

use crate::entities::{Profile, ProfileStore};
use crate::error::ServerError;
use crate::schemas::v1::profiles::{ProfileResponse, UpsertProfileRequest};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(get_profile, upsert_profile),
    components(schemas(UpsertProfileRequest, ProfileResponse))
)]
pub struct ProfilesApi;

/// Register profile routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/profiles/{id}", get(get_profile).put(upsert_profile))
}

#[utoipa::path(
    get,
    path = "/v1/profiles/{id}",
    tag = "profiles",
    responses(
        (status = 200, description = "Profile retrieved", body = ProfileResponse),
        (status = 404, description = "Unknown profile"),
        (status = 500, description = "Store error"),
    )
)]
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProfileResponse>, ServerError> {
    let profile = state
        .store
        .get_profile(&id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("profile {id} not found")))?;
    Ok(Json(profile.to_response()))
}

#[utoipa::path(
    put,
    path = "/v1/profiles/{id}",
    tag = "profiles",
    request_body = UpsertProfileRequest,
    responses(
        (status = 200, description = "Profile saved", body = ProfileResponse),
        (status = 400, description = "Missing display name"),
        (status = 500, description = "Store error"),
    )
)]
pub async fn upsert_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpsertProfileRequest>,
) -> Result<Json<ProfileResponse>, ServerError> {
    if req.display_name.trim().is_empty() {
        return Err(ServerError::BadRequest("display_name is required".into()));
    }

    let now = Utc::now();
    // created_at survives updates; the upsert only replaces mutable fields.
    let created_at = state
        .store
        .get_profile(&id)
        .await?
        .map(|p| p.created_at)
        .unwrap_or(now);

    let profile = Profile {
        id,
        auth_id: req.auth_id,
        display_name: req.display_name.trim().to_owned(),
        bio: req.bio,
        email: req.email,
        created_at,
        updated_at: now,
    };
    state.store.upsert_profile(profile.clone()).await?;
    Ok(Json(profile.to_response()))
}
