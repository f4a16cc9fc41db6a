pub mod chat;
pub mod conversations;
pub mod discover;
pub mod events;
pub mod itineraries;
pub mod posts;
pub mod profiles;

use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;

use crate::state::AppState;

/// Routes nested under `/v1`.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(chat::router())
        .merge(conversations::router())
        .merge(events::router())
        .merge(discover::router())
        .merge(itineraries::router())
        .merge(posts::router())
        .merge(profiles::router())
}

#[derive(OpenApi)]
#[openapi()]
pub struct V1Api;

pub fn api_docs() -> utoipa::openapi::OpenApi {
    let mut spec = V1Api::openapi();
    spec.merge(chat::ChatApi::openapi());
    spec.merge(conversations::ConversationsApi::openapi());
    spec.merge(events::EventsApi::openapi());
    spec.merge(discover::DiscoverApi::openapi());
    spec.merge(itineraries::ItinerariesApi::openapi());
    spec.merge(posts::PostsApi::openapi());
    spec.merge(profiles::ProfilesApi::openapi());
    spec
}
