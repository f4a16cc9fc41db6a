//! Community post routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use rand::Rng;
use utoipa::OpenApi;

use crate::entities::{PostRecord, PostStore};
use crate::error::ServerError;
use crate::schemas::v1::posts::{CreatePostRequest, PostResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(create_post, list_posts),
    components(schemas(CreatePostRequest, PostResponse))
)]
pub struct PostsApi;

/// Register post routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/posts", post(create_post).get(list_posts))
}

/// Validate that `raw` is an http(s) URL.
fn validate_media_url(raw: &str) -> Result<(), ServerError> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| ServerError::Unprocessable(format!("media_url is not a valid URL: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ServerError::Unprocessable(format!(
            "media_url scheme must be http or https (got '{other}')"
        ))),
    }
}

#[utoipa::path(
    post,
    path = "/v1/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 422, description = "Validation failure"),
        (status = 500, description = "Store error"),
    )
)]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ServerError> {
    validate_media_url(&req.media_url)?;
    if req.caption.trim().is_empty() {
        return Err(ServerError::Unprocessable("caption must not be empty".into()));
    }

    let post = PostRecord {
        // Randomly generated positive integer id.
        id: rand::thread_rng().gen_range(1..=i64::MAX),
        media_url: req.media_url,
        caption: req.caption,
        created_at: Utc::now(),
    };
    state.store.insert_post(post.clone()).await?;

    Ok((StatusCode::CREATED, Json(post.to_response())))
}

#[utoipa::path(
    get,
    path = "/v1/posts",
    tag = "posts",
    responses(
        (status = 200, description = "Posts, newest first", body = Vec<PostResponse>),
        (status = 500, description = "Store error"),
    )
)]
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PostResponse>>, ServerError> {
    let posts = state.store.list_posts().await?;
    Ok(Json(posts.iter().map(|p| p.to_response()).collect()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ftp_scheme_is_rejected() {
        let err = validate_media_url("ftp://x").unwrap_err();
        assert!(matches!(err, ServerError::Unprocessable(_)));
    }

    #[test]
    fn not_a_url_is_rejected() {
        assert!(validate_media_url("not a url").is_err());
    }

    #[test]
    fn https_is_accepted() {
        assert!(validate_media_url("https://cdn.example.com/photo.jpg").is_ok());
    }

    #[test]
    fn http_is_accepted() {
        assert!(validate_media_url("http://cdn.example.com/photo.jpg").is_ok());
    }
}
