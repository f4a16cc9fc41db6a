use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::PostRecord;

/// Request body for `POST /v1/posts`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub media_url: String,
    pub caption: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    pub id: i64,
    pub media_url: String,
    pub caption: String,
    pub created_at: String,
}

impl PostRecord {
    pub fn to_response(&self) -> PostResponse {
        PostResponse {
            id: self.id,
            media_url: self.media_url.clone(),
            caption: self.caption.clone(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}
