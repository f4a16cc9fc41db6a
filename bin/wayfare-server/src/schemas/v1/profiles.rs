use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::Profile;

/// Body of `PUT /v1/profiles/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertProfileRequest {
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
    pub email: Option<String>,
    pub auth_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub id: String,
    pub auth_id: Option<String>,
    pub display_name: String,
    pub bio: String,
    pub email: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Profile {
    pub fn to_response(&self) -> ProfileResponse {
        ProfileResponse {
            id: self.id.clone(),
            auth_id: self.auth_id.clone(),
            display_name: self.display_name.clone(),
            bio: self.bio.clone(),
            email: self.email.clone(),
            created_at: self.created_at.to_rfc3339(),
            updated_at: self.updated_at.to_rfc3339(),
        }
    }
}
