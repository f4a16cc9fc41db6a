use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::ItineraryRecord;

/// Request body for `POST /v1/itineraries/generate`.
///
/// `pace` stays a plain string here so unknown values surface as a 422 from
/// the handler's validation rather than a deserialization 400.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateItineraryRequest {
    pub interests: Vec<String>,
    pub duration_days: i64,
    pub pace: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItineraryResponse {
    pub id: String,
    pub title: String,
    pub destination: String,
    pub duration_days: i64,
    pub travel_style: String,
    pub budget_range: String,
    pub user_id: Option<String>,
    pub created_at: String,
}

impl ItineraryRecord {
    pub fn to_response(&self) -> ItineraryResponse {
        ItineraryResponse {
            id: self.id.clone(),
            title: self.title.clone(),
            destination: self.destination.clone(),
            duration_days: self.duration_days,
            travel_style: self.travel_style.clone(),
            budget_range: self.budget_range.clone(),
            user_id: self.user_id.clone(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}
