use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::EventRecord;

/// A transformed backend event row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub starts_at: String,
    pub ends_at: String,
    pub venue: String,
    pub ticket_url: Option<String>,
    pub ticket_price: Option<String>,
}

impl EventRecord {
    pub fn to_response(&self) -> EventResponse {
        EventResponse {
            id: self.id.clone(),
            title: self.title.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            starts_at: self.starts_at.to_rfc3339(),
            ends_at: self.ends_at.to_rfc3339(),
            venue: self.venue.clone(),
            ticket_url: self.ticket_url.clone(),
            ticket_price: self.ticket_price.clone(),
        }
    }
}
