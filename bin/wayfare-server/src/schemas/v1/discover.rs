use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::CatalogEvent;

/// A static catalog entry. Note the numeric id scheme, independent of the
/// database-backed events.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DiscoverEventResponse {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub city: String,
    pub blurb: String,
    pub date: String,
}

impl DiscoverEventResponse {
    pub fn from_catalog(e: &CatalogEvent) -> Self {
        Self {
            id: e.id,
            title: e.title.to_owned(),
            category: e.category.to_owned(),
            city: e.city.to_owned(),
            blurb: e.blurb.to_owned(),
            date: e.date.to_owned(),
        }
    }
}

/// Query string for `GET /v1/discover/events`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DiscoverQuery {
    pub category: Option<String>,
}
