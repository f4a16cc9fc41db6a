use chrono::{DateTime, Utc};

/// A row in the `itineraries` table, written by the assistant's save tool.
#[derive(Debug, Clone)]
pub struct ItineraryRecord {
    pub id: String,
    pub title: String,
    pub destination: String,
    pub duration_days: i64,
    pub travel_style: String,
    pub budget_range: String,
    /// Owning auth identity; currently always absent.
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
