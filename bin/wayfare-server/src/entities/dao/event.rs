use chrono::{DateTime, Utc};

/// A row in the `events` table.
#[derive(Debug, Clone)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub venue: String,
    pub ticket_url: Option<String>,
    pub ticket_price: Option<String>,
}
