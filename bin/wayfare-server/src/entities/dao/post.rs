use chrono::{DateTime, Utc};

/// A row in the `posts` table. The id is a randomly generated positive i64.
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub id: i64,
    pub media_url: String,
    pub caption: String,
    pub created_at: DateTime<Utc>,
}
