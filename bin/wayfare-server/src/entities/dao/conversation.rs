use chrono::{DateTime, Utc};

/// A row in the `conversations` table.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: String,
    /// Owning auth identity; currently always absent.
    pub user_id: Option<String>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
