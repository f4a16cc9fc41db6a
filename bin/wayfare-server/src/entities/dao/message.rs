use chrono::{DateTime, Utc};

/// A single message row in the `messages` table. Append-only.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    /// `"user"` or `"ai"`.
    pub sender: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
